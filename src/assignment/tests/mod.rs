//! Unit tests for the assignment context.
