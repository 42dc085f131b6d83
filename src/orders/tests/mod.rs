//! Unit tests for the order collection view.
