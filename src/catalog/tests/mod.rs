//! Unit tests for the catalogue context.

mod domain_tests;
