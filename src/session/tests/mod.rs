//! Unit tests for the session context.

mod auth_tests;
mod gate_tests;
