//! Step definitions for technician assignment scenarios.

pub mod world;

mod given;
mod then;
mod when;
