//! Text rendering of dashboard screens through `minijinja` templates.

mod renderer;
mod templates;

pub use renderer::{PresentationError, PresentationResult, Renderer};
