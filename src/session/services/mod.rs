//! Orchestration services for sign-in and the session gate.

mod auth;
mod gate;

pub use auth::{AuthError, AuthResult, AuthService, SignedIn};
pub use gate::SessionGate;
