//! Then steps for session gate BDD scenarios.

use super::world::SessionWorld;
use eyre::eyre;
use rstest_bdd_macros::then;
use wifi_admin::{
    gateway::ports::GatewayError,
    session::{domain::GateDecision, services::AuthError},
};

#[then("the admin is sent to sign in")]
fn sent_to_sign_in(world: &SessionWorld) -> Result<(), eyre::Report> {
    match world.last_decision.as_ref() {
        Some(GateDecision::RedirectToSignIn) => Ok(()),
        other => Err(eyre!("expected a redirect to sign in, got {other:?}")),
    }
}

#[then(r#"the protected screen is shown to "{name}""#)]
fn screen_shown_to(world: &SessionWorld, name: String) -> Result<(), eyre::Report> {
    match world.last_decision.as_ref() {
        Some(GateDecision::Allow(identity)) if identity.display_name() == name => Ok(()),
        other => Err(eyre!("expected access for {name}, got {other:?}")),
    }
}

#[then(r#"sign-in fails with "{message}""#)]
fn sign_in_fails_with(world: &SessionWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_login.as_ref() {
        Some(Err(AuthError::Gateway(err @ GatewayError::Status { .. })))
            if err.operator_message() == message =>
        {
            Ok(())
        }
        other => Err(eyre!("expected sign-in failure {message}, got {other:?}")),
    }
}
