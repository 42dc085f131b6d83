//! Behaviour tests for admin sign-in and the session gate.

#[path = "session_gate_steps/mod.rs"]
mod session_gate_steps_defs;

use rstest_bdd_macros::scenario;
use session_gate_steps_defs::world::{SessionWorld, world};

#[scenario(
    path = "tests/features/session_gate.feature",
    name = "Signed-out admin is redirected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn signed_out_admin_is_redirected(world: SessionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_gate.feature",
    name = "Malformed stored identity is rejected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_identity_is_rejected(world: SessionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_gate.feature",
    name = "Signing in opens protected screens"
)]
#[tokio::test(flavor = "multi_thread")]
async fn signing_in_opens_protected_screens(world: SessionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_gate.feature",
    name = "Wrong password keeps the gate closed"
)]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_password_keeps_gate_closed(world: SessionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/session_gate.feature",
    name = "Signing out closes the gate"
)]
#[tokio::test(flavor = "multi_thread")]
async fn signing_out_closes_gate(world: SessionWorld) {
    let _ = world;
}
