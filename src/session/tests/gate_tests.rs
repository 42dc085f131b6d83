//! Session gate decision tests.

use crate::session::{
    adapters::InMemorySessionStore,
    domain::{GateDecision, SessionKey},
    ports::SessionStore,
    services::SessionGate,
};
use rstest::rstest;
use std::sync::Arc;

fn gate_with(admin: Option<&str>) -> SessionGate<InMemorySessionStore> {
    let store = InMemorySessionStore::new();
    if let Some(raw) = admin {
        store.set(SessionKey::Admin, raw).expect("seed admin");
    }
    SessionGate::new(Arc::new(store))
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("{not json"))]
#[case(Some("null"))]
#[case(Some("\"ops@example.com\""))]
#[case(Some("[1, 2]"))]
fn missing_or_malformed_identity_redirects(#[case] admin: Option<&str>) {
    assert_eq!(gate_with(admin).check(), GateDecision::RedirectToSignIn);
}

/// Parsed values that are not objects are refused, even when a loose
/// truthiness check would accept them.
#[rstest]
#[case::empty_array("[]")]
#[case::bare_string("\"x\"")]
#[case::number("1")]
#[case::boolean("true")]
fn truthy_non_object_identity_redirects(#[case] admin: &str) {
    assert_eq!(gate_with(Some(admin)).check(), GateDecision::RedirectToSignIn);
}

#[rstest]
#[case(r#"{"name": "Ops", "email": "ops@example.com"}"#)]
#[case(r#"{"id": 4}"#)]
#[case("{}")]
fn well_formed_identity_allows_entry(#[case] admin: &str) {
    assert!(gate_with(Some(admin)).check().is_allowed());
}

#[rstest]
fn token_is_exposed_for_the_gateway() {
    let store = InMemorySessionStore::new();
    store.set(SessionKey::Token, " abc123 ").expect("seed token");
    let gate = SessionGate::new(Arc::new(store));

    assert_eq!(
        gate.bearer_token().map(|token| token.expose().to_owned()),
        Some("abc123".to_owned())
    );
}
