//! Sign-in, sign-up and sign-out tests.

use crate::gateway::{
    adapters::InMemoryResourceGateway,
    domain::{GatewayMethod, Resource, ResourcePath},
};
use crate::session::{
    adapters::InMemorySessionStore,
    domain::{AdminIdentity, AuthDomainError, Credentials, Registration, SessionKey},
    ports::SessionStore,
    services::{AuthError, AuthService, SessionGate},
};
use rstest::{fixture, rstest};
use serde_json::json;
use std::sync::Arc;

struct Harness {
    backend: InMemoryResourceGateway,
    store: Arc<InMemorySessionStore>,
    auth: AuthService<InMemoryResourceGateway, InMemorySessionStore>,
}

#[fixture]
fn harness() -> Harness {
    let backend = InMemoryResourceGateway::new();
    backend
        .seed(
            Resource::Admin,
            vec![json!({"id": "A1", "name": "Ops", "email": "ops@example.com", "password": "pw"})],
        )
        .expect("seed admin");
    let store = Arc::new(InMemorySessionStore::new());
    let auth = AuthService::new(Arc::new(backend.clone()), Arc::clone(&store));
    Harness {
        backend,
        store,
        auth,
    }
}

fn login_path() -> ResourcePath {
    ResourcePath::collection(Resource::Admin).join("login")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_persists_identity_and_token(harness: Harness) {
    let credentials = Credentials::new("ops@example.com", "pw").expect("valid credentials");

    let signed_in = harness.auth.login(&credentials).await.expect("login succeeds");

    assert_eq!(signed_in.identity.name(), Some("Ops"));
    assert!(signed_in.token.is_some());
    assert!(SessionGate::new(Arc::clone(&harness.store)).check().is_allowed());
    assert_eq!(
        harness.store.get(SessionKey::Token).expect("read"),
        Some("token-A1".to_owned())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_login_persists_nothing(harness: Harness) {
    let credentials = Credentials::new("ops@example.com", "wrong").expect("valid credentials");

    let result = harness.auth.login(&credentials).await;

    let Err(AuthError::Gateway(err)) = result else {
        panic!("expected gateway error");
    };
    assert_eq!(err.operator_message(), "Invalid email or password");
    assert_eq!(harness.store.get(SessionKey::Admin).expect("read"), None);
}

#[rstest]
#[case(json!({"message": "ok"}), None)]
#[case(json!({"accessToken": "t-2"}), Some("t-2"))]
#[case(json!({"data": {"token": "t-3"}}), Some("t-3"))]
#[tokio::test(flavor = "multi_thread")]
async fn login_falls_back_to_email_identity_and_finds_token(
    harness: Harness,
    #[case] response: serde_json::Value,
    #[case] expected_token: Option<&str>,
) {
    harness
        .store
        .set(SessionKey::Token, "stale")
        .expect("seed stale token");
    harness
        .backend
        .script(GatewayMethod::Create, &login_path(), Ok(response))
        .expect("script");
    let credentials = Credentials::new("new@example.com", "pw").expect("valid credentials");

    let signed_in = harness.auth.login(&credentials).await.expect("login succeeds");

    assert_eq!(signed_in.identity, AdminIdentity::from_email("new@example.com"));
    assert_eq!(
        harness.store.get(SessionKey::Token).expect("read").as_deref(),
        expected_token
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_then_login(harness: Harness) {
    let credentials = Credentials::new("new@example.com", "secret").expect("valid credentials");
    let registration = Registration::new("Nia", "Putri", credentials.clone());

    let message = harness
        .auth
        .register(&registration)
        .await
        .expect("register succeeds");
    let signed_in = harness.auth.login(&credentials).await.expect("login succeeds");

    assert_eq!(message, "Admin registered");
    assert_eq!(signed_in.identity.display_name(), "Nia Putri");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_clears_both_keys(harness: Harness) {
    let credentials = Credentials::new("ops@example.com", "pw").expect("valid credentials");
    harness.auth.login(&credentials).await.expect("login succeeds");

    harness.auth.logout().expect("logout succeeds");

    assert_eq!(harness.store.get(SessionKey::Admin).expect("read"), None);
    assert_eq!(harness.store.get(SessionKey::Token).expect("read"), None);
    assert!(!SessionGate::new(Arc::clone(&harness.store)).check().is_allowed());
}

#[rstest]
#[case("", "pw", "email")]
#[case("ops@example.com", "", "password")]
fn credentials_require_both_fields(
    #[case] email: &str,
    #[case] password: &str,
    #[case] field: &'static str,
) {
    assert_eq!(
        Credentials::new(email, password),
        Err(AuthDomainError::MissingField(field))
    );
}
