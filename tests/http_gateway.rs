//! HTTP gateway tests against a local `axum` backend.

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    routing::{get, post, put},
};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use wifi_admin::{
    catalog::domain::Order,
    cli::{Commands, Console},
    config::{AdminConfig, AuthPolicy},
    gateway::{
        adapters::HttpResourceGateway,
        domain::{BearerToken, Resource, ResourcePath},
        ports::{GatewayError, ResourceGateway, fetch_collection},
    },
    orders::format_rupiah,
    session::{adapters::InMemorySessionStore, services::SessionGate},
};

const TOKEN: &str = "token-A1";

fn authorised(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(format!("Bearer {TOKEN}").as_str())
}

async fn list_orders(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorised(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Unauthorized"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"orders": [
            {"id": "O1", "userId": "U1", "packageId": 1, "technicianId": null,
             "totalPrice": "250000", "status": "pending"}
        ]})),
    )
}

async fn list_users() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": {"message": "database offline"}})),
    )
}

async fn list_technicians() -> Json<Value> {
    Json(json!({"data": [{"id": "T1", "name": "Rina", "status": "AVAILABLE"}]}))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body.get("password").and_then(Value::as_str) != Some("rahasia") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid email or password"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "message": "Login successful",
            "admin": {"id": "A1", "name": "Sari", "email": body.get("email")},
            "token": TOKEN,
        })),
    )
}

async fn assign(
    headers: HeaderMap,
    Path(order_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorised(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Unauthorized"})),
        );
    }
    match body.get("technicianId").and_then(Value::as_str) {
        Some("T1") => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Technician assigned",
                "data": {"orderId": order_id, "technicianId": "T1"},
            })),
        ),
        _ => (
            StatusCode::CONFLICT,
            Json(json!({"message": "Technician is not available"})),
        ),
    }
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/orders/", get(list_orders))
        .route("/api/orders/:id/assign-technician", put(assign))
        .route("/api/users/", get(list_users))
        .route("/api/technicians/", get(list_technicians))
        .route("/api/admin/login", post(login));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let address = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("backend serves");
    });
    format!("http://{address}")
}

fn gateway(base_url: &str, policy: AuthPolicy, token: Option<&str>) -> HttpResourceGateway {
    let config = AdminConfig::new(base_url)
        .expect("valid base URL")
        .with_auth_policy(policy);
    HttpResourceGateway::new(&config)
        .expect("client builds")
        .with_bearer_token(token.and_then(BearerToken::new))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collection_reads_carry_the_bearer_token() {
    let base_url = spawn_backend().await;
    let gateway = gateway(&base_url, AuthPolicy::All, Some(TOKEN));

    let orders: Vec<Order> = fetch_collection(&gateway, Resource::Orders)
        .await
        .expect("orders load");

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id().as_str(), "O1");
    assert!(!orders[0].is_assigned());
    assert_eq!(format_rupiah(orders[0].total_price()), "Rp 250.000");
}

#[rstest]
#[case(AuthPolicy::All, None)]
#[case(AuthPolicy::WritesOnly, Some(TOKEN))]
#[case(AuthPolicy::Never, Some(TOKEN))]
#[tokio::test(flavor = "multi_thread")]
async fn reads_without_a_token_are_refused(
    #[case] policy: AuthPolicy,
    #[case] token: Option<&str>,
) {
    let base_url = spawn_backend().await;
    let gateway = gateway(&base_url, policy, token);

    let err = gateway
        .fetch(&ResourcePath::collection(Resource::Orders))
        .await
        .expect_err("backend refuses");

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.operator_message(), "Unauthorized");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nested_error_messages_are_extracted() {
    let base_url = spawn_backend().await;
    let gateway = gateway(&base_url, AuthPolicy::All, Some(TOKEN));

    let err = gateway
        .fetch(&ResourcePath::collection(Resource::Users))
        .await
        .expect_err("backend fails");

    assert!(matches!(err, GatewayError::Status { status: 500, .. }));
    assert_eq!(err.operator_message(), "database offline");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignment_conflict_surfaces_backend_message() {
    let base_url = spawn_backend().await;
    let gateway = gateway(&base_url, AuthPolicy::WritesOnly, Some(TOKEN));
    let path = ResourcePath::item(Resource::Orders, "O1").join("assign-technician");

    let err = gateway
        .update(&path, &json!({"technicianId": "T9"}))
        .await
        .expect_err("backend refuses");

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.operator_message(), "Technician is not available");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_in_console_assigns_over_http() {
    let base_url = spawn_backend().await;
    let store = Arc::new(InMemorySessionStore::new());
    let signed_out = Console::new(
        Arc::new(gateway(&base_url, AuthPolicy::All, None)),
        Arc::clone(&store),
    )
    .expect("console");
    let mut out = Vec::new();
    signed_out
        .run(
            Commands::Login {
                email: "sari@isp.test".to_owned(),
                password: "rahasia".to_owned(),
            },
            &mut out,
        )
        .await
        .expect("login succeeds");

    let token = SessionGate::new(Arc::clone(&store)).bearer_token();
    assert_eq!(token.as_ref().map(BearerToken::expose), Some(TOKEN));
    let config = AdminConfig::new(&base_url).expect("valid base URL");
    let signed_in = Console::new(
        Arc::new(
            HttpResourceGateway::new(&config)
                .expect("client builds")
                .with_bearer_token(token),
        ),
        store,
    )
    .expect("console");
    let result = signed_in
        .run(
            Commands::Assign {
                order: "O1".to_owned(),
                technician: "T1".to_owned(),
            },
            &mut out,
        )
        .await;

    result.expect("assignment accepted");
    let output = String::from_utf8(out).expect("utf-8 output");
    assert!(output.contains("Signed in as Sari"));
    assert!(output.contains("[success] Technician assigned"));
}
