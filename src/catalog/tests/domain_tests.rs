//! Domain-level tests for entity decoding and write requests.

use crate::catalog::domain::{
    CatalogDomainError, NewTechnician, Order, OrderStatus, Product, ProductDraft, Technician,
    TechnicianStatus,
};
use crate::gateway::domain::decode_collection;
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(json!(""))]
#[case(json!(null))]
fn blank_technician_reference_means_unassigned(#[case] technician_id: serde_json::Value) {
    let order: Order = serde_json::from_value(json!({
        "id": "O1",
        "userId": "U1",
        "packageId": 3,
        "technicianId": technician_id,
        "status": "PENDING",
    }))
    .expect("order decodes");

    assert!(!order.is_assigned());
    assert_eq!(order.package_id().as_str(), "3");
    assert!(!order.violates_assignment_invariant());
}

#[rstest]
fn assigned_pending_order_violates_invariant() {
    let order: Order = serde_json::from_value(json!({
        "id": "O2",
        "technicianId": "T1",
        "status": "PENDING",
    }))
    .expect("order decodes");

    assert!(order.violates_assignment_invariant());
}

#[rstest]
#[case("PENDING", OrderStatus::Pending)]
#[case("IN_PROGRESS", OrderStatus::InProgress)]
#[case("CANCELED", OrderStatus::Canceled)]
#[case("in_progress", OrderStatus::Unknown("in_progress".to_owned()))]
#[case("CANCELLED", OrderStatus::Unknown("CANCELLED".to_owned()))]
#[case(" PENDING", OrderStatus::Unknown(" PENDING".to_owned()))]
#[case("ON_HOLD", OrderStatus::Unknown("ON_HOLD".to_owned()))]
fn order_status_preserves_unknown_values(#[case] raw: &str, #[case] expected: OrderStatus) {
    let status = OrderStatus::from(raw.to_owned());
    assert_eq!(status.as_str(), raw);
    assert_eq!(status, expected);
}

#[rstest]
#[case("AVAILABLE", TechnicianStatus::Available)]
#[case("available", TechnicianStatus::Other("available".to_owned()))]
#[case(" AVAILABLE", TechnicianStatus::Other(" AVAILABLE".to_owned()))]
#[case("Available ", TechnicianStatus::Other("Available ".to_owned()))]
fn technician_status_matches_exactly(#[case] raw: &str, #[case] expected: TechnicianStatus) {
    let technician: Technician =
        serde_json::from_value(json!({"id": "T1", "status": raw})).expect("technician decodes");

    assert_eq!(technician.status(), &expected);
    let body = serde_json::to_value(&technician).expect("technician encodes");
    assert_eq!(body["status"], json!(raw));
}

#[rstest]
fn float_assignment_time_keeps_the_order_listed() {
    let orders: Vec<Order> = decode_collection(
        json!([
            {"id": "O1", "status": "ASSIGNED", "technicianId": "T1", "assignedAt": 1_700_000_000_000.0},
            {"id": "O2", "status": "PENDING"},
        ]),
        "orders",
    );

    let ids: Vec<&str> = orders.iter().map(|order| order.id().as_str()).collect();
    assert_eq!(ids, vec!["O1", "O2"]);
    assert_eq!(orders[0].assigned_at(), Some(1_700_000_000_000));
    assert_eq!(orders[1].assigned_at(), None);
}

#[rstest]
#[case(json!(1_700_000_000_000_i64), Some(1_700_000_000_000))]
#[case(json!(1_700_000_000_000.75), Some(1_700_000_000_000))]
#[case(json!("1700000000000"), Some(1_700_000_000_000))]
#[case(json!(" 1700000000000.0 "), Some(1_700_000_000_000))]
#[case(json!("yesterday"), None)]
#[case(json!(""), None)]
#[case(json!(null), None)]
#[case(json!({"seconds": 1}), None)]
fn assignment_time_decodes_leniently(
    #[case] assigned_at: serde_json::Value,
    #[case] expected: Option<i64>,
) {
    let order: Order = serde_json::from_value(json!({"id": "O1", "assignedAt": assigned_at}))
        .expect("order decodes");
    assert_eq!(order.assigned_at(), expected);
}

#[rstest]
#[case(json!(true), true)]
#[case(json!("true"), true)]
#[case(json!(" TRUE "), true)]
#[case(json!(false), false)]
#[case(json!("false"), false)]
#[case(json!("yes"), false)]
#[case(json!(1), false)]
#[case(json!(null), false)]
fn confirmation_flags_decode_leniently(#[case] raw: serde_json::Value, #[case] expected: bool) {
    let order: Order = serde_json::from_value(json!({
        "id": "O1",
        "confirmedByUser": raw,
        "confirmedByAdmin": raw,
    }))
    .expect("order decodes");

    assert_eq!(order.confirmed_by_user(), expected);
    assert_eq!(order.confirmed_by_admin(), expected);
}

#[rstest]
fn order_without_an_id_is_the_only_one_skipped() {
    let orders: Vec<Order> = decode_collection(
        json!({"orders": [
            {"status": "PENDING", "assignedAt": "soon"},
            {"id": "O2", "confirmedByUser": "true", "assignedAt": "soon"},
        ]}),
        "orders",
    );

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id().as_str(), "O2");
    assert!(orders[0].confirmed_by_user());
}

#[rstest]
#[case("2024-05-01T08:30:00Z")]
#[case("2024-05-01")]
fn order_day_accepts_timestamps_and_dates(#[case] raw: &str) {
    let order: Order =
        serde_json::from_value(json!({"id": "O3", "orderDate": raw})).expect("order decodes");
    assert_eq!(
        order.order_day(),
        NaiveDate::from_ymd_opt(2024, 5, 1)
    );
}

#[rstest]
fn technician_status_keeps_unrecognised_values() {
    let technician: Technician = serde_json::from_value(json!({
        "id": 7,
        "name": "Sari",
        "status": "TRAINING",
        "totalJobsCompleted": null,
    }))
    .expect("technician decodes");

    assert_eq!(technician.id().as_str(), "7");
    assert_eq!(
        technician.status(),
        &TechnicianStatus::Other("TRAINING".to_owned())
    );
    assert!(!technician.status().is_available());
    assert_eq!(technician.total_jobs_completed(), 0);
}

#[rstest]
fn product_amounts_accept_numeric_strings() {
    let product: Product = serde_json::from_value(json!({
        "id": 1,
        "name": "Home 30",
        "price": "199000",
        "speed": 30,
    }))
    .expect("product decodes");

    assert!((product.price() - 199_000.0).abs() < f64::EPSILON);
    assert!((product.speed() - 30.0).abs() < f64::EPSILON);
}

#[rstest]
fn malformed_amount_is_rejected() {
    let result = serde_json::from_value::<Product>(json!({"id": 1, "price": "cheap"}));
    assert!(result.is_err());
}

#[rstest]
fn new_technician_derives_email_and_initial_status() {
    let technician =
        NewTechnician::new("Rina", "Bandung", "rina", "secret").expect("valid registration");

    assert_eq!(technician.email(), "rina.tech@gmail.com");
    let body = technician.to_body();
    assert_eq!(body["status"], json!("AVAILABLE"));
    assert_eq!(body["email"], json!("rina.tech@gmail.com"));
}

#[rstest]
#[case("", "Bandung", "rina", "secret", "name")]
#[case("Rina", " ", "rina", "secret", "location")]
#[case("Rina", "Bandung", "", "secret", "username")]
#[case("Rina", "Bandung", "rina", "", "password")]
fn new_technician_requires_every_field(
    #[case] name: &str,
    #[case] location: &str,
    #[case] username: &str,
    #[case] password: &str,
    #[case] field: &'static str,
) {
    assert_eq!(
        NewTechnician::new(name, location, username, password),
        Err(CatalogDomainError::MissingField(field))
    );
}

#[rstest]
#[case("", 1.0, 1.0, CatalogDomainError::MissingField("name"))]
#[case("Home", -1.0, 1.0, CatalogDomainError::InvalidAmount("price"))]
#[case("Home", 1.0, f64::NAN, CatalogDomainError::InvalidAmount("speed"))]
fn product_draft_validates_input(
    #[case] name: &str,
    #[case] price: f64,
    #[case] speed: f64,
    #[case] expected: CatalogDomainError,
) {
    assert_eq!(ProductDraft::new(name, price, speed), Err(expected));
}
