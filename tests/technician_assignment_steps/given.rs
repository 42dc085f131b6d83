//! Given steps for technician assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;
use wifi_admin::gateway::{
    domain::{GatewayMethod, Resource, ResourcePath},
    ports::GatewayError,
};

#[given(r#"an order "{order_id}" awaiting installation"#)]
fn order_awaiting_installation(
    world: &mut AssignmentWorld,
    order_id: String,
) -> Result<(), eyre::Report> {
    world.orders.push(json!({
        "id": order_id,
        "userId": "U1",
        "packageId": 1,
        "technicianId": "",
        "address": "Jl. Merdeka 1",
        "totalPrice": 250_000,
        "status": "PENDING",
    }));
    world
        .backend
        .seed(Resource::Orders, world.orders.clone())
        .wrap_err("seed orders")?;
    world
        .backend
        .seed(Resource::Users, vec![json!({"id": "U1", "name": "Andi"})])
        .wrap_err("seed users")?;
    Ok(())
}

#[given(r#"an available technician "{technician_id}" named "{name}""#)]
fn available_technician(
    world: &mut AssignmentWorld,
    technician_id: String,
    name: String,
) -> Result<(), eyre::Report> {
    add_technician(world, technician_id, name, "AVAILABLE")
}

#[given(r#"an off-duty technician "{technician_id}" named "{name}""#)]
fn off_duty_technician(
    world: &mut AssignmentWorld,
    technician_id: String,
    name: String,
) -> Result<(), eyre::Report> {
    add_technician(world, technician_id, name, "OFF")
}

#[given("the order view has loaded")]
fn order_view_loaded(world: &mut AssignmentWorld) -> Result<(), eyre::Report> {
    run_async(world.view.load()).wrap_err("load order view")?;
    world.backend.clear_calls().wrap_err("clear recorded calls")?;
    Ok(())
}

#[given("the technician list can no longer be read")]
fn technician_list_unreadable(world: &mut AssignmentWorld) -> Result<(), eyre::Report> {
    world
        .backend
        .script(
            GatewayMethod::Fetch,
            &ResourcePath::collection(Resource::Technicians),
            Err(GatewayError::Transport {
                path: "technicians".to_owned(),
                message: "connection reset".to_owned(),
            }),
        )
        .wrap_err("script technician read failure")?;
    Ok(())
}

fn add_technician(
    world: &mut AssignmentWorld,
    technician_id: String,
    name: String,
    status: &str,
) -> Result<(), eyre::Report> {
    world
        .technicians
        .push(json!({"id": technician_id, "name": name, "status": status}));
    world
        .backend
        .seed(Resource::Technicians, world.technicians.clone())
        .wrap_err("seed technicians")?;
    Ok(())
}
