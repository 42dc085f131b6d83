//! Behaviour tests for assigning technicians to installation orders.

#[path = "technician_assignment_steps/mod.rs"]
mod technician_assignment_steps_defs;

use rstest_bdd_macros::scenario;
use technician_assignment_steps_defs::world::{AssignmentWorld, world};

#[scenario(
    path = "tests/features/technician_assignment.feature",
    name = "Assigning an available technician"
)]
#[tokio::test(flavor = "multi_thread")]
async fn assign_available_technician(world: AssignmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/technician_assignment.feature",
    name = "Backend refuses an unavailable technician"
)]
#[tokio::test(flavor = "multi_thread")]
async fn backend_refuses_unavailable_technician(world: AssignmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/technician_assignment.feature",
    name = "Blank selection never reaches the backend"
)]
#[tokio::test(flavor = "multi_thread")]
async fn blank_selection_is_local(world: AssignmentWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/technician_assignment.feature",
    name = "Refresh failure keeps the previous table"
)]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_failure_keeps_table(world: AssignmentWorld) {
    let _ = world;
}
