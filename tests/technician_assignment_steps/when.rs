//! When steps for technician assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the operator assigns technician "{technician_id}" to order "{order_id}""#)]
fn operator_assigns(world: &mut AssignmentWorld, technician_id: String, order_id: String) {
    let result = run_async(
        world
            .workflow
            .assign_technician(&world.view, &order_id, &technician_id),
    );
    world.last_result = Some(result);
}

#[when(r#"the operator submits order "{order_id}" without a technician"#)]
fn operator_submits_blank(world: &mut AssignmentWorld, order_id: String) {
    let result = run_async(world.workflow.assign_technician(&world.view, &order_id, ""));
    world.last_result = Some(result);
}
