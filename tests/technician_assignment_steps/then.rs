//! Then steps for technician assignment BDD scenarios.

use super::world::AssignmentWorld;
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::then;
use wifi_admin::assignment::services::AssignmentError;

#[then(r#"order "{order_id}" shows technician "{label}""#)]
fn order_shows_technician(
    world: &AssignmentWorld,
    order_id: String,
    label: String,
) -> Result<(), eyre::Report> {
    let rows = world.view.rows().wrap_err("read order rows")?;
    let row = rows
        .iter()
        .find(|row| row.id == order_id)
        .ok_or_else(|| eyre!("order {order_id} is not displayed"))?;
    if row.technician != label {
        return Err(eyre!(
            "expected technician {label}, found {}",
            row.technician
        ));
    }
    Ok(())
}

#[then(r#"a "{kind}" notice is shown"#)]
fn notice_is_shown(world: &AssignmentWorld, kind: String) -> Result<(), eyre::Report> {
    let notices = world.notifier.notices();
    if !notices.iter().any(|notice| notice.kind().as_str() == kind) {
        return Err(eyre!("no {kind} notice among {notices:?}"));
    }
    Ok(())
}

#[then("no technician is offered for assignment")]
fn no_technician_offered(world: &AssignmentWorld) -> Result<(), eyre::Report> {
    let candidates = world
        .view
        .technician_candidates()
        .wrap_err("read candidates")?;
    if !candidates.is_none_available() {
        return Err(eyre!("expected no candidates, got {candidates:?}"));
    }
    Ok(())
}

#[then(r#"the assignment fails with "{message}""#)]
fn assignment_fails_with(world: &AssignmentWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre!("missing assignment result"))?;
    let actual = match result {
        Err(AssignmentError::Gateway(err)) => err.operator_message().to_owned(),
        Err(AssignmentError::Rejected(reason)) => reason.clone(),
        other => return Err(eyre!("expected a backend failure, got {other:?}")),
    };
    if actual != message {
        return Err(eyre!("expected failure {message}, found {actual}"));
    }
    Ok(())
}

#[then("no write reached the backend")]
fn no_write_sent(world: &AssignmentWorld) -> Result<(), eyre::Report> {
    let calls = world.backend.calls().wrap_err("read recorded calls")?;
    if !calls.is_empty() {
        return Err(eyre!("expected no backend calls, got {calls:?}"));
    }
    Ok(())
}
