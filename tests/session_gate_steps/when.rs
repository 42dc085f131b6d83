//! When steps for session gate BDD scenarios.

use super::world::{SessionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use wifi_admin::session::domain::Credentials;

#[when(r#"the admin signs in with "{email}" and "{password}""#)]
fn admin_signs_in(
    world: &mut SessionWorld,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    let credentials = Credentials::new(email, password).wrap_err("build credentials")?;
    let result = run_async(world.auth.login(&credentials));
    world.last_login = Some(result);
    Ok(())
}

#[when("the admin signs out")]
fn admin_signs_out(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    world.auth.logout().wrap_err("sign out")?;
    Ok(())
}

#[when("a protected screen is opened")]
fn protected_screen_opened(world: &mut SessionWorld) {
    world.last_decision = Some(world.gate.check());
}
