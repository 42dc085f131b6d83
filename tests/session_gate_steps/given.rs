//! Given steps for session gate BDD scenarios.

use super::world::SessionWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;
use wifi_admin::{
    gateway::domain::Resource,
    session::{domain::SessionKey, ports::SessionStore},
};

#[given("no admin session is stored")]
fn no_session(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    world
        .store
        .remove(SessionKey::Admin)
        .wrap_err("clear stored admin")?;
    Ok(())
}

#[given(r#"the stored admin identity is "{raw}""#)]
fn stored_identity(world: &mut SessionWorld, raw: String) -> Result<(), eyre::Report> {
    world
        .store
        .set(SessionKey::Admin, &raw)
        .wrap_err("store admin identity")?;
    Ok(())
}

#[given(r#"an admin account "{email}" with password "{password}""#)]
fn admin_account(
    world: &mut SessionWorld,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    world
        .backend
        .seed(
            Resource::Admin,
            vec![json!({"id": "A1", "name": "Sari", "email": email, "password": password})],
        )
        .wrap_err("seed admin account")?;
    Ok(())
}
