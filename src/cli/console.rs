//! Command dispatch over the bounded contexts.

use super::{Commands, ProductCommand, TechnicianCommand};
use crate::assignment::{adapters::RecordingNotifier, services::AssignmentWorkflow};
use crate::catalog::{
    domain::{NewTechnician, OrderId, ProductDraft, ProductId},
    services::CatalogService,
};
use crate::dashboard::DashboardService;
use crate::gateway::ports::ResourceGateway;
use crate::orders::{OrderCollectionView, ViewError};
use crate::presentation::Renderer;
use crate::session::{
    domain::{Credentials, GateDecision, Registration},
    ports::SessionStore,
    services::{AuthService, SessionGate},
};
use eyre::{Result, bail};
use mockable::DefaultClock;
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, warn};

type View<G> = OrderCollectionView<G, DefaultClock>;

/// Runs commands against one gateway and session store.
pub struct Console<G, S>
where
    G: ResourceGateway,
    S: SessionStore,
{
    gateway: Arc<G>,
    store: Arc<S>,
    clock: Arc<DefaultClock>,
    renderer: Renderer,
}

impl<G, S> fmt::Debug for Console<G, S>
where
    G: ResourceGateway,
    S: SessionStore,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl<G, S> Console<G, S>
where
    G: ResourceGateway,
    S: SessionStore,
{
    /// Creates a console.
    ///
    /// # Errors
    ///
    /// Returns an error when the built-in templates fail to compile.
    pub fn new(gateway: Arc<G>, store: Arc<S>) -> Result<Self> {
        Ok(Self {
            gateway,
            store,
            clock: Arc::new(DefaultClock),
            renderer: Renderer::new()?,
        })
    }

    /// Runs one command, writing the rendered screen to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error when a protected command is run while signed out, or
    /// when the command fails.
    pub async fn run<W: Write>(&self, command: Commands, out: &mut W) -> Result<()> {
        if !command.is_public() {
            self.require_session()?;
        }
        match command {
            Commands::Login { email, password } => self.login(&email, &password, out).await,
            Commands::Register {
                first_name,
                last_name,
                email,
                password,
            } => {
                let credentials = Credentials::new(email, password)?;
                let registration = Registration::new(first_name, last_name, credentials);
                let message = self.auth().register(&registration).await?;
                emit(out, &message)
            }
            Commands::Logout => {
                self.auth().logout()?;
                emit(out, "Signed out")
            }
            Commands::Metrics => {
                let metrics = DashboardService::new(Arc::clone(&self.gateway)).metrics().await;
                emit(out, &self.renderer.metrics(&metrics)?)
            }
            Commands::RecentOrders => {
                let rows = DashboardService::new(Arc::clone(&self.gateway))
                    .recent_orders()
                    .await?;
                emit(out, &self.renderer.recent_orders(&rows)?)
            }
            Commands::Orders => {
                let view = self.load_view().await?;
                emit(out, &self.renderer.orders(&view.rows()?, &view.load_state()?)?)
            }
            Commands::Candidates { order } => self.candidates(&order, out).await,
            Commands::Assign { order, technician } => self.assign(&order, &technician, out).await,
            Commands::Technicians { action } => self.technicians(action, out).await,
            Commands::Products { action } => self.products(action, out).await,
            Commands::Users => {
                let users = self.catalog().list_users().await?;
                emit(out, &self.renderer.users(&users)?)
            }
        }
    }

    fn require_session(&self) -> Result<()> {
        match SessionGate::new(Arc::clone(&self.store)).check() {
            GateDecision::Allow(identity) => {
                debug!(admin = identity.display_name(), "session accepted");
                Ok(())
            }
            GateDecision::RedirectToSignIn => {
                bail!("not signed in; run `wifi-admin login` first")
            }
        }
    }

    async fn login<W: Write>(&self, email: &str, password: &str, out: &mut W) -> Result<()> {
        let credentials = Credentials::new(email, password)?;
        let signed_in = self.auth().login(&credentials).await?;
        emit(
            out,
            &format!("Signed in as {}", signed_in.identity.display_name()),
        )
    }

    async fn candidates<W: Write>(&self, order: &str, out: &mut W) -> Result<()> {
        let view = self.load_view().await?;
        let (workflow, _) = self.workflow();
        let order_id = OrderId::new(order.trim());
        let mut session = workflow.open(&view, &order_id)?;
        let candidates = workflow.candidates(&view)?;
        workflow.dismiss(&mut session)?;
        emit(out, &self.renderer.candidates(&order_id, &candidates)?)
    }

    async fn assign<W: Write>(&self, order: &str, technician: &str, out: &mut W) -> Result<()> {
        let view = self.load_view().await?;
        let (workflow, notifier) = self.workflow();

        let result = workflow.assign_technician(&view, order, technician).await;

        let notices = notifier.drain();
        if !notices.is_empty() {
            emit(out, &self.renderer.notices(&notices)?)?;
        }
        let outcome = result?;
        debug!(refresh = ?outcome.refresh, "assignment finished");
        emit(out, &self.renderer.orders(&view.rows()?, &view.load_state()?)?)
    }

    async fn technicians<W: Write>(&self, action: TechnicianCommand, out: &mut W) -> Result<()> {
        let catalog = self.catalog();
        let technicians = match action {
            TechnicianCommand::List => catalog.list_technicians().await?,
            TechnicianCommand::Add {
                name,
                location,
                username,
                password,
            } => {
                let technician = NewTechnician::new(name, location, username, password)?;
                catalog.create_technician(&technician).await?
            }
        };
        emit(out, &self.renderer.technicians(&technicians)?)
    }

    async fn products<W: Write>(&self, action: ProductCommand, out: &mut W) -> Result<()> {
        let catalog = self.catalog();
        let products = match action {
            ProductCommand::List => catalog.list_products().await?,
            ProductCommand::Add { name, price, speed } => {
                catalog
                    .create_product(&ProductDraft::new(name, price, speed)?)
                    .await?
            }
            ProductCommand::Update {
                id,
                name,
                price,
                speed,
            } => {
                let draft = ProductDraft::new(name, price, speed)?;
                catalog.update_product(&ProductId::new(id.trim()), &draft).await?
            }
            ProductCommand::Delete { id } => {
                catalog.delete_product(&ProductId::new(id.trim())).await?
            }
        };
        emit(out, &self.renderer.products(&products)?)
    }

    /// Loads the order view; read failures stay in its load state.
    async fn load_view(&self) -> Result<View<G>> {
        let view = OrderCollectionView::new(Arc::clone(&self.gateway), Arc::clone(&self.clock));
        match view.load().await {
            Ok(()) => Ok(view),
            Err(ViewError::Gateway(err)) => {
                warn!(error = %err, "order view loaded partially");
                Ok(view)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn workflow(
        &self,
    ) -> (
        AssignmentWorkflow<G, RecordingNotifier, DefaultClock>,
        Arc<RecordingNotifier>,
    ) {
        let notifier = Arc::new(RecordingNotifier::new());
        let workflow = AssignmentWorkflow::new(
            Arc::clone(&self.gateway),
            Arc::clone(&notifier),
            Arc::clone(&self.clock),
        );
        (workflow, notifier)
    }

    fn auth(&self) -> AuthService<G, S> {
        AuthService::new(Arc::clone(&self.gateway), Arc::clone(&self.store))
    }

    fn catalog(&self) -> CatalogService<G> {
        CatalogService::new(Arc::clone(&self.gateway))
    }
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}
