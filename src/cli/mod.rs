//! Operator command line.
//!
//! Each subcommand maps to one dashboard screen or action. Everything other
//! than `login`, `register` and `logout` passes through the session gate
//! first.

mod console;

pub use console::Console;

use crate::config::{AdminConfig, AuthPolicy};
use crate::gateway::adapters::HttpResourceGateway;
use crate::session::{adapters::FileSessionStore, services::SessionGate};
use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// Wifi installation admin dashboard.
#[derive(Parser, Debug)]
#[command(name = "wifi-admin")]
#[command(version)]
#[command(about = "Administer installation orders, technicians and packages", long_about = None)]
pub struct Cli {
    /// Backend base URL, overriding `API_URL`.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory holding the persisted session, overriding `SESSION_DIR`.
    #[arg(long, global = true, value_name = "DIR")]
    pub session_dir: Option<String>,

    /// Request timeout in seconds, overriding `REQUEST_TIMEOUT_SECS`.
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Which requests carry the bearer token: all, writes or none.
    #[arg(long, global = true, value_name = "POLICY")]
    pub auth_policy: Option<String>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Sign in as an admin
    Login {
        /// Admin email
        #[arg(long)]
        email: String,
        /// Admin password
        #[arg(long)]
        password: String,
    },

    /// Register a new admin account
    Register {
        /// First name
        #[arg(long)]
        first_name: String,
        /// Last name
        #[arg(long)]
        last_name: String,
        /// Admin email
        #[arg(long)]
        email: String,
        /// Admin password
        #[arg(long)]
        password: String,
    },

    /// Clear the persisted session
    Logout,

    /// Show dashboard counts
    Metrics,

    /// Show the most recent orders
    RecentOrders,

    /// Show the order table
    Orders,

    /// List technicians that can take an order
    Candidates {
        /// Order to assign
        #[arg(long)]
        order: String,
    },

    /// Assign a technician to an order
    Assign {
        /// Order to assign
        #[arg(long)]
        order: String,
        /// Technician to attach
        #[arg(long)]
        technician: String,
    },

    /// Manage technicians
    Technicians {
        /// Technician action
        #[command(subcommand)]
        action: TechnicianCommand,
    },

    /// Manage internet packages
    Products {
        /// Product action
        #[command(subcommand)]
        action: ProductCommand,
    },

    /// List customers
    Users,
}

impl Commands {
    /// Returns whether the command may run without a signed-in admin.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Login { .. } | Self::Register { .. } | Self::Logout)
    }
}

/// Technician actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TechnicianCommand {
    /// List technicians
    List,
    /// Register a technician
    Add {
        /// Full name
        #[arg(long)]
        name: String,
        /// Home base
        #[arg(long)]
        location: String,
        /// Login name; the email becomes `<username>.tech@gmail.com`
        #[arg(long)]
        username: String,
        /// Initial password
        #[arg(long)]
        password: String,
    },
}

/// Product actions.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ProductCommand {
    /// List packages
    List,
    /// Add a package
    Add {
        /// Package name
        #[arg(long)]
        name: String,
        /// Monthly price in rupiah
        #[arg(long)]
        price: f64,
        /// Speed in Mbps
        #[arg(long)]
        speed: f64,
    },
    /// Replace a package
    Update {
        /// Package identifier
        #[arg(long)]
        id: String,
        /// Package name
        #[arg(long)]
        name: String,
        /// Monthly price in rupiah
        #[arg(long)]
        price: f64,
        /// Speed in Mbps
        #[arg(long)]
        speed: f64,
    },
    /// Delete a package
    Delete {
        /// Package identifier
        #[arg(long)]
        id: String,
    },
}

impl Cli {
    /// Builds configuration from the environment with flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value or flag is malformed.
    pub fn config(&self) -> Result<AdminConfig> {
        let mut config = AdminConfig::from_env().wrap_err("invalid environment configuration")?;
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url)?;
        }
        if let Some(dir) = &self.session_dir {
            config = config.with_session_dir(dir.as_str());
        }
        if let Some(seconds) = self.timeout {
            config = config.with_request_timeout(Duration::from_secs(seconds));
        }
        if let Some(policy) = &self.auth_policy {
            config = config.with_auth_policy(AuthPolicy::try_from(policy.as_str())?);
        }
        Ok(config)
    }
}

/// Runs a parsed command against the configured backend.
///
/// # Errors
///
/// Returns an error when configuration is invalid, the session directory
/// cannot be opened, the admin is not signed in for a protected command, or
/// the command itself fails.
pub async fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let config = cli.config()?;
    let store = Arc::new(
        FileSessionStore::open(config.session_dir())
            .wrap_err_with(|| format!("cannot open session directory {}", config.session_dir()))?,
    );
    let token = SessionGate::new(Arc::clone(&store)).bearer_token();
    let gateway = HttpResourceGateway::new(&config)?.with_bearer_token(token);
    let console = Console::new(Arc::new(gateway), store)?;
    console.run(cli.command, out).await
}
