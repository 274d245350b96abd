//! CLI command definitions and dispatch.

pub mod document;
pub mod migrate;
pub mod resources;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use backoffice_core::config::{AppConfig, DatabaseConfig, StoreBackend, TenancyMode};
use backoffice_core::error::AppError;
use backoffice_core::traits::{Clock, SystemClock};
use backoffice_database::{CollectionRepository, QueryEngine, open_store};
use backoffice_entity::Resource;
use backoffice_entity::manage::{DEPLOY_MODE_KEY, STANDALONE_MODE_VALUE};

use crate::output::OutputFormat;

/// Back-office document administration
#[derive(Debug, Parser)]
#[command(name = "backoffice", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Merchant the command acts for (ignored in standalone deployments)
    #[arg(short, long, global = true)]
    pub merchant: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the known resources and their collections
    Resources,
    /// List documents of a resource
    List(document::ListArgs),
    /// Show one document
    Get(document::GetArgs),
    /// Create a document from JSON
    Create(document::CreateArgs),
    /// Partially update a document from JSON
    Update(document::UpdateArgs),
    /// Delete a document
    Delete(document::DeleteArgs),
    /// Apply database migrations
    Migrate,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Resources => resources::execute(self.format),
            Commands::Migrate => migrate::execute(&config).await,
            Commands::List(args) => {
                let ctx = Context::open(config, self.merchant.as_deref()).await?;
                document::list(args, &ctx, self.format).await
            }
            Commands::Get(args) => {
                let ctx = Context::open(config, self.merchant.as_deref()).await?;
                document::get(args, &ctx, self.format).await
            }
            Commands::Create(args) => {
                let ctx = Context::open(config, self.merchant.as_deref()).await?;
                document::create(args, &ctx).await
            }
            Commands::Update(args) => {
                let ctx = Context::open(config, self.merchant.as_deref()).await?;
                document::update(args, &ctx).await
            }
            Commands::Delete(args) => {
                let ctx = Context::open(config, self.merchant.as_deref()).await?;
                document::delete(args, &ctx).await
            }
        }
    }
}

/// Helper: load configuration from file
///
/// A `DEPLOY_MODE=standalone` environment switches the deployment to
/// standalone tenancy.
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load(config_path)?;
    if std::env::var(DEPLOY_MODE_KEY).is_ok_and(|mode| mode == STANDALONE_MODE_VALUE) {
        config.tenancy.mode = TenancyMode::Standalone;
        config.validate()?;
    }
    Ok(config)
}

/// Document commands run one per process, so a memory store would start
/// empty every time.
fn require_persistent(config: &DatabaseConfig) -> Result<(), AppError> {
    match config.backend {
        StoreBackend::Postgres => Ok(()),
        StoreBackend::Memory => Err(AppError::validation(
            "Document commands need database.backend = \"postgres\"; \
             the memory backend does not outlive a single command",
        )),
    }
}

/// Everything a document command needs: the engine and the merchant.
pub struct Context {
    engine: Arc<QueryEngine>,
    clock: Arc<dyn Clock>,
    merchant_id: String,
}

impl Context {
    /// Open the configured store and resolve the merchant.
    pub async fn open(config: AppConfig, requested: Option<&str>) -> Result<Self, AppError> {
        require_persistent(&config.database)?;
        let merchant_id = config
            .tenancy
            .resolve(requested)
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::validation("A merchant id is required (use --merchant)"))?
            .to_string();

        let store = open_store(&config.database).await?;
        Ok(Self {
            engine: Arc::new(QueryEngine::new(store, config.query)),
            clock: Arc::new(SystemClock),
            merchant_id,
        })
    }

    /// Repository for `T`.
    pub fn repo<T: Resource>(&self) -> CollectionRepository<T> {
        CollectionRepository::new(Arc::clone(&self.engine), Arc::clone(&self.clock))
    }

    /// The merchant every call is scoped to.
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }
}
