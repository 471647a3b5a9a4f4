//! HTTP API server command.

use std::sync::Arc;

use replog_config::Config;
use replog_server::AppState;
use replog_storage::InteractionRepository;

/// Input parameters for the Serve command strategy.
#[derive(Debug, Clone)]
pub struct ServeInput {
    /// Bind host, overriding the config file
    pub host: Option<String>,
    /// Bind port, overriding the config file
    pub port: Option<u16>,
}

/// Strategy for executing the Serve command.
///
/// Loads configuration, connects the durable repository, makes sure the
/// schema exists, then serves the API until stopped.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let repo = InteractionRepository::connect(&config.database.url).await?;
        repo.ensure_schema().await?;

        let host = input.host.unwrap_or(config.server.host);
        let port = input.port.unwrap_or(config.server.port);
        let state = Arc::new(AppState::new(repo));

        replog_server::serve(&format!("{host}:{port}"), state).await
    }
}
