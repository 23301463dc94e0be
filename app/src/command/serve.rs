use frontdesk_config::Config;
use frontdesk_providers::OpenAiExtractor;
use frontdesk_server::AppContext;
use frontdesk_store::LogStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Input for the serve command; CLI flags override the config file.
pub struct ServeInput {
    pub port: Option<u16>,
    pub log_file: Option<PathBuf>,
}

/// Strategy that wires the extractor, the log store, and the HTTP server
/// together and runs until interrupted.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        info!("Loaded config from ~/frontdesk/config.json");

        let provider = config.providers.openai;
        let mut extractor =
            OpenAiExtractor::new(provider.api_key).with_model(provider.model);
        if let Some(base_url) = provider.base_url {
            extractor = extractor.with_base_url(base_url);
        }

        let port = input.port.unwrap_or(config.server.port);
        let log_file = input.log_file.unwrap_or(config.server.log_file);
        info!("Log file: {}", log_file.display());

        let ctx = Arc::new(AppContext {
            store: LogStore::new(log_file),
            extractor: Arc::new(extractor),
        });

        frontdesk_server::start_server(ctx, port).await
    }
}
