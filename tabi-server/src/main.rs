//! tabi-server service entry point.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tabi_common::config::Config;
use tabi_common::logging::init_logging;
use tabi_itinerary::{ContextBuilder, ItineraryStore};
use tabi_server::{AnthropicProvider, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    tracing::info!("Tabi Server v{}", env!("CARGO_PKG_VERSION"));

    let store = ItineraryStore::load(&config.data.trip_path, &config.data.hotel_path);

    let api_key = config.llm.api_key.clone().unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("no Anthropic API key configured; completion requests will fail");
    }
    let provider = AnthropicProvider::with_base_url(
        api_key,
        config.llm.base_url.as_str(),
        config.llm.model.as_str(),
        config.llm.max_tokens,
    );

    let state = AppState {
        store: Arc::new(store),
        context_builder: ContextBuilder::new(config.context.fallback_date_range.as_str()),
        provider: Arc::new(provider),
    };

    let addr = SocketAddr::new(config.server.bind.parse()?, config.server.port);
    tabi_server::start_server(state, addr).await
}
