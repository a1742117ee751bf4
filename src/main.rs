use menu_ocr_parser::{MenuParser, ParserConfig, ServerConfig, build_router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    // Tables are built once here and shared read-only by every request.
    let parser = Arc::new(MenuParser::new(ParserConfig::with_thresholds(
        config.thresholds,
    )?));
    let app = build_router(parser);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "menu parser listening");
    axum::serve(listener, app).await?;

    Ok(())
}
