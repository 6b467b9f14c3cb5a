use exif_lens::error::Result;
use exif_lens::{api, config};
use std::net::SocketAddr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("info,exif_lens=debug"))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<String> = args.opt_value_from_str("--config").unwrap();
    let port_override: Option<u16> = args.opt_value_from_str("--port").unwrap();

    let mut config = match &config_path {
        Some(path) => config::load_from_path(Path::new(path))?,
        None => config::load().unwrap_or_default(),
    };
    if let Some(port) = port_override {
        config.port = Some(port);
    }

    let app = api::create_router(&config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port()));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
