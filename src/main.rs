mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "siksha-connect failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), config::ConfigError> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| config::ConfigError::Bind { addr: addr.clone(), reason: e.to_string() })?;

    tracing::info!(port = config.port, site_root = %config.site_root.display(), "siksha-connect listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| config::ConfigError::Serve(e.to_string()))
}
