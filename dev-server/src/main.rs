//! Development server for property dashboard UI work
//!
//! Serves the in-memory property API seeded with demo listings so the admin
//! dashboard has data to list, edit and delete. Data lives only as long as
//! the process.
//!
//! Environment variables (optional, also read from a .env file):
//! - IP_ADDRESS: bind address, default 127.0.0.1
//! - PORT: bind port, default 5001
//! - ALLOWED_ORIGINS: CORS origins, "*" or a comma-separated list
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::{
    Config, PropertyStore, TestApp, build, mock::DevDataset,
    telemetry::{get_subscriber, init_subscriber, log_error},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    info!("🚀 Starting property dashboard development server");

    let mut config = Config::from_env()?;
    let store = PropertyStore::new();
    let server = build(&mut config, store.clone())?;
    let server = tokio::spawn(server);

    let address = format!("http://{}:{}", config.ip, config.port);
    let app = TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: address.clone(),
            inner_client: reqwest::Client::new(),
        },
        store,
    };

    info!("📊 Seeding demo listings...");
    let dataset = DevDataset::create(&app).await?;

    info!("🎯 Development server ready!");
    info!("   API: {address}/api/properties");
    info!("   UI:  cd ui && BACKEND_URL={address} trunk serve");
    dataset.print_summary();
    info!("👋 Press Ctrl+C to shutdown");

    tokio::select! {
        result = server => match result {
            Ok(Ok(())) => info!("Server stopped"),
            Ok(Err(e)) => log_error(e),
            Err(e) => log_error(e),
        },
        _ = tokio::signal::ctrl_c() => {
            info!("🛑 Shutting down development server");
        }
    }
    Ok(())
}
