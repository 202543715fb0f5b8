use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beaconr::{
    Config,
    handlers::{AppState, create_router},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState {
        beacon_id: config.beacon_id.clone(),
        organization: config.organization.clone(),
    };

    let app = create_router(state);

    let app = if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    let addr = config.bind_address();
    tracing::info!("Starting beaconr server on {}", addr);
    tracing::info!("Beacon id: {}", config.beacon_id);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
