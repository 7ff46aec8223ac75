use spotter_api::{app, AppState};
use spotter_provider::AmadeusClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spotter_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = spotter_provider::Config::load().expect("Failed to load config");
    tracing::info!("Starting Spotter API on port {}", config.server.port);

    if !config.amadeus.has_live_credentials() {
        tracing::warn!(
            fallback = ?config.amadeus.auth_fallback,
            "Amadeus credentials missing or placeholder, live lookups disabled"
        );
    }

    let provider = AmadeusClient::from_config(&config.amadeus).expect("Failed to build Amadeus client");

    let state = AppState {
        provider: Arc::new(provider),
        auth_fallback: config.amadeus.auth_fallback,
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
