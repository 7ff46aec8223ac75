use spotter_provider::{AuthFallback, FlightProvider};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn FlightProvider>,
    pub auth_fallback: AuthFallback,
}
