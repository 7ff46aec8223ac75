use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use spotter_core::{FlightOffer, SearchRequest};
use spotter_provider::{mock::mock_offers, normalize::normalize, AuthFallback, ProviderError};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/search", get(search_flights))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub return_date: Option<String>,
    pub adults: Option<u32>,
    pub travel_class: Option<String>,
}

/// GET /api/search
/// Exchange search parameters for normalized flight offers.
async fn search_flights(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<FlightOffer>>, AppError> {
    let (origin, destination, date) = match (&query.origin, &query.destination, &query.date) {
        (Some(o), Some(d), Some(date)) if !o.is_empty() && !d.is_empty() && !date.is_empty() => {
            (o, d, date)
        }
        _ => return Err(AppError::MissingParameters),
    };
    // A malformed date reuses the documented 400 body: the endpoint
    // exposes a single validation error message
    let departure_date =
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| AppError::MissingParameters)?;

    let mut request = SearchRequest::new(origin, destination, departure_date);
    request.adults = query.adults.unwrap_or(1).max(1);
    request.return_date = query
        .return_date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
    request.travel_class = query.travel_class.as_deref().and_then(|c| match c.parse() {
        Ok(class) => Some(class),
        Err(err) => {
            // Unrecognized cabin falls back to an all-cabin search
            tracing::warn!(%err, "ignoring unrecognized travelClass");
            None
        }
    });

    match state.provider.search(&request).await {
        Ok(response) => Ok(Json(normalize(response.offers, &response.dictionaries))),
        Err(ProviderError::AuthUnavailable(reason)) => match state.auth_fallback {
            AuthFallback::Mock => {
                tracing::warn!(%reason, "provider auth unavailable, serving mock offers");
                Ok(Json(mock_offers()))
            }
            AuthFallback::Strict => Err(AppError::AuthFailed(reason)),
        },
        Err(ProviderError::Upstream(reason)) => Err(AppError::Upstream(reason)),
    }
}
