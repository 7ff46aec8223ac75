use crate::app_config::AmadeusConfig;
use crate::error::ProviderError;
use crate::token::{OAuthExchanger, TokenSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use spotter_core::SearchRequest;
use std::collections::HashMap;
use std::time::Duration;

/// Result cap requested from the flight-offers endpoint.
const MAX_RESULTS: u32 = 10;

// ============================================================================
// Provider wire models
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEndpoint {
    pub iata_code: String,
    pub at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegment {
    pub departure: RawEndpoint,
    pub arrival: RawEndpoint,
    pub carrier_code: String,
    pub number: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItinerary {
    pub duration: String,
    pub segments: Vec<RawSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPrice {
    pub currency: String,
    pub total: String,
}

/// One priced offer exactly as the provider shapes it. Transient: consumed
/// by the normalizer and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOffer {
    pub id: String,
    #[serde(default)]
    pub validating_airline_codes: Vec<String>,
    pub price: RawPrice,
    pub itineraries: Vec<RawItinerary>,
}

/// Side-table of carrier code to display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionaries {
    #[serde(default)]
    pub carriers: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ShoppingResponse {
    #[serde(default)]
    data: Vec<RawOffer>,
    #[serde(default)]
    dictionaries: Dictionaries,
}

/// Raw offers plus their carrier dictionary, returned unmodified.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub offers: Vec<RawOffer>,
    pub dictionaries: Dictionaries,
}

// ============================================================================
// Query gateway
// ============================================================================

#[async_trait]
pub trait FlightProvider: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<ProviderResponse, ProviderError>;
}

/// Live Amadeus client: acquires a bearer token from the single-slot
/// source, builds the shopping query, and returns the raw payload.
pub struct AmadeusClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenSource<OAuthExchanger>,
}

impl AmadeusClient {
    pub fn from_config(config: &AmadeusConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens: TokenSource::new(OAuthExchanger::new(http.clone(), config)),
            http,
        })
    }
}

/// Required params always present; `returnDate`/`travelClass` appended only
/// when set.
pub fn build_query(request: &SearchRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("originLocationCode", request.origin.clone()),
        ("destinationLocationCode", request.destination.clone()),
        ("departureDate", request.departure_date.to_string()),
        ("adults", request.adults.to_string()),
        ("nonStop", "false".to_string()),
        ("max", MAX_RESULTS.to_string()),
    ];
    if let Some(return_date) = request.return_date {
        query.push(("returnDate", return_date.to_string()));
    }
    if let Some(class) = request.travel_class {
        query.push(("travelClass", class.as_str().to_string()));
    }
    query
}

#[async_trait]
impl FlightProvider for AmadeusClient {
    async fn search(&self, request: &SearchRequest) -> Result<ProviderResponse, ProviderError> {
        let token = self.tokens.bearer_token().await?;

        let url = format!("{}/v2/shopping/flight-offers", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&build_query(request))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream(format!(
                "flight-offers endpoint returned {status}"
            )));
        }

        let body: ShoppingResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;

        tracing::debug!(
            offers = body.data.len(),
            origin = %request.origin,
            destination = %request.destination,
            "fetched flight offers"
        );

        Ok(ProviderResponse {
            offers: body.data,
            dictionaries: body.dictionaries,
        })
    }
}
