use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use spotter_api::{app, AppState};
use spotter_core::SearchRequest;
use spotter_provider::amadeus::{
    Dictionaries, FlightProvider, ProviderResponse, RawEndpoint, RawItinerary, RawOffer, RawPrice,
    RawSegment,
};
use spotter_provider::{AuthFallback, ProviderError};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

enum StubOutcome {
    Offers(Vec<RawOffer>, Dictionaries),
    AuthUnavailable,
    Upstream,
}

struct StubProvider {
    outcome: StubOutcome,
    seen: Mutex<Option<SearchRequest>>,
}

impl StubProvider {
    fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            seen: Mutex::new(None),
        }
    }
}

#[async_trait]
impl FlightProvider for StubProvider {
    async fn search(&self, request: &SearchRequest) -> Result<ProviderResponse, ProviderError> {
        *self.seen.lock().unwrap() = Some(request.clone());
        match &self.outcome {
            StubOutcome::Offers(offers, dictionaries) => Ok(ProviderResponse {
                offers: offers.clone(),
                dictionaries: dictionaries.clone(),
            }),
            StubOutcome::AuthUnavailable => Err(ProviderError::AuthUnavailable(
                "credentials missing".to_string(),
            )),
            StubOutcome::Upstream => Err(ProviderError::Upstream("boom".to_string())),
        }
    }
}

fn state(provider: Arc<StubProvider>, fallback: AuthFallback) -> AppState {
    AppState {
        provider,
        auth_fallback: fallback,
    }
}

fn raw_offer() -> RawOffer {
    let segment = RawSegment {
        departure: RawEndpoint {
            iata_code: "JFK".to_string(),
            at: "2025-12-25T08:00:00".to_string(),
        },
        arrival: RawEndpoint {
            iata_code: "LHR".to_string(),
            at: "2025-12-25T20:00:00".to_string(),
        },
        carrier_code: "XY".to_string(),
        number: "100".to_string(),
        duration: "PT7H".to_string(),
    };
    RawOffer {
        id: "1".to_string(),
        validating_airline_codes: vec!["XY".to_string()],
        price: RawPrice {
            currency: "USD".to_string(),
            total: "450.00".to_string(),
        },
        itineraries: vec![RawItinerary {
            duration: "PT7H".to_string(),
            segments: vec![segment],
        }],
    }
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_missing_parameters_return_400_before_any_upstream_call() {
    let provider = Arc::new(StubProvider::new(StubOutcome::Upstream));
    let router = app(state(provider.clone(), AuthFallback::Strict));

    let (status, body) = get(router, "/api/search?origin=JFK&destination=LHR").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameters");
    assert!(provider.seen.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_successful_search_returns_normalized_offers() {
    let mut dictionaries = Dictionaries::default();
    dictionaries
        .carriers
        .insert("XY".to_string(), "Example Air".to_string());
    let provider = Arc::new(StubProvider::new(StubOutcome::Offers(
        vec![raw_offer()],
        dictionaries,
    )));
    let router = app(state(provider.clone(), AuthFallback::Strict));

    let (status, body) = get(
        router,
        "/api/search?origin=jfk&destination=lhr&date=2025-12-25&adults=2&travelClass=BUSINESS",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["airline"], "Example Air");
    assert_eq!(body[0]["flightNumber"], "XY 100");
    assert_eq!(body[0]["departure"]["iataCode"], "JFK");
    assert_eq!(body[0]["arrival"]["iataCode"], "LHR");

    let seen = provider.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.origin, "JFK");
    assert_eq!(seen.destination, "LHR");
    assert_eq!(seen.adults, 2);
    assert_eq!(seen.travel_class, Some(spotter_core::TravelClass::Business));
}

#[tokio::test]
async fn test_unrecognized_travel_class_falls_back_to_all_cabins() {
    let provider = Arc::new(StubProvider::new(StubOutcome::Offers(
        vec![raw_offer()],
        Dictionaries::default(),
    )));
    let router = app(state(provider.clone(), AuthFallback::Strict));

    let (status, _) = get(
        router,
        "/api/search?origin=JFK&destination=LHR&date=2025-12-25&travelClass=COACH",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let seen = provider.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.travel_class, None);
}

#[tokio::test]
async fn test_malformed_date_returns_the_documented_400_body() {
    let provider = Arc::new(StubProvider::new(StubOutcome::Upstream));
    let router = app(state(provider.clone(), AuthFallback::Strict));

    let (status, body) = get(
        router,
        "/api/search?origin=JFK&destination=LHR&date=tomorrow",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameters");
    assert!(provider.seen.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_strict_auth_failure_returns_401() {
    let provider = Arc::new(StubProvider::new(StubOutcome::AuthUnavailable));
    let router = app(state(provider, AuthFallback::Strict));

    let (status, body) = get(
        router,
        "/api/search?origin=JFK&destination=LHR&date=2025-12-25",
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Failed to authenticate with Amadeus API");
}

#[tokio::test]
async fn test_mock_fallback_serves_prebaked_offers() {
    let provider = Arc::new(StubProvider::new(StubOutcome::AuthUnavailable));
    let router = app(state(provider, AuthFallback::Mock));

    let (status, body) = get(
        router,
        "/api/search?origin=JFK&destination=LHR&date=2025-12-25",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["id"], "mock-1");
}

#[tokio::test]
async fn test_upstream_failure_returns_500() {
    let provider = Arc::new(StubProvider::new(StubOutcome::Upstream));
    let router = app(state(provider, AuthFallback::Strict));

    let (status, body) = get(
        router,
        "/api/search?origin=JFK&destination=LHR&date=2025-12-25",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch flight offers");
}

#[tokio::test]
async fn test_empty_result_set_is_a_bare_empty_array() {
    let provider = Arc::new(StubProvider::new(StubOutcome::Offers(
        Vec::new(),
        Dictionaries::default(),
    )));
    let router = app(state(provider, AuthFallback::Strict));

    let (status, body) = get(
        router,
        "/api/search?origin=JFK&destination=LHR&date=2025-12-25",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}
