use crate::controller::SearchController;
use spotter_core::SearchRequest;

#[derive(Debug, thiserror::Error)]
pub enum SearchClientError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin HTTP client for the search endpoint. Drives a `SearchController`
/// through one submit/complete cycle per call.
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Submit a search and reconcile the outcome into the controller.
    /// Transport failures reduce to the controller's failed state; they are
    /// never surfaced as a distinct error to the caller.
    pub async fn run_search(&self, controller: &mut SearchController, request: &SearchRequest) {
        let generation = controller.begin_search();
        match self.fetch(request).await {
            Ok(body) => controller.complete(generation, body),
            Err(err) => controller.fail(generation, &err.to_string()),
        }
    }

    async fn fetch(&self, request: &SearchRequest) -> Result<serde_json::Value, SearchClientError> {
        let mut query = vec![
            ("origin", request.origin.clone()),
            ("destination", request.destination.clone()),
            ("date", request.departure_date.to_string()),
            ("adults", request.adults.to_string()),
        ];
        if let Some(return_date) = request.return_date {
            query.push(("returnDate", return_date.to_string()));
        }
        if let Some(class) = request.travel_class {
            query.push(("travelClass", class.as_str().to_string()));
        }

        let url = format!("{}/api/search", self.base_url);
        let body = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await?
            .json()
            .await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::SearchPhase;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_unreachable_endpoint_reduces_to_failed_with_empty_results() {
        // Nothing listens on this port
        let client = SearchClient::new("http://127.0.0.1:9");
        let mut controller = SearchController::new();
        let request = SearchRequest::new(
            "JFK",
            "LHR",
            NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
        );

        client.run_search(&mut controller, &request).await;

        assert_eq!(controller.phase(), SearchPhase::Failed);
        assert!(!controller.is_loading());
        assert!(controller.offers().is_empty());
    }
}
