use spotter_core::FlightOffer;

/// Search lifecycle. Re-entrant: a new search from any phase returns to
/// `Searching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Succeeded,
    Failed,
}

/// The response body classified once at the boundary instead of
/// duck-typed at each call site.
#[derive(Debug)]
pub enum ResponseShape {
    Offers(Vec<FlightOffer>),
    Empty,
    Malformed(serde_json::Value),
}

impl ResponseShape {
    pub fn classify(body: serde_json::Value) -> Self {
        // The endpoint returns either a bare array or `{data: [...]}`
        let array = match &body {
            serde_json::Value::Array(_) => body.clone(),
            serde_json::Value::Object(map) => match map.get("data") {
                Some(data @ serde_json::Value::Array(_)) => data.clone(),
                _ => return ResponseShape::Malformed(body),
            },
            _ => return ResponseShape::Malformed(body),
        };

        match serde_json::from_value::<Vec<FlightOffer>>(array) {
            Ok(offers) if offers.is_empty() => ResponseShape::Empty,
            Ok(offers) => ResponseShape::Offers(offers),
            Err(_) => ResponseShape::Malformed(body),
        }
    }
}

/// Owns the result set and the loading state machine. Each submit takes a
/// new generation; completions carrying a stale generation are discarded,
/// so the latest request always wins.
pub struct SearchController {
    phase: SearchPhase,
    offers: Vec<FlightOffer>,
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            phase: SearchPhase::Idle,
            offers: Vec::new(),
            generation: 0,
        }
    }

    /// Clear results, enter `Searching`, and return the generation the
    /// eventual completion must carry.
    pub fn begin_search(&mut self) -> u64 {
        self.offers.clear();
        self.phase = SearchPhase::Searching;
        self.generation += 1;
        self.generation
    }

    pub fn complete(&mut self, generation: u64, body: serde_json::Value) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "stale search response discarded");
            return;
        }
        match ResponseShape::classify(body) {
            ResponseShape::Offers(offers) => {
                self.offers = offers;
            }
            ResponseShape::Empty => {
                self.offers.clear();
            }
            ResponseShape::Malformed(raw) => {
                tracing::warn!(body = %raw, "unexpected search response shape");
                self.offers.clear();
            }
        }
        self.phase = SearchPhase::Succeeded;
    }

    /// Transport failure: empty results, logged only. There is no
    /// user-distinguishable error state beyond zero results.
    pub fn fail(&mut self, generation: u64, reason: &str) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "stale search failure discarded");
            return;
        }
        tracing::warn!(%reason, "search request failed");
        self.offers.clear();
        self.phase = SearchPhase::Failed;
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn offers(&self) -> &[FlightOffer] {
        &self.offers
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer_json(id: &str, price: &str) -> serde_json::Value {
        json!({
            "id": id,
            "airline": "Example Air",
            "flightNumber": "XY 100",
            "departure": {"iataCode": "JFK", "at": "2025-12-25T08:00:00"},
            "arrival": {"iataCode": "LHR", "at": "2025-12-25T20:00:00"},
            "duration": "PT7H",
            "price": {"currency": "USD", "total": price},
            "itineraries": [{
                "duration": "PT7H",
                "segments": [{
                    "departure": {"iataCode": "JFK", "at": "2025-12-25T08:00:00"},
                    "arrival": {"iataCode": "LHR", "at": "2025-12-25T20:00:00"},
                    "carrierCode": "XY",
                    "number": "100",
                    "duration": "PT7H"
                }]
            }]
        })
    }

    #[test]
    fn test_bare_array_and_data_envelope_are_equivalent() {
        let bare = json!([offer_json("1", "450.00")]);
        let enveloped = json!({"data": [offer_json("1", "450.00")]});

        let mut a = SearchController::new();
        let gen = a.begin_search();
        a.complete(gen, bare);

        let mut b = SearchController::new();
        let gen = b.begin_search();
        b.complete(gen, enveloped);

        assert_eq!(a.offers(), b.offers());
        assert_eq!(a.offers().len(), 1);
        assert_eq!(a.phase(), SearchPhase::Succeeded);
    }

    #[test]
    fn test_malformed_body_yields_zero_results_without_panic() {
        let mut controller = SearchController::new();
        let gen = controller.begin_search();
        controller.complete(gen, json!({"error": "nope"}));

        assert!(controller.offers().is_empty());
        assert_eq!(controller.phase(), SearchPhase::Succeeded);
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_empty_array_classifies_as_empty() {
        assert!(matches!(
            ResponseShape::classify(json!([])),
            ResponseShape::Empty
        ));
        assert!(matches!(
            ResponseShape::classify(json!({"data": []})),
            ResponseShape::Empty
        ));
    }

    #[test]
    fn test_begin_search_clears_results_and_loads() {
        let mut controller = SearchController::new();
        let gen = controller.begin_search();
        controller.complete(gen, json!([offer_json("1", "450.00")]));
        assert_eq!(controller.offers().len(), 1);

        controller.begin_search();
        assert!(controller.offers().is_empty());
        assert!(controller.is_loading());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut controller = SearchController::new();
        let first = controller.begin_search();
        let second = controller.begin_search();

        // The older response lands after a newer search began
        controller.complete(first, json!([offer_json("stale", "100.00")]));
        assert!(controller.is_loading());
        assert!(controller.offers().is_empty());

        controller.complete(second, json!([offer_json("fresh", "200.00")]));
        assert_eq!(controller.offers()[0].id, "fresh");
    }

    #[test]
    fn test_failure_ends_loading_with_empty_results() {
        let mut controller = SearchController::new();
        let gen = controller.begin_search();
        controller.fail(gen, "connection refused");

        assert_eq!(controller.phase(), SearchPhase::Failed);
        assert!(!controller.is_loading());
        assert!(controller.offers().is_empty());
    }

    #[test]
    fn test_stale_failure_does_not_clobber_newer_search() {
        let mut controller = SearchController::new();
        let first = controller.begin_search();
        let second = controller.begin_search();
        controller.complete(second, json!([offer_json("fresh", "200.00")]));

        controller.fail(first, "timed out");
        assert_eq!(controller.phase(), SearchPhase::Succeeded);
        assert_eq!(controller.offers().len(), 1);
    }
}
