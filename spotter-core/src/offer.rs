use serde::{Deserialize, Serialize};

/// One endpoint of a flight leg. `at` stays an ISO-8601 timestamp string,
/// exactly as the provider sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    pub iata_code: String,
    pub at: String,
}

/// One non-stop leg between two airports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub carrier_code: String,
    pub number: String,
    pub duration: String,
}

/// One direction of travel within an offer, composed of ordered segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub duration: String,
    pub segments: Vec<Segment>,
}

/// Price kept as a decimal string plus currency code; no float conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub currency: String,
    pub total: String,
}

/// The canonical offer shape consumed by the result views. Top-level
/// `departure`/`arrival` summarize the outbound leg: the first itinerary's
/// first-segment departure and last-segment arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration: String,
    pub price: Price,
    pub itineraries: Vec<Itinerary>,
}

impl FlightOffer {
    /// Price total parsed as a decimal; `None` when the provider sent
    /// something unparsable.
    pub fn price_total(&self) -> Option<f64> {
        self.price.total.parse().ok()
    }

    /// Stop count of the outbound leg: first itinerary's segment count
    /// minus one.
    pub fn stops(&self) -> usize {
        self.itineraries
            .first()
            .map(|it| it.segments.len().saturating_sub(1))
            .unwrap_or(0)
    }
}
