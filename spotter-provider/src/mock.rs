use spotter_core::airports::find_airport;
use spotter_core::offer::{FlightEndpoint, FlightOffer, Itinerary, Price, Segment};

/// Pre-baked offer set served when the lenient auth-fallback policy is
/// active, so the UI is never blocked by missing credentials.
pub fn mock_offers() -> Vec<FlightOffer> {
    let jfk = find_airport("JFK").map(|a| a.code).unwrap_or("JFK");
    let lhr = find_airport("LHR").map(|a| a.code).unwrap_or("LHR");
    let cdg = find_airport("CDG").map(|a| a.code).unwrap_or("CDG");

    let direct = Segment {
        departure: FlightEndpoint {
            iata_code: jfk.to_string(),
            at: "2025-12-25T18:30:00".to_string(),
        },
        arrival: FlightEndpoint {
            iata_code: lhr.to_string(),
            at: "2025-12-26T06:45:00".to_string(),
        },
        carrier_code: "BA".to_string(),
        number: "112".to_string(),
        duration: "PT7H15M".to_string(),
    };

    let first_leg = Segment {
        departure: FlightEndpoint {
            iata_code: jfk.to_string(),
            at: "2025-12-25T16:00:00".to_string(),
        },
        arrival: FlightEndpoint {
            iata_code: cdg.to_string(),
            at: "2025-12-26T05:20:00".to_string(),
        },
        carrier_code: "AF".to_string(),
        number: "7".to_string(),
        duration: "PT7H20M".to_string(),
    };
    let second_leg = Segment {
        departure: FlightEndpoint {
            iata_code: cdg.to_string(),
            at: "2025-12-26T07:40:00".to_string(),
        },
        arrival: FlightEndpoint {
            iata_code: lhr.to_string(),
            at: "2025-12-26T08:05:00".to_string(),
        },
        carrier_code: "AF".to_string(),
        number: "1680".to_string(),
        duration: "PT1H25M".to_string(),
    };

    vec![
        FlightOffer {
            id: "mock-1".to_string(),
            airline: "British Airways".to_string(),
            flight_number: "BA 112".to_string(),
            departure: direct.departure.clone(),
            arrival: direct.arrival.clone(),
            duration: "PT7H15M".to_string(),
            price: Price {
                currency: "USD".to_string(),
                total: "645.00".to_string(),
            },
            itineraries: vec![Itinerary {
                duration: "PT7H15M".to_string(),
                segments: vec![direct],
            }],
        },
        FlightOffer {
            id: "mock-2".to_string(),
            airline: "Air France".to_string(),
            flight_number: "AF 7".to_string(),
            departure: first_leg.departure.clone(),
            arrival: second_leg.arrival.clone(),
            duration: "PT10H5M".to_string(),
            price: Price {
                currency: "USD".to_string(),
                total: "512.40".to_string(),
            },
            itineraries: vec![Itinerary {
                duration: "PT10H5M".to_string(),
                segments: vec![first_leg, second_leg],
            }],
        },
    ]
}
