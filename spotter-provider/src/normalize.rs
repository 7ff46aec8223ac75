use crate::amadeus::{Dictionaries, RawEndpoint, RawItinerary, RawOffer, RawSegment};
use spotter_core::offer::{FlightEndpoint, FlightOffer, Itinerary, Price, Segment};

/// Transform raw provider offers into the canonical model. Pure, no I/O.
///
/// An offer with no itineraries, or whose first itinerary has no segments,
/// is skipped with a warning rather than fabricated or propagated as a
/// panic.
pub fn normalize(raw_offers: Vec<RawOffer>, dictionaries: &Dictionaries) -> Vec<FlightOffer> {
    raw_offers
        .into_iter()
        .filter_map(|offer| normalize_offer(offer, dictionaries))
        .collect()
}

fn normalize_offer(offer: RawOffer, dictionaries: &Dictionaries) -> Option<FlightOffer> {
    let Some(first_itinerary) = offer.itineraries.first() else {
        tracing::warn!(offer_id = %offer.id, "offer has no itineraries, skipping");
        return None;
    };
    let (Some(first_segment), Some(last_segment)) = (
        first_itinerary.segments.first(),
        first_itinerary.segments.last(),
    ) else {
        tracing::warn!(offer_id = %offer.id, "first itinerary has no segments, skipping");
        return None;
    };

    // Display name: validating carrier code resolved through the
    // dictionary, then the raw code, then the literal fallback.
    let airline = match offer.validating_airline_codes.first() {
        Some(code) => dictionaries
            .carriers
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.clone()),
        None => "Unknown Airline".to_string(),
    };

    Some(FlightOffer {
        airline,
        flight_number: format!("{} {}", first_segment.carrier_code, first_segment.number),
        departure: endpoint(&first_segment.departure),
        arrival: endpoint(&last_segment.arrival),
        duration: first_itinerary.duration.clone(),
        price: Price {
            currency: offer.price.currency,
            total: offer.price.total,
        },
        itineraries: offer.itineraries.iter().map(itinerary).collect(),
        id: offer.id,
    })
}

fn endpoint(raw: &RawEndpoint) -> FlightEndpoint {
    FlightEndpoint {
        iata_code: raw.iata_code.clone(),
        at: raw.at.clone(),
    }
}

fn itinerary(raw: &RawItinerary) -> Itinerary {
    Itinerary {
        duration: raw.duration.clone(),
        segments: raw.segments.iter().map(segment).collect(),
    }
}

fn segment(raw: &RawSegment) -> Segment {
    Segment {
        departure: endpoint(&raw.departure),
        arrival: endpoint(&raw.arrival),
        carrier_code: raw.carrier_code.clone(),
        number: raw.number.clone(),
        duration: raw.duration.clone(),
    }
}
