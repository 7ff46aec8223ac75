use spotter_core::FlightOffer;
use std::collections::HashSet;

/// Stop-count bucket for the outbound leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopBucket {
    NonStop,
    One,
    TwoPlus,
}

impl StopBucket {
    pub fn of(offer: &FlightOffer) -> Self {
        match offer.stops() {
            0 => StopBucket::NonStop,
            1 => StopBucket::One,
            _ => StopBucket::TwoPlus,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StopBucket::NonStop => "0",
            StopBucket::One => "1",
            StopBucket::TwoPlus => "2+",
        }
    }
}

/// Selectable facet values derived from the unfiltered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Facets {
    pub min_price: f64,
    pub max_price: f64,
    pub airlines: Vec<String>,
}

/// Facets over the current offers: floored/ceiled price bounds and the
/// sorted distinct airline names. An empty set keeps the UI's default
/// 0..1000 range.
pub fn derive_facets(offers: &[FlightOffer]) -> Facets {
    let prices: Vec<f64> = offers.iter().filter_map(FlightOffer::price_total).collect();
    if prices.is_empty() {
        return Facets {
            min_price: 0.0,
            max_price: 1000.0,
            airlines: Vec::new(),
        };
    }

    let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min).floor();
    let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max).ceil();

    let mut airlines: Vec<String> = offers
        .iter()
        .map(|o| o.airline.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    airlines.sort();

    Facets {
        min_price,
        max_price,
        airlines,
    }
}

/// Active filter selections. Categories AND together; selections within
/// stops/airlines OR together.
#[derive(Debug, Clone)]
pub struct FilterState {
    pub price_range: (f64, f64),
    pub stops: HashSet<StopBucket>,
    pub airlines: HashSet<String>,
}

impl FilterState {
    /// Fresh state for a new result set: price range re-bounds to the
    /// dataset, stop/airline selections reset to empty.
    pub fn reset_for(offers: &[FlightOffer]) -> Self {
        let facets = derive_facets(offers);
        Self {
            price_range: (facets.min_price, facets.max_price),
            stops: HashSet::new(),
            airlines: HashSet::new(),
        }
    }

    pub fn matches(&self, offer: &FlightOffer) -> bool {
        let Some(price) = offer.price_total() else {
            return false;
        };
        if price < self.price_range.0 || price > self.price_range.1 {
            return false;
        }
        if !self.airlines.is_empty() && !self.airlines.contains(&offer.airline) {
            return false;
        }
        if !self.stops.is_empty() && !self.stops.contains(&StopBucket::of(offer)) {
            return false;
        }
        true
    }
}

/// The offers visible under the current selections.
pub fn apply<'a>(offers: &'a [FlightOffer], state: &FilterState) -> Vec<&'a FlightOffer> {
    offers.iter().filter(|offer| state.matches(offer)).collect()
}
