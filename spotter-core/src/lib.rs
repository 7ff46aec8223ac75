pub mod airports;
pub mod offer;
pub mod search;

pub use offer::FlightOffer;
pub use search::{SearchRequest, TravelClass};
