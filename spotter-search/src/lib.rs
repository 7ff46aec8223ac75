pub mod client;
pub mod controller;
pub mod filter;
pub mod histogram;

pub use client::SearchClient;
pub use controller::{ResponseShape, SearchController, SearchPhase};
pub use filter::{apply, derive_facets, Facets, FilterState, StopBucket};
pub use histogram::{price_histogram, PriceBucket, BUCKET_COUNT};
