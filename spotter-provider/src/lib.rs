pub mod amadeus;
pub mod app_config;
pub mod error;
pub mod mock;
pub mod normalize;
pub mod token;

pub use amadeus::{AmadeusClient, Dictionaries, FlightProvider, ProviderResponse, RawOffer};
pub use app_config::{AuthFallback, Config};
pub use error::ProviderError;
pub use token::{Credential, TokenExchanger, TokenSource};
