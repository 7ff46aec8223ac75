/// Static airport directory backing location selection and the mock
/// offer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub code: &'static str,
    pub city: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

pub const AIRPORTS: &[Airport] = &[
    Airport { code: "JFK", city: "New York", name: "John F. Kennedy International Airport", country: "USA" },
    Airport { code: "LHR", city: "London", name: "Heathrow Airport", country: "UK" },
    Airport { code: "DXB", city: "Dubai", name: "Dubai International Airport", country: "UAE" },
    Airport { code: "SIN", city: "Singapore", name: "Changi Airport", country: "Singapore" },
    Airport { code: "HND", city: "Tokyo", name: "Haneda Airport", country: "Japan" },
    Airport { code: "NRT", city: "Tokyo", name: "Narita International Airport", country: "Japan" },
    Airport { code: "CDG", city: "Paris", name: "Charles de Gaulle Airport", country: "France" },
    Airport { code: "AMS", city: "Amsterdam", name: "Amsterdam Airport Schiphol", country: "Netherlands" },
    Airport { code: "FRA", city: "Frankfurt", name: "Frankfurt Airport", country: "Germany" },
    Airport { code: "IST", city: "Istanbul", name: "Istanbul Airport", country: "Turkey" },
    Airport { code: "LAX", city: "Los Angeles", name: "Los Angeles International Airport", country: "USA" },
    Airport { code: "SYD", city: "Sydney", name: "Kingsford Smith Airport", country: "Australia" },
    Airport { code: "BOM", city: "Mumbai", name: "Chhatrapati Shivaji Maharaj International Airport", country: "India" },
    Airport { code: "DEL", city: "Delhi", name: "Indira Gandhi International Airport", country: "India" },
    Airport { code: "KTM", city: "Kathmandu", name: "Tribhuvan International Airport", country: "Nepal" },
    Airport { code: "BKK", city: "Bangkok", name: "Suvarnabhumi Airport", country: "Thailand" },
    Airport { code: "HKG", city: "Hong Kong", name: "Hong Kong International Airport", country: "Hong Kong" },
    Airport { code: "SFO", city: "San Francisco", name: "San Francisco International Airport", country: "USA" },
];

/// Case-insensitive lookup by IATA code.
pub fn find_airport(code: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|a| a.code.eq_ignore_ascii_case(code.trim()))
}
