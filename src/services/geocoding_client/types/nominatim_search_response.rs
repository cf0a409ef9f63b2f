use serde::{Deserialize, Serialize};

/// One `search` match. Nominatim sends coordinates as strings.
#[derive(Deserialize, Serialize)]
pub struct NominatimSearchResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

pub type NominatimSearchResponse = Vec<NominatimSearchResult>;
