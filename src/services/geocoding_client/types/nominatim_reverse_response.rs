use serde::{Deserialize, Serialize};

/// `reverse` answer. An unknown location comes back as `{"error": "..."}`
/// with a 200 status, hence every field is optional.
#[derive(Deserialize, Serialize, Default)]
pub struct NominatimReverseResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
