use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MapboxFeatureProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapboxFeatureContext {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapboxFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    #[serde(default)]
    pub properties: MapboxFeatureProperties,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<MapboxFeatureContext>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MapboxPlacesResponse {
    #[serde(default)]
    pub features: Vec<MapboxFeature>,
}
