use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::coordinate::Coordinate;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub element_type: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl OverpassElement {
    /// Only nodes carry their own position; `skel` output may omit it.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    pub fn tag(&self, key: &str) -> Option<String> {
        self.tags
            .get(key)
            .filter(|v| !v.trim().is_empty())
            .cloned()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}
