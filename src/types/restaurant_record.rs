use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

pub const DEFAULT_RESTAURANT_NAME: &str = "Unnamed Restaurant";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RestaurantSource {
    Primary,
    Secondary,
}

impl RestaurantSource {
    pub fn provider_name(&self) -> &'static str {
        match self {
            RestaurantSource::Primary => "Mapbox",
            RestaurantSource::Secondary => "OpenStreetMap",
        }
    }
}

impl std::fmt::Display for RestaurantSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.provider_name())
    }
}

/// Optional descriptive attributes. Values are kept as the provider sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Amenities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takeaway: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheelchair: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdoor_seating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<String>,
}

/// A restaurant normalized from either source.
///
/// `source` and `coordinate` are fixed at construction; enrichment goes
/// through [`RestaurantRecord::with_address`] and
/// [`RestaurantRecord::with_amenities`], which leave both untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RestaurantRecord {
    source: RestaurantSource,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(flatten)]
    pub amenities: Amenities,
}

impl RestaurantRecord {
    pub fn new(source: RestaurantSource, name: Option<String>, coordinate: Coordinate) -> Self {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RESTAURANT_NAME.to_string());

        Self {
            source,
            name,
            address: None,
            coordinate,
            categories: Vec::new(),
            amenities: Amenities::default(),
        }
    }

    pub fn with_address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_amenities(mut self, amenities: Amenities) -> Self {
        self.amenities = amenities;
        self
    }

    pub fn source(&self) -> RestaurantSource {
        self.source
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// False when the provider gave no name and the placeholder is in use.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty() && self.name != DEFAULT_RESTAURANT_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_falls_back_to_placeholder() {
        let record = RestaurantRecord::new(
            RestaurantSource::Secondary,
            Some("  ".to_string()),
            Coordinate::new(1.0, 2.0),
        );

        assert_eq!(record.name, DEFAULT_RESTAURANT_NAME);
        assert!(!record.has_name());
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let record = RestaurantRecord::new(
            RestaurantSource::Primary,
            Some("Luigi's".to_string()),
            Coordinate::new(1.0, 2.0),
        )
        .with_amenities(Amenities {
            cuisine: Some("italian".to_string()),
            ..Amenities::default()
        });

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["source"], "primary");
        assert_eq!(json["cuisine"], "italian");
        assert!(json.get("address").is_none());
        assert!(json.get("phone").is_none());
        assert!(json.get("takeaway").is_none());
        assert!(json.get("categories").is_none());
    }

    #[test]
    fn enrichment_keeps_source_and_coordinate() {
        let coordinate = Coordinate::new(48.1, 11.5);
        let record = RestaurantRecord::new(RestaurantSource::Secondary, None, coordinate)
            .with_address(Some("Marienplatz 1".to_string()))
            .with_amenities(Amenities {
                phone: Some("+49 89 123".to_string()),
                ..Amenities::default()
            });

        assert_eq!(record.source(), RestaurantSource::Secondary);
        assert_eq!(record.coordinate(), coordinate);
    }
}
