use std::sync::Arc;

use super::ports::ReverseGeocoder;
use crate::{
    services::{
        geocoding_client::types::geocoding_service_error::GeocodingServiceError,
        overpass_client::types::overpass_response::OverpassElement,
    },
    types::restaurant_record::{Amenities, RestaurantRecord, RestaurantSource},
};

/// Turns a bare open-map node into a [`RestaurantRecord`] by asking the
/// reverse geocoder for its address and lifting the amenity tags.
#[derive(Clone)]
pub struct DetailEnricher {
    reverse_geocoder: Arc<dyn ReverseGeocoder>,
}

fn amenities_from_tags(node: &OverpassElement) -> Amenities {
    Amenities {
        phone: node.tag("phone").or_else(|| node.tag("contact:phone")),
        website: node.tag("website").or_else(|| node.tag("url")),
        opening_hours: node.tag("opening_hours"),
        cuisine: node.tag("cuisine"),
        takeaway: node.tag("takeaway"),
        delivery: node.tag("delivery"),
        wheelchair: node.tag("wheelchair"),
        outdoor_seating: node.tag("outdoor_seating"),
        smoking: node.tag("smoking"),
        payment_methods: node.tag("payment_methods"),
    }
}

impl DetailEnricher {
    pub fn new(reverse_geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self { reverse_geocoder }
    }

    /// The record is placed at the node's own position. A node without one
    /// yields `None` and no reverse lookup is made.
    pub async fn enrich(
        &self,
        node: &OverpassElement,
    ) -> Result<Option<RestaurantRecord>, GeocodingServiceError> {
        let Some(coordinate) = node.coordinate() else {
            return Ok(None);
        };

        let address = self.reverse_geocoder.reverse(coordinate).await?;

        Ok(Some(
            RestaurantRecord::new(RestaurantSource::Secondary, node.tag("name"), coordinate)
                .with_address(address)
                .with_amenities(amenities_from_tags(node)),
        ))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;

    use async_trait::async_trait;

    use super::*;
    use crate::types::coordinate::Coordinate;

    pub(crate) struct StaticReverseGeocoder(pub Option<String>);

    #[async_trait]
    impl ReverseGeocoder for StaticReverseGeocoder {
        async fn reverse(
            &self,
            _coordinate: Coordinate,
        ) -> Result<Option<String>, GeocodingServiceError> {
            Ok(self.0.clone())
        }
    }

    struct FailingReverseGeocoder;

    #[async_trait]
    impl ReverseGeocoder for FailingReverseGeocoder {
        async fn reverse(
            &self,
            _coordinate: Coordinate,
        ) -> Result<Option<String>, GeocodingServiceError> {
            Err(GeocodingServiceError::Status(
                reqwest::StatusCode::TOO_MANY_REQUESTS,
            ))
        }
    }

    pub(crate) fn node(tags: &[(&str, &str)]) -> OverpassElement {
        OverpassElement {
            element_type: "node".to_string(),
            id: 42,
            lat: Some(51.5007),
            lon: Some(-0.1246),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[tokio::test]
    async fn enriches_name_address_and_cuisine_only() {
        let enricher = DetailEnricher::new(Arc::new(StaticReverseGeocoder(Some(
            "123 Main St".to_string(),
        ))));
        let node = node(&[("name", "Cafe X"), ("cuisine", "coffee_shop")]);
        let coordinate = node.coordinate().unwrap();

        let record = enricher.enrich(&node).await.unwrap().unwrap();

        assert_eq!(record.source(), RestaurantSource::Secondary);
        assert_eq!(record.name, "Cafe X");
        assert_eq!(record.address.as_deref(), Some("123 Main St"));
        assert_eq!(record.coordinate(), coordinate);
        assert_eq!(
            record.amenities,
            Amenities {
                cuisine: Some("coffee_shop".to_string()),
                ..Amenities::default()
            }
        );
    }

    #[tokio::test]
    async fn falls_back_to_alternate_contact_tags() {
        let enricher = DetailEnricher::new(Arc::new(StaticReverseGeocoder(None)));
        let node = node(&[
            ("contact:phone", "+44 20 7946 0000"),
            ("url", "https://example.org"),
            ("takeaway", "no"),
            ("outdoor_seating", "yes"),
        ]);

        let record = enricher.enrich(&node).await.unwrap().unwrap();

        assert_eq!(record.name, "Unnamed Restaurant");
        assert!(record.address.is_none());
        assert_eq!(record.amenities.phone.as_deref(), Some("+44 20 7946 0000"));
        assert_eq!(record.amenities.website.as_deref(), Some("https://example.org"));
        assert_eq!(record.amenities.takeaway.as_deref(), Some("no"));
        assert_eq!(record.amenities.outdoor_seating.as_deref(), Some("yes"));
        assert!(record.amenities.delivery.is_none());
    }

    #[tokio::test]
    async fn reverse_geocode_failure_propagates() {
        let enricher = DetailEnricher::new(Arc::new(FailingReverseGeocoder));
        let node = node(&[("name", "Cafe X")]);

        let result = enricher.enrich(&node).await;

        assert!(matches!(result, Err(GeocodingServiceError::Status(_))));
    }

    #[tokio::test]
    async fn node_without_position_skips_reverse_lookup() {
        let enricher = DetailEnricher::new(Arc::new(FailingReverseGeocoder));
        let mut node = node(&[("name", "Cafe X")]);
        node.lat = None;

        let result = enricher.enrich(&node).await;

        assert!(matches!(result, Ok(None)));
    }
}
