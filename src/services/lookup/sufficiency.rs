use crate::types::restaurant_record::RestaurantRecord;

const MIN_IMPORTANT_FIELDS: usize = 2;

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Name and address are required; at least two of phone, website, opening
/// hours and cuisine must be set as well.
pub fn is_sufficient(record: &RestaurantRecord) -> bool {
    let has_required = record.has_name() && is_present(&record.address);

    let amenities = &record.amenities;
    let important = [
        &amenities.phone,
        &amenities.website,
        &amenities.opening_hours,
        &amenities.cuisine,
    ]
    .into_iter()
    .filter(|field| is_present(field))
    .count();

    has_required && important >= MIN_IMPORTANT_FIELDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        coordinate::Coordinate,
        restaurant_record::{Amenities, RestaurantSource},
    };

    fn record(
        name: Option<&str>,
        address: Option<&str>,
        amenities: Amenities,
    ) -> RestaurantRecord {
        RestaurantRecord::new(
            RestaurantSource::Primary,
            name.map(str::to_string),
            Coordinate::new(0.0, 0.0),
        )
        .with_address(address.map(str::to_string))
        .with_amenities(amenities)
    }

    fn some(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn name_address_phone_and_website_is_sufficient() {
        let r = record(
            Some("Joe's"),
            Some("1 Main St"),
            Amenities {
                phone: some("555-0100"),
                website: some("https://joes.example"),
                ..Amenities::default()
            },
        );

        assert!(is_sufficient(&r));
    }

    #[test]
    fn missing_address_is_insufficient_regardless_of_extras() {
        let r = record(
            Some("Joe's"),
            None,
            Amenities {
                phone: some("555-0100"),
                website: some("https://joes.example"),
                cuisine: some("diner"),
                ..Amenities::default()
            },
        );

        assert!(!is_sufficient(&r));
    }

    #[test]
    fn single_important_field_is_insufficient() {
        let r = record(
            Some("Joe's"),
            Some("1 Main St"),
            Amenities {
                cuisine: some("diner"),
                takeaway: some("yes"),
                delivery: some("yes"),
                ..Amenities::default()
            },
        );

        assert!(!is_sufficient(&r));
    }

    #[test]
    fn placeholder_name_is_insufficient() {
        let r = record(
            None,
            Some("1 Main St"),
            Amenities {
                phone: some("555-0100"),
                opening_hours: some("Mo-Su 10:00-22:00"),
                ..Amenities::default()
            },
        );

        assert!(!is_sufficient(&r));
    }

    #[test]
    fn blank_values_do_not_count() {
        let r = record(
            Some("Joe's"),
            Some("1 Main St"),
            Amenities {
                phone: some(" "),
                website: some(""),
                cuisine: some("diner"),
                ..Amenities::default()
            },
        );

        assert!(!is_sufficient(&r));
    }
}
