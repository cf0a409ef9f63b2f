pub mod mapbox_places_response;
