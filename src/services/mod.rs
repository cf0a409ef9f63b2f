pub mod geocoding_client;
pub mod lookup;
pub mod mapbox_client;
pub mod overpass_client;
