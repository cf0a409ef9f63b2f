pub mod mapbox_service;
pub mod types;
