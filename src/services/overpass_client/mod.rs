pub mod overpass_service;
pub mod types;
