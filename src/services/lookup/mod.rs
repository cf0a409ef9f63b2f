pub mod detail_enricher;
pub mod lookup_service;
pub mod ports;
pub mod random_index;
pub mod sufficiency;
pub mod types;
