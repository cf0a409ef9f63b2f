pub mod geocoding_service_error;
pub mod nominatim_reverse_response;
pub mod nominatim_search_response;
