pub mod overpass_response;
