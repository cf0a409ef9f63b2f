pub mod app_config;
pub mod app_state;
pub mod coordinate;
pub mod restaurant_record;
pub mod search_query;
