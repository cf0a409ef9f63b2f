pub mod lookup_outcome;
pub mod place_source_error;
