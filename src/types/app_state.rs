use crate::services::lookup::lookup_service::LookupService;

#[derive(Clone)]
pub struct AppState {
    pub lookup_service: LookupService,
    pub auth_key: Option<String>,
}
