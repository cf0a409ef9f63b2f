use std::{net::SocketAddr, time::Duration};

use clap::Parser;

#[derive(Clone, Parser)]
#[command(name = "restaurant-picker", about = "Picks a random restaurant near a location")]
pub struct AppConfig {
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind_addr: SocketAddr,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "MAPBOX_API_KEY", hide_env_values = true)]
    pub mapbox_api_key: String,

    #[arg(long, env = "MAPBOX_HOST", default_value = "https://api.mapbox.com")]
    pub mapbox_host: String,

    #[arg(
        long,
        env = "NOMINATIM_HOST",
        default_value = "https://nominatim.openstreetmap.org"
    )]
    pub nominatim_host: String,

    #[arg(long, env = "OVERPASS_HOST", default_value = "https://overpass-api.de")]
    pub overpass_host: String,

    /// Shared secret expected in the `authorization` header. Unset disables the check.
    #[arg(long, env = "AUTH_KEY", hide_env_values = true)]
    pub auth_key: Option<String>,

    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("mapbox_api_key", &"[redacted]")
            .field("mapbox_host", &self.mapbox_host)
            .field("nominatim_host", &self.nominatim_host)
            .field("overpass_host", &self.overpass_host)
            .field("auth_key", &self.auth_key.as_ref().map(|_| "[redacted]"))
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}
