//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Key material for signing flash message cookies, at least 64 bytes.
    pub secret: String,
}

fn default_static_dir() -> String {
    "./static".to_string()
}
