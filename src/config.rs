use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub http_timeout_secs: u64,
    pub max_retries: u32,
}

impl AppConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let api_base = env::var("VCP_API_BASE")
            .unwrap_or_else(|_| "https://explorer.veritaschain.org/api/v1".to_string());

        let api_key = env::var("VCP_API_KEY").ok().filter(|k| !k.is_empty());

        let http_timeout_secs = env::var("VCP_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?;

        let max_retries = env::var("VCP_MAX_RETRIES")
            .unwrap_or_else(|_| "2".to_string())
            .parse()?;

        Ok(AppConfig {
            api_base,
            api_key,
            http_timeout_secs,
            max_retries,
        })
    }
}
