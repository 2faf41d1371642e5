//! Client Configuration
//!
//! Backend location and storage keys, fixed at build time.

/// Backend used when `SEECAR_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "https://seecar-backend.onrender.com";

/// localStorage key holding the session token
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub token_key: String,
}

impl AppConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token_key: TOKEN_KEY.to_string(),
        }
    }

    /// Config baked in at compile time
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SEECAR_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Absolute URL for a backend path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
