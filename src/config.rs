use std::env;
use crate::error::{AppError, Result};

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

#[derive(Clone, Debug)]
pub struct Config {
    /// Absolute base URL every API path is appended to.
    pub api_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from a variable lookup. Empty values count as unset,
    /// so `API_URL=""` still falls through to `VITE_API_URL` and then `/api`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base = non_empty("API_URL")
            .or_else(|| non_empty("VITE_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let origin = non_empty("API_ORIGIN").unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());

        Ok(Config {
            api_base_url: Self::resolve(&base, &origin)?,
        })
    }

    /// Turns a possibly relative base (`/api`) into an absolute one.
    pub fn resolve(base: &str, origin: &str) -> Result<String> {
        let base = base.trim();
        if is_absolute(base) {
            return Ok(base.trim_end_matches('/').to_string());
        }

        let origin = origin.trim();
        if !is_absolute(origin) {
            return Err(AppError::ConfigError(format!(
                "Invalid API origin: {}",
                origin
            )));
        }

        let origin = origin.trim_end_matches('/');
        let path = base.trim_matches('/');
        if path.is_empty() {
            Ok(origin.to_string())
        } else {
            Ok(format!("{}/{}", origin, path))
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
