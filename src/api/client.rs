use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::models::{ChatPayload, ChatReply, NewsPayload, NewsReply};
use crate::config::Config;
use crate::error::{AppError, Result};

// Shared client so every ApiClient reuses the same connection pool
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .build()
        .unwrap_or_else(|_| Client::new())
});

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single POST attempt. A non-success status becomes an error carrying
    /// the response body text.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");

        let response = CLIENT.post(&url).json(body).send().await.map_err(|err| {
            warn!(%url, error = %err, "request failed");
            AppError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!(%url, status = status.as_u16(), "non-success response");
            return Err(AppError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn chat(&self, payload: &ChatPayload) -> Result<ChatReply> {
        self.post("/chat", payload).await
    }

    pub async fn news_summary(&self, payload: &NewsPayload) -> Result<NewsReply> {
        self.post("/news/summary", payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn built_from_config() {
        let config = Config {
            api_base_url: "http://127.0.0.1:9000/api".to_string(),
        };
        assert_eq!(
            ApiClient::from_config(&config).base_url(),
            "http://127.0.0.1:9000/api"
        );
    }
}
