use std::time::Duration;

use reqwest::Client;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// POST a JSON body without reading the response.
    ///
    /// The caller gets transport errors only; whatever the server answers
    /// is discarded.
    pub async fn post_json(&self, url: &str, body: &JsonValue) -> Result<()> {
        self.client.post(url).json(body).send().await?;
        Ok(())
    }

    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let text = response.text().await?;
        Ok(text)
    }
}
