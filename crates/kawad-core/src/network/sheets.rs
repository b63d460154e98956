use chrono::Utc;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::EndpointConfig;
use crate::error::Result;
use crate::network::HttpClient;

/// The two fixed spreadsheet-backed endpoints: a submission webhook and a
/// published CSV export.
pub struct SheetsApi {
    client: HttpClient,
    script_url: String,
    export_url: String,
}

impl SheetsApi {
    pub fn new(endpoints: &EndpointConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            script_url: endpoints.script_url.clone(),
            export_url: endpoints.export_url.clone(),
        })
    }

    /// Send a completed sheet to the webhook.
    ///
    /// The webhook answers opaquely and its response is never read, so
    /// transport success is the only delivery signal: a submission the
    /// server silently rejects is indistinguishable from an accepted one.
    pub async fn submit(&self, payload: &JsonValue) -> Result<()> {
        debug!("Submitting sheet to {}", self.script_url);
        self.client.post_json(&self.script_url, payload).await
    }

    /// Fetch the published summary CSV.
    ///
    /// A `t=<millis>` query parameter busts the export's edge cache.
    pub async fn fetch_summary(&self) -> Result<String> {
        let url = format!("{}&t={}", self.export_url, Utc::now().timestamp_millis());
        debug!("Fetching summary from {}", url);
        self.client.get_text(&url).await
    }
}
