use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

/// Issues single GET requests and parses the body as JSON.
///
/// The HTTP status is not inspected: the weather provider reports its errors
/// inside the JSON body, so any body that parses is handed back to the caller.
#[derive(Debug, Clone, Default)]
pub struct JsonFetcher {
    http: Client,
}

impl JsonFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build().map_err(reqwest::Error::without_url)?,
        })
    }

    pub async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        // The query carries the API key; keep it out of error messages.
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = res.status();
        let body = res.text().await.map_err(reqwest::Error::without_url)?;

        debug!(url, %status, bytes = body.len(), "received response");

        Ok(serde_json::from_str(&body)?)
    }
}
