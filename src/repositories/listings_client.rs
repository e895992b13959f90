use std::time::Duration;
use anyhow::Context;
use tracing::debug;
use crate::models::listing::ListingEnvelope;

/// Thin client for the third-party property listings API.
pub struct ListingsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ListingsClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build listings http client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub async fn fetch_listing(
        &self,
        listing_id: u32,
    ) -> anyhow::Result<ListingEnvelope> {
        let url = format!("{}/property_details.json", self.base_url);
        let listing_id = listing_id.to_string();
        debug!("Fetching listing {} from {}", listing_id, url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("listing_id", listing_id.as_str()),
            ])
            .send()
            .await
            .context("Listings API request failed")?
            .error_for_status()
            .context("Listings API returned an error status")?;

        response
            .json::<ListingEnvelope>()
            .await
            .context("Failed to decode listings API response")
    }
}
