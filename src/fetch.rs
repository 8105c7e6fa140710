use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::Result;

const USER_AGENT: &str = concat!("rust_wordfreq/", env!("CARGO_PKG_VERSION"));

/// Issues the single GET of a render cycle.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Fetcher { client })
    }

    /// Fetches `url` and decodes the body as UTF-8, replacing invalid
    /// sequences. Non-success statuses are errors.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        info!(url, "fetching");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(url, %status, bytes = bytes.len(), "fetched");

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
