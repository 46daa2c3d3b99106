use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;
use tracing::info;

use crate::config::ScrapingConfig;

const SCOREBOARD_URL: &str = "https://www.basketball-reference.com/boxscores/";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("scoreboard request failed: HTTP {status}")]
    Status { status: reqwest::StatusCode },
    #[error("scoreboard request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetches the raw scoreboard page for one calendar date.
pub struct ScoreboardClient {
    client: Client,
    base_url: String,
}

impl ScoreboardClient {
    pub fn new(config: &ScrapingConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: SCOREBOARD_URL.to_string(),
        })
    }

    /// GETs the scoreboard page. A non-2xx response is an error; the body
    /// is never handed to the parser in that case.
    pub fn fetch(&self, date: NaiveDate) -> Result<String, FetchError> {
        info!("Fetching scoreboard for {}", date);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("month", date.month().to_string()),
                ("day", date.day().to_string()),
                ("year", date.year().to_string()),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }

        Ok(response.text()?)
    }
}
