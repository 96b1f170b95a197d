//! Published-sheet fetcher
//!
//! One GET per load, no retries. Transport errors and non-2xx statuses
//! turn into `LoadState::Unavailable` plus the caller's fallback data.

use serde::Serialize;
use thiserror::Error;

use crate::logic::records::{self, FromRawRow};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("live source disabled")]
    Disabled,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// Live data fetched and parsed (possibly zero rows)
    Loaded,
    /// Fetch failed; fallback data in use
    Unavailable,
    /// No live URL configured
    Disabled,
}

/// Records for one panel plus how they were obtained
#[derive(Debug, Clone, Serialize)]
pub struct FeedOutcome<T> {
    pub records: Vec<T>,
    pub state: LoadState,
}

impl<T> FeedOutcome<T> {
    /// Turn a fetch result into an outcome, substituting `fallback` on error
    pub fn from_result(result: Result<Vec<T>, FeedError>, fallback: Vec<T>) -> Self {
        match result {
            Ok(records) => Self {
                records,
                state: LoadState::Loaded,
            },
            Err(FeedError::Disabled) => Self {
                records: fallback,
                state: LoadState::Disabled,
            },
            Err(e) => {
                log::warn!("Feed unavailable, using fallback: {}", e);
                Self {
                    records: fallback,
                    state: LoadState::Unavailable,
                }
            }
        }
    }

    pub fn is_live(&self) -> bool {
        self.state == LoadState::Loaded
    }

    pub fn map<U>(self, f: impl FnOnce(Vec<T>) -> Vec<U>) -> FeedOutcome<U> {
        FeedOutcome {
            records: f(self.records),
            state: self.state,
        }
    }
}

/// A single published CSV sheet
#[derive(Debug, Clone)]
pub struct SheetFeed {
    client: reqwest::Client,
    url: String,
}

impl SheetFeed {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Raw CSV body
    pub async fn fetch_text(&self) -> Result<String, FeedError> {
        if !self.is_enabled() {
            return Err(FeedError::Disabled);
        }

        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status().as_u16()));
        }
        Ok(response.text().await?)
    }

    /// Fetch and run the ingestion pipeline
    pub async fn fetch_records<T: FromRawRow>(&self) -> Result<Vec<T>, FeedError> {
        let text = self.fetch_text().await?;
        let records = records::parse_records::<T>(&text);
        log::info!("Loaded {} records from {}", records.len(), self.url);
        Ok(records)
    }

    /// Fetch with fallback; never fails
    pub async fn load<T: FromRawRow>(&self, fallback: Vec<T>) -> FeedOutcome<T> {
        FeedOutcome::from_result(self.fetch_records::<T>().await, fallback)
    }
}
