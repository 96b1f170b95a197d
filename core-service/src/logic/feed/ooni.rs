//! OONI country overview

use serde::{Deserialize, Serialize};

use super::sheet::FeedError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OoniStats {
    #[serde(default)]
    pub measurement_count: u64,
    #[serde(default)]
    pub network_count: u64,
    #[serde(default)]
    pub first_bucket_date: String,
}

/// Explorer link for a country
pub fn explorer_url(country: &str) -> String {
    format!("https://explorer.ooni.org/country/{}", country)
}

pub async fn fetch_overview(
    client: &reqwest::Client,
    base_url: &str,
    country: &str,
) -> Result<OoniStats, FeedError> {
    let response = client
        .get(base_url)
        .query(&[("probe_cc", country)])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FeedError::Status(response.status().as_u16()));
    }
    Ok(response.json::<OoniStats>().await?)
}
