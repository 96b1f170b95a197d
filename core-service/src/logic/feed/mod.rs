//! Feed Module - live data sources
//!
//! Each panel loads its own sheet independently. A failed load never
//! surfaces as an error: the panel gets its fallback data and a
//! `LoadState` the UI can render as "couldn't load".
//!
//! ## Sources
//! - apps sheet: community app tests, fallback = curated knowledge base
//! - status sheet: VPN status votes, fallback = empty
//! - dashboard sheet: block reports, fallback = empty
//! - OONI country overview

pub mod sheet;
pub mod tracker;
pub mod ooni;

pub use sheet::{FeedError, FeedOutcome, LoadState, SheetFeed};
pub use tracker::{FeedHealth, FeedKind, FeedTracker};
pub use ooni::{fetch_overview, OoniStats};

use std::sync::Arc;

use crate::constants;
use crate::logic::knowledge::{self, AppAssessment};
use crate::logic::records::{AppTestEntry, BlockReport, StatusReport};

/// Sheet URLs; empty string disables a source
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub apps_url: String,
    pub status_url: String,
    pub dashboard_url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            apps_url: constants::get_apps_csv_url(),
            status_url: constants::get_status_csv_url(),
            dashboard_url: constants::get_dashboard_csv_url(),
        }
    }
}

/// All sheet feeds plus their load tracker
#[derive(Debug, Clone)]
pub struct SheetFeeds {
    apps: SheetFeed,
    status: SheetFeed,
    dashboard: SheetFeed,
    tracker: Arc<FeedTracker>,
}

impl SheetFeeds {
    pub fn new(client: reqwest::Client, config: &FeedConfig) -> Self {
        Self {
            apps: SheetFeed::new(client.clone(), config.apps_url.clone()),
            status: SheetFeed::new(client.clone(), config.status_url.clone()),
            dashboard: SheetFeed::new(client, config.dashboard_url.clone()),
            tracker: Arc::new(FeedTracker::new()),
        }
    }

    pub fn tracker(&self) -> &FeedTracker {
        &self.tracker
    }

    /// Curated apps merged with classified community tests
    pub async fn load_apps(&self) -> FeedOutcome<AppAssessment> {
        let outcome = self
            .apps
            .load::<AppTestEntry>(Vec::new())
            .await
            .map(|tests| knowledge::build_catalog(&tests));
        self.tracker.record(FeedKind::Apps, outcome.state, outcome.records.len());
        outcome
    }

    pub async fn load_status(&self) -> FeedOutcome<StatusReport> {
        let outcome = self.status.load::<StatusReport>(Vec::new()).await;
        self.tracker.record(FeedKind::Status, outcome.state, outcome.records.len());
        outcome
    }

    pub async fn load_dashboard(&self) -> FeedOutcome<BlockReport> {
        let outcome = self.dashboard.load::<BlockReport>(Vec::new()).await;
        self.tracker.record(FeedKind::Dashboard, outcome.state, outcome.records.len());
        outcome
    }
}
