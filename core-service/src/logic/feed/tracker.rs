//! Last-load bookkeeping per sheet, shared across request handlers

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;

use super::sheet::LoadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Apps,
    Status,
    Dashboard,
}

impl FeedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedKind::Apps => "apps",
            FeedKind::Status => "status",
            FeedKind::Dashboard => "dashboard",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedHealth {
    pub kind: FeedKind,
    pub state: LoadState,
    pub records: usize,
    pub last_attempt: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct FeedTracker {
    entries: RwLock<HashMap<FeedKind, FeedHealth>>,
}

impl FeedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, kind: FeedKind, state: LoadState, records: usize) {
        if state == LoadState::Unavailable {
            log::warn!("Feed {} unavailable", kind.as_str());
        }
        self.entries.write().insert(
            kind,
            FeedHealth {
                kind,
                state,
                records,
                last_attempt: Utc::now(),
            },
        );
    }

    pub fn get(&self, kind: FeedKind) -> Option<FeedHealth> {
        self.entries.read().get(&kind).cloned()
    }

    /// All feeds that have been attempted, in kind order
    pub fn snapshot(&self) -> Vec<FeedHealth> {
        let mut list: Vec<FeedHealth> = self.entries.read().values().cloned().collect();
        list.sort_by_key(|h| h.kind);
        list
    }
}
