//! Visitors Module - unique visitor counter
//!
//! Visitors are identified by the SHA-256 of their IP and persisted to a
//! small JSON file. The count shown publicly is never lower than a
//! time-based synthetic count.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

/// 2024-12-01T00:00:00Z in milliseconds
const SYNTHETIC_EPOCH_MS: i64 = 1_733_011_200_000;
const SYNTHETIC_BASE: u64 = 500;
/// One synthetic visitor per 15 minutes
const SYNTHETIC_INTERVAL_MS: i64 = 15 * 60 * 1000;

pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorData {
    pub count: u64,
    pub hashes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitResult {
    pub count: u64,
    pub new: bool,
}

pub fn hash_ip(ip: &str) -> String {
    hex::encode(Sha256::digest(ip.as_bytes()))
}

/// First entry of an `X-Forwarded-For` value, or the loopback default
pub fn client_ip(forwarded_for: Option<&str>) -> &str {
    forwarded_for
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(DEFAULT_CLIENT_IP)
}

pub fn synthetic_count_at(now_ms: i64) -> u64 {
    let elapsed = (now_ms - SYNTHETIC_EPOCH_MS).max(0);
    SYNTHETIC_BASE + (elapsed / SYNTHETIC_INTERVAL_MS) as u64
}

pub fn synthetic_count() -> u64 {
    synthetic_count_at(Utc::now().timestamp_millis())
}

/// File-backed visitor store. All access goes through one async mutex so
/// concurrent visits cannot interleave read-modify-write cycles.
#[derive(Debug)]
pub struct VisitorStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl VisitorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> VisitorData {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return VisitorData::default(),
            Err(e) => {
                log::warn!("Could not read visitor data: {}", e);
                return VisitorData::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Visitor data is corrupt, starting over: {}", e);
            VisitorData::default()
        })
    }

    async fn write(&self, data: &VisitorData) -> std::io::Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }
        let json = serde_json::to_string_pretty(data).map_err(std::io::Error::other)?;
        tokio::fs::write(&self.path, json).await
    }

    /// Stored count without recording a visit
    pub async fn stored_count(&self) -> u64 {
        let _guard = self.lock.lock().await;
        self.read().await.count
    }

    /// Public count: max of stored and synthetic
    pub async fn public_count(&self) -> u64 {
        self.stored_count().await.max(synthetic_count())
    }

    /// Record a visit from `ip`. Write failures are logged and ignored; the
    /// incremented count is still returned.
    pub async fn record_visit(&self, ip: &str) -> VisitResult {
        let hash = hash_ip(ip);
        let _guard = self.lock.lock().await;

        let mut data = self.read().await;
        let new = !data.hashes.contains(&hash);
        if new {
            data.hashes.push(hash);
            data.count += 1;
            if let Err(e) = self.write(&data).await {
                log::warn!("Could not write visitor data: {}", e);
            }
        }

        VisitResult {
            count: data.count.max(synthetic_count()),
            new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_hash_ip() {
        assert_eq!(
            hash_ip("127.0.0.1"),
            "12ca17b49af2289436f303e0166030a21e525d266e209267433801a8fd4071a0"
        );
    }

    #[test]
    fn test_client_ip() {
        assert_eq!(client_ip(Some("203.0.113.7, 10.0.0.1")), "203.0.113.7");
        assert_eq!(client_ip(Some("  ")), DEFAULT_CLIENT_IP);
        assert_eq!(client_ip(None), DEFAULT_CLIENT_IP);
    }

    #[test]
    fn test_synthetic_count() {
        assert_eq!(synthetic_count_at(SYNTHETIC_EPOCH_MS), 500);
        assert_eq!(synthetic_count_at(SYNTHETIC_EPOCH_MS + 899_999), 500);
        assert_eq!(synthetic_count_at(SYNTHETIC_EPOCH_MS + 900_000), 501);
        assert_eq!(synthetic_count_at(0), 500);
    }

    #[tokio::test]
    async fn test_unique_visits() {
        let dir = TempDir::new().unwrap();
        let store = VisitorStore::new(dir.path().join("data").join("visitors.json"));

        assert!(store.record_visit("1.1.1.1").await.new);
        assert!(!store.record_visit("1.1.1.1").await.new);
        assert!(store.record_visit("2.2.2.2").await.new);
        assert_eq!(store.stored_count().await, 2);

        let saved: VisitorData =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(saved.hashes.len(), 2);
        assert_eq!(saved.hashes[0], hash_ip("1.1.1.1"));
    }

    #[tokio::test]
    async fn test_public_count_never_below_synthetic() {
        let dir = TempDir::new().unwrap();
        let store = VisitorStore::new(dir.path().join("visitors.json"));
        store.record_visit("1.1.1.1").await;
        assert!(store.public_count().await >= synthetic_count());
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_over() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("visitors.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = VisitorStore::new(&path);
        assert_eq!(store.stored_count().await, 0);
        assert!(store.record_visit("1.1.1.1").await.new);
        assert_eq!(store.stored_count().await, 1);
    }

    #[tokio::test]
    async fn test_write_failure_ignored() {
        let dir = TempDir::new().unwrap();
        // a directory where the file should be
        let store = VisitorStore::new(dir.path());

        let result = store.record_visit("1.1.1.1").await;
        assert!(result.new);
        assert!(result.count >= 1);
    }

    #[tokio::test]
    async fn test_concurrent_visits_not_lost() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(VisitorStore::new(dir.path().join("visitors.json")));

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.record_visit(&format!("10.0.0.{}", i)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.stored_count().await, 10);
    }
}
