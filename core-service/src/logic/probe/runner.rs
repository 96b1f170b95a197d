use std::future::Future;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::targets::ProbeTarget;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeStatus {
    Accessible,
    Blocked,
}

/// Outcome of one probe, stored at its target index
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutcome {
    pub index: usize,
    pub name: String,
    pub url: String,
    pub status: ProbeStatus,
    pub timed_out: bool,
    pub elapsed_ms: u64,
}

const BLOCKED_ADVICE: &str = "Some sites are blocked. Your VPN might not be bypassing the DPI fully. \
Try switching protocols (e.g., to V2Ray or Shadowsocks).";
const ALL_CLEAR_ADVICE: &str = "All sites accessible! Your VPN is successfully bypassing censorship.";

#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    pub results: Vec<ProbeOutcome>,
    pub accessible: usize,
    pub blocked: usize,
    pub advice: Option<&'static str>,
}

impl CheckSummary {
    pub fn from_results(results: Vec<ProbeOutcome>) -> Self {
        let blocked = results
            .iter()
            .filter(|r| r.status == ProbeStatus::Blocked)
            .count();
        let accessible = results.len() - blocked;

        let advice = if blocked > 0 {
            Some(BLOCKED_ADVICE)
        } else if accessible > 0 {
            Some(ALL_CLEAR_ADVICE)
        } else {
            None
        };

        Self {
            results,
            accessible,
            blocked,
            advice,
        }
    }

    pub fn all_accessible(&self) -> bool {
        self.blocked == 0 && self.accessible > 0
    }
}

// ============================================================================
// RUNNER
// ============================================================================

/// Run `probe` against every target concurrently.
///
/// `probe` resolves to `true` when the site answered. Each probe gets its
/// own `timeout`; a timeout or a panicked task marks only that slot blocked.
pub async fn run_probes<F, Fut>(
    targets: &[ProbeTarget],
    timeout: Duration,
    probe: F,
) -> Vec<ProbeOutcome>
where
    F: Fn(ProbeTarget) -> Fut,
    Fut: Future<Output = bool> + Send + 'static,
{
    let handles: Vec<_> = targets
        .iter()
        .cloned()
        .map(|target| {
            let fut = probe(target);
            tokio::spawn(async move {
                let started = Instant::now();
                let result = tokio::time::timeout(timeout, fut).await;
                (result, started.elapsed())
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(targets.len());
    for (index, (target, handle)) in targets.iter().zip(handles).enumerate() {
        let (status, timed_out, elapsed) = match handle.await {
            Ok((Ok(true), elapsed)) => (ProbeStatus::Accessible, false, elapsed),
            Ok((Ok(false), elapsed)) => (ProbeStatus::Blocked, false, elapsed),
            Ok((Err(_), elapsed)) => (ProbeStatus::Blocked, true, elapsed),
            Err(e) => {
                log::warn!("Probe task for {} failed: {}", target.name, e);
                (ProbeStatus::Blocked, false, Duration::ZERO)
            }
        };

        outcomes.push(ProbeOutcome {
            index,
            name: target.name.clone(),
            url: target.url.clone(),
            status,
            timed_out,
            elapsed_ms: elapsed.as_millis() as u64,
        });
    }

    outcomes
}

/// Probe each target over HTTP. Any response, whatever its status code,
/// counts as accessible; only transport errors and timeouts count as blocked.
pub async fn check_censorship(
    client: &reqwest::Client,
    targets: &[ProbeTarget],
    timeout: Duration,
) -> CheckSummary {
    let results = run_probes(targets, timeout, |target| {
        let client = client.clone();
        async move {
            match client.get(&target.url).send().await {
                Ok(_) => true,
                Err(e) => {
                    log::debug!("Probe {} failed: {}", target.url, e);
                    false
                }
            }
        }
    })
    .await;

    let summary = CheckSummary::from_results(results);
    log::info!(
        "Censorship check: {} accessible, {} blocked",
        summary.accessible,
        summary.blocked
    );
    summary
}
