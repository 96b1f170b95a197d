//! Per-VPN status aggregation
//!
//! Groups status reports by VPN name (optionally for one ISP) and counts
//! OK vs BLOCKED votes.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::logic::records::{ConnectionStatus, StatusReport};

/// ISP filter value meaning "no filter"
pub const ALL_ISPS: &str = "All";

/// Aggregated votes for one VPN
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VpnStats {
    pub name: String,
    pub ok: u32,
    pub blocked: u32,
    pub total: u32,
    /// Status of the first report seen for this VPN
    pub last_status: ConnectionStatus,
}

impl VpnStats {
    /// Ties count as working
    pub fn is_working(&self) -> bool {
        self.ok >= self.blocked
    }

    /// Share of the majority vote, 0-100
    pub fn confidence(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let majority = self.ok.max(self.blocked) as f64;
        ((majority / self.total as f64) * 100.0).round() as u32
    }
}

/// API view of one VPN row
#[derive(Debug, Clone, Serialize)]
pub struct VpnStatusView {
    #[serde(flatten)]
    pub stats: VpnStats,
    pub working: bool,
    pub confidence: u32,
}

impl From<VpnStats> for VpnStatusView {
    fn from(stats: VpnStats) -> Self {
        Self {
            working: stats.is_working(),
            confidence: stats.confidence(),
            stats,
        }
    }
}

/// Unique ISPs, sorted
pub fn list_isps(reports: &[StatusReport]) -> Vec<String> {
    reports
        .iter()
        .map(|r| r.isp.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn matches_isp(report: &StatusReport, isp: Option<&str>) -> bool {
    match isp.map(str::trim) {
        None | Some("") | Some(ALL_ISPS) => true,
        Some(isp) => report.isp == isp,
    }
}

/// Aggregate by VPN name, most reported first (ties by name)
pub fn aggregate_by_vpn(reports: &[StatusReport], isp: Option<&str>) -> Vec<VpnStats> {
    let mut by_name: HashMap<&str, VpnStats> = HashMap::new();

    for report in reports.iter().filter(|r| matches_isp(r, isp)) {
        let stats = by_name.entry(report.vpn_name.as_str()).or_insert_with(|| VpnStats {
            name: report.vpn_name.clone(),
            ok: 0,
            blocked: 0,
            total: 0,
            last_status: report.status,
        });

        stats.total += 1;
        match report.status {
            ConnectionStatus::Ok => stats.ok += 1,
            ConnectionStatus::Blocked => stats.blocked += 1,
            ConnectionStatus::Unknown => {}
        }
    }

    let mut list: Vec<VpnStats> = by_name.into_values().collect();
    list.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(isp: &str, vpn: &str, status: ConnectionStatus) -> StatusReport {
        StatusReport {
            timestamp: "t".to_string(),
            isp: isp.to_string(),
            vpn_name: vpn.to_string(),
            status,
            raw_status: String::new(),
        }
    }

    fn sample() -> Vec<StatusReport> {
        use ConnectionStatus::*;
        vec![
            report("MPT", "Proton", Ok),
            report("MPT", "Proton", Ok),
            report("Mytel", "Proton", Blocked),
            report("Mytel", "Psiphon", Blocked),
            report("MPT", "Psiphon", Unknown),
            report("Ooredoo", "Outline", Ok),
        ]
    }

    #[test]
    fn test_isps_unique_sorted() {
        assert_eq!(list_isps(&sample()), vec!["MPT", "Mytel", "Ooredoo"]);
    }

    #[test]
    fn test_aggregate_all() {
        let stats = aggregate_by_vpn(&sample(), None);
        let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Proton", "Psiphon", "Outline"]);

        let proton = &stats[0];
        assert_eq!((proton.ok, proton.blocked, proton.total), (2, 1, 3));
        assert!(proton.is_working());
        assert_eq!(proton.confidence(), 67);

        let psiphon = &stats[1];
        assert!(!psiphon.is_working());
        assert_eq!(psiphon.confidence(), 50);
    }

    #[test]
    fn test_filter_by_isp() {
        let stats = aggregate_by_vpn(&sample(), Some("Mytel"));
        assert_eq!(stats.len(), 2);
        assert!(stats.iter().all(|s| s.blocked == 1 && s.total == 1));

        assert_eq!(aggregate_by_vpn(&sample(), Some(ALL_ISPS)).len(), 3);
        assert!(aggregate_by_vpn(&sample(), Some("Atom")).is_empty());
    }

    #[test]
    fn test_unknown_only_counts_as_working() {
        let stats = aggregate_by_vpn(&[report("MPT", "X", ConnectionStatus::Unknown)], None);
        assert!(stats[0].is_working());
        assert_eq!(stats[0].confidence(), 0);
    }
}
