//! Region dashboard grid
//!
//! For one region, counts block reports per (ISP, protocol) cell.
//! 0 reports = OK, 1-2 = WARN, 3+ = BLOCKED.

use serde::Serialize;

use crate::logic::records::BlockReport;

pub const PROTOCOLS: &[&str] = &[
    "WireGuard",
    "OpenVPN (TCP/UDP)",
    "V2Ray (VMess/VLESS)",
    "Shadowsocks",
    "Psiphon",
    "IKEv2 / IPsec",
];

pub const ISPS: &[&str] = &[
    "MPT (Mobile/Fiber)",
    "Atom (Telenor)",
    "Ooredoo",
    "Mytel",
    "GlobalNet",
    "5BB Broadband",
    "Unilink",
    "Myanmar Net",
];

pub const REGIONS: &[&str] = &[
    "Yangon", "Mandalay", "Naypyidaw", "Shan State", "Kachin State", "Karen State",
    "Rakhine State", "Mon State", "Bago", "Sagaing", "Magway", "Ayeyarwady",
    "Tanintharyi", "Chin State", "Kayah State",
];

pub const DEFAULT_REGION: &str = "Yangon";

/// Reports needed before a cell counts as blocked
pub const BLOCKED_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CellStatus {
    Ok,
    Warn,
    Blocked,
}

impl CellStatus {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => CellStatus::Ok,
            c if c < BLOCKED_THRESHOLD => CellStatus::Warn,
            _ => CellStatus::Blocked,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    pub protocol: &'static str,
    pub status: CellStatus,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub isp: &'static str,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionGrid {
    pub region: String,
    pub protocols: &'static [&'static str],
    pub rows: Vec<GridRow>,
}

/// Build the ISP × protocol grid for `region`
pub fn region_grid(reports: &[BlockReport], region: &str) -> RegionGrid {
    let in_region: Vec<&BlockReport> = reports.iter().filter(|r| r.region == region).collect();

    let rows = ISPS
        .iter()
        .map(|&isp| GridRow {
            isp,
            cells: PROTOCOLS
                .iter()
                .map(|&protocol| {
                    let count = in_region
                        .iter()
                        .filter(|r| r.isp == isp && r.protocol == protocol)
                        .count();
                    GridCell {
                        protocol,
                        status: CellStatus::from_count(count),
                        count,
                    }
                })
                .collect(),
        })
        .collect();

    RegionGrid {
        region: region.to_string(),
        protocols: PROTOCOLS,
        rows,
    }
}
