//! Community Module - crowdsourced report aggregation
//!
//! - `status`: per-VPN working/blocked votes, filterable by ISP
//! - `dashboard`: per-region ISP × protocol block grid

pub mod status;
pub mod dashboard;

pub use status::{aggregate_by_vpn, list_isps, VpnStats, VpnStatusView, ALL_ISPS};
pub use dashboard::{region_grid, CellStatus, RegionGrid, DEFAULT_REGION, REGIONS};
