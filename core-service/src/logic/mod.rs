//! Logic Module - ingestion, classification and live checks
//!
//! ## Pipeline
//! - `ingest/` - CSV scanner + header / preamble skip
//! - `records/` - typed rows per sheet
//! - `risk/` - SAFE / CAUTION / UNSAFE classification
//!
//! ## Panels
//! - `knowledge/` - curated apps, protocols, safety guide
//! - `community/` - VPN status aggregation, region dashboard
//! - `feed/` - live sheet loading with fallback, OONI overview
//! - `probe/` - concurrent censorship probes
//! - `leak/` - IP info lookup, WebRTC leak verdict
//! - `visitors/` - unique visitor counter

pub mod ingest;
pub mod records;
pub mod risk;

pub mod knowledge;
pub mod community;
pub mod feed;
pub mod probe;
pub mod leak;
pub mod visitors;

#[cfg(test)]
pub(crate) mod test_util;
