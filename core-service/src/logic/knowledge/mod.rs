//! Knowledge Module - static reference data
//!
//! - `apps`: curated app verdicts + merge with community test results
//! - `protocols`: protocol detection risk table
//! - `guide`: safety guide content

pub mod apps;
pub mod protocols;
pub mod guide;

pub use apps::{
    build_catalog, curated_apps, merge_apps, search_apps,
    AppAssessment, AppLookup, EntrySource,
};
pub use protocols::{find_protocol, ProtocolInfo, ProtocolRisk, PROTOCOLS};
pub use guide::{safety_guide, SafetyGuide};
