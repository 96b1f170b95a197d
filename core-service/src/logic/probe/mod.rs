//! Probe Module - concurrent site reachability checks
//!
//! Every probe is spawned on its own task and raced against its own
//! timeout. Results are joined in target order; a slow or failing probe
//! never delays the verdict of another.

pub mod targets;
pub mod runner;

pub use targets::{default_targets, ProbeTarget};
pub use runner::{check_censorship, run_probes, CheckSummary, ProbeOutcome, ProbeStatus};
