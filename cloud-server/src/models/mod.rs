//! Data models

pub mod session;
pub mod report;
pub mod visitor;

pub use session::*;
pub use report::*;
pub use visitor::*;
