//! Visitor counter responses

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VisitorCount {
    pub count: u64,
}
