//! Block report submission model

use serde::{Deserialize, Serialize};
use validator::Validate;

// Form entry IDs
const ENTRY_PROTOCOL: &str = "entry.1112616887";
const ENTRY_REGION: &str = "entry.422315446";
const ENTRY_ISP: &str = "entry.1164622647";
const ENTRY_INTERNET_TYPE: &str = "entry.1479097968";
const ENTRY_CONTACT: &str = "entry.1723458574";

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[validate(length(min = 1, max = 100))]
    pub protocol: String,
    #[validate(length(min = 1, max = 100))]
    pub region: String,
    #[validate(length(min = 1, max = 100))]
    pub isp: String,
    #[validate(length(min = 1, max = 100))]
    pub internet_type: String,
    #[validate(length(max = 200))]
    pub contact: Option<String>,
}

impl ReportRequest {
    /// Urlencoded form body, contact blank when absent
    pub fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            (ENTRY_PROTOCOL, self.protocol.as_str()),
            (ENTRY_REGION, self.region.as_str()),
            (ENTRY_ISP, self.isp.as_str()),
            (ENTRY_INTERNET_TYPE, self.internet_type.as_str()),
            (ENTRY_CONTACT, self.contact.as_deref().unwrap_or("")),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}
