use serde::{Deserialize, Serialize};

/// One site to check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeTarget {
    pub name: String,
    pub url: String,
}

impl ProbeTarget {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Sites commonly blocked by local DPI
pub fn default_targets() -> Vec<ProbeTarget> {
    vec![
        ProbeTarget::new("Facebook", "https://www.facebook.com"),
        ProbeTarget::new("YouTube", "https://www.youtube.com"),
        ProbeTarget::new("The Irrawaddy", "https://www.irrawaddy.com/"),
        ProbeTarget::new("Twitter / X", "https://twitter.com"),
    ]
}
