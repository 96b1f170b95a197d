//! Public IP geolocation
//!
//! Primary provider is ipapi.co, fallback is ipwho.is. Either may be
//! blocked locally, so a failure of both is reported with a fixed message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

pub const LOOKUP_FAILED_MESSAGE: &str = "Could not detect IP. Service might be blocked.";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{provider} returned status {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("{provider} rejected the lookup: {reason}")]
    Rejected { provider: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpInfo {
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country_name: String,
    /// ISP or organisation
    pub org: String,
    pub provider: &'static str,
    /// Resolver seen by the DNS check; `None` when that check failed
    pub dns: Option<DnsResolver>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsResolver {
    pub ip: String,
    #[serde(default)]
    pub geo: String,
}

// ----------------------------------------------------------------------------
// Provider payloads
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct EdnsResponse {
    dns: Option<DnsResolver>,
}

#[derive(Debug, Deserialize)]
struct IpapiResponse {
    #[serde(default)]
    ip: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country_name: String,
    #[serde(default)]
    org: String,
    #[serde(default)]
    error: bool,
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct IpwhoConnection {
    isp: Option<String>,
    org: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpwhoResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    ip: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    connection: Option<IpwhoConnection>,
}

impl IpapiResponse {
    fn into_info(self) -> Result<IpInfo, LookupError> {
        if self.error {
            return Err(LookupError::Rejected {
                provider: "ipapi.co",
                reason: self.reason.unwrap_or_else(|| "unknown".to_string()),
            });
        }
        Ok(IpInfo {
            ip: self.ip,
            city: self.city,
            region: self.region,
            country_name: self.country_name,
            org: self.org,
            provider: "ipapi.co",
            dns: None,
        })
    }
}

impl IpwhoResponse {
    fn into_info(self) -> Result<IpInfo, LookupError> {
        if !self.success {
            return Err(LookupError::Rejected {
                provider: "ipwho.is",
                reason: self.message.unwrap_or_else(|| "Fallback API error".to_string()),
            });
        }
        let connection = self.connection.unwrap_or_default();
        let org = connection
            .isp
            .filter(|s| !s.is_empty())
            .or(connection.org.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "Unknown ISP".to_string());

        Ok(IpInfo {
            ip: self.ip,
            city: self.city,
            region: self.region,
            country_name: self.country,
            org,
            provider: "ipwho.is",
            dns: None,
        })
    }
}

// ----------------------------------------------------------------------------
// Lookup
// ----------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct IpLookup {
    client: reqwest::Client,
    primary_base: String,
    fallback_base: String,
    /// Empty = skip the resolver check
    dns_url: String,
}

impl IpLookup {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_providers(client, constants::PRIMARY_IP_API, constants::FALLBACK_IP_API)
    }

    pub fn with_providers(client: reqwest::Client, primary: &str, fallback: &str) -> Self {
        Self {
            client,
            primary_base: primary.trim_end_matches('/').to_string(),
            fallback_base: fallback.trim_end_matches('/').to_string(),
            dns_url: constants::DNS_RESOLVER_API.to_string(),
        }
    }

    pub fn with_dns_url(mut self, url: &str) -> Self {
        self.dns_url = url.to_string();
        self
    }

    /// Look up `ip`, or the egress IP of this host when `None`.
    /// The resolver check runs alongside; its failure only leaves `dns` empty.
    pub async fn lookup(&self, ip: Option<&str>) -> Result<IpInfo, LookupError> {
        let (primary, dns) = tokio::join!(self.lookup_primary(ip), self.lookup_dns());

        let (mut info, dns) = match primary {
            Ok(info) => (info, dns),
            Err(e) => {
                log::warn!("Primary IP API failed, trying fallback: {}", e);
                let info = self.lookup_fallback(ip).await?;
                let dns = match dns {
                    Some(dns) => Some(dns),
                    None => self.lookup_dns().await,
                };
                (info, dns)
            }
        };

        info.dns = dns;
        Ok(info)
    }

    async fn lookup_dns(&self) -> Option<DnsResolver> {
        if self.dns_url.trim().is_empty() {
            return None;
        }
        let result = async {
            let response = self.client.get(&self.dns_url).send().await?.error_for_status()?;
            response.json::<EdnsResponse>().await
        }
        .await;

        match result {
            Ok(body) => body.dns,
            Err(e) => {
                log::debug!("DNS resolver check failed: {}", e);
                None
            }
        }
    }

    async fn lookup_primary(&self, ip: Option<&str>) -> Result<IpInfo, LookupError> {
        let url = match ip {
            Some(ip) => format!("{}/{}/json/", self.primary_base, ip),
            None => format!("{}/json/", self.primary_base),
        };
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LookupError::Status {
                provider: "ipapi.co",
                status: response.status().as_u16(),
            });
        }
        response.json::<IpapiResponse>().await?.into_info()
    }

    async fn lookup_fallback(&self, ip: Option<&str>) -> Result<IpInfo, LookupError> {
        let url = match ip {
            Some(ip) => format!("{}/{}", self.fallback_base, ip),
            None => format!("{}/", self.fallback_base),
        };
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(LookupError::Status {
                provider: "ipwho.is",
                status: response.status().as_u16(),
            });
        }
        response.json::<IpwhoResponse>().await?.into_info()
    }
}
