//! Instance-principal identity from the instance metadata service
//!
//! Available only inside OCI-managed compute. The probe is expected to fail
//! fast everywhere else; callers treat that failure as a fallback signal,
//! not an error.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::imds;
use crate::error::{OciError, Result};

/// Identity material acquired from the metadata service
#[derive(Debug, Clone)]
pub struct InstanceIdentity {
    pub tenancy_id: String,
    pub region: String,
    pub token: String,
}

/// Instance document subset returned by `GET {imds}/instance/`
#[derive(Deserialize, Debug)]
struct InstanceDocument {
    #[serde(rename = "tenantId")]
    tenant_id: String,
    #[serde(rename = "canonicalRegionName")]
    canonical_region_name: String,
}

/// Session token returned by `GET {imds}/identity/token`
#[derive(Deserialize, Debug)]
struct TokenResponse {
    token: String,
}

/// Probe for the instance metadata service
pub struct MetadataProbe {
    client: Client,
    base_url: String,
}

impl MetadataProbe {
    /// Probe against the fixed link-local metadata endpoint
    pub fn new() -> Self {
        Self::with_base_url(imds::BASE_URL.to_string())
    }

    /// Probe against a custom endpoint (mock servers in tests)
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(imds::TIMEOUT_SECS))
            .timeout(Duration::from_secs(imds::TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, base_url }
    }

    /// Fetch the instance document and a session token.
    ///
    /// Any failure (unreachable service, non-success status, malformed body)
    /// surfaces as an error for the resolver to swallow and fall back on.
    pub async fn acquire(&self) -> Result<InstanceIdentity> {
        let doc_url = format!("{}/instance/", self.base_url);
        debug!("Probing instance metadata at: {}", doc_url);

        let response = self
            .client
            .get(&doc_url)
            .header("Authorization", imds::AUTH_HEADER)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(OciError::Api {
                status: response.status().as_u16(),
                message: "Failed to fetch instance document".to_string(),
            });
        }
        let doc: InstanceDocument = response.json().await?;

        let token_url = format!("{}/identity/token", self.base_url);
        debug!("Fetching instance session token from: {}", token_url);

        let response = self
            .client
            .get(&token_url)
            .header("Authorization", imds::AUTH_HEADER)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(OciError::Api {
                status: response.status().as_u16(),
                message: "Failed to fetch instance session token".to_string(),
            });
        }
        let token: TokenResponse = response.json().await?;

        debug!(
            "Acquired instance identity for tenancy {} in region {}",
            doc.tenant_id, doc.canonical_region_name
        );
        Ok(InstanceIdentity {
            tenancy_id: doc.tenant_id,
            region: doc.canonical_region_name,
            token: token.token,
        })
    }
}

impl Default for MetadataProbe {
    fn default() -> Self {
        Self::new()
    }
}
