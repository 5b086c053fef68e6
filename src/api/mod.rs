//! OCI control-plane HTTP client

pub mod compartments;
pub mod connect;
pub mod instances;
pub mod search;

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::auth::AuthContext;
use crate::config::api;
use crate::error::{OciError, Result};

pub use compartments::Compartment;
pub use connect::verify_connectivity;
pub use instances::Instance;
pub use search::ResourceSummary;

/// Response header carrying the opaque token of the next page
const NEXT_PAGE_HEADER: &str = "opc-next-page";

/// Target service a client handle is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Identity,
    Compute,
    Search,
}

impl ServiceKind {
    /// Hostname prefix of the service's regional endpoint
    fn host_prefix(&self) -> &'static str {
        match self {
            ServiceKind::Identity => "identity",
            ServiceKind::Compute => "iaas",
            ServiceKind::Search => "query",
        }
    }
}

/// Client handle bound to one service and one auth context.
///
/// Construction is pure: the first network I/O is the first call made
/// against the handle.
pub struct ApiClient {
    client: Client,
    auth_header: String,
    endpoint: String,
    kind: ServiceKind,
}

impl ApiClient {
    /// Create a client for `kind` bound to the given auth context.
    ///
    /// Fails with `ClientCreation` when the context carries a region the
    /// endpoint scheme cannot express.
    pub fn new(kind: ServiceKind, ctx: &AuthContext) -> Result<Self> {
        let region = ctx.region();
        validate_region(region)?;

        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| OciError::ClientCreation(e.to_string()))?;

        let endpoint = format!(
            "https://{}.{}.oraclecloud.com/{}",
            kind.host_prefix(),
            region,
            api::API_VERSION
        );
        debug!("Created {:?} client for endpoint {}", kind, endpoint);

        Ok(Self {
            client,
            auth_header: ctx.auth_header(),
            endpoint,
            kind,
        })
    }

    /// Create a client with a custom endpoint (for testing with mock servers)
    #[cfg(test)]
    pub fn with_endpoint(kind: ServiceKind, ctx: &AuthContext, endpoint: String) -> Self {
        Self {
            client: Client::new(),
            auth_header: ctx.auth_header(),
            endpoint,
            kind,
        }
    }

    /// Service this handle is bound to
    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    /// Base endpoint for building request URLs
    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
    }

    /// Parse an API response, returning an error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(OciError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch every page of a list endpoint.
    ///
    /// List responses are JSON arrays; the service hands back an opaque
    /// continuation token in the `opc-next-page` header while more pages
    /// remain. Pages are followed sequentially until the header is absent.
    pub async fn fetch_all_pages<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let mut all_items: Vec<T> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_num = 1u32;

        loop {
            let url = match &page_token {
                Some(token) => format!(
                    "{}{}{}limit={}&page={}",
                    self.endpoint, path, separator, api::DEFAULT_PAGE_SIZE, token
                ),
                None => format!(
                    "{}{}{}limit={}",
                    self.endpoint, path, separator, api::DEFAULT_PAGE_SIZE
                ),
            };
            debug!("Fetching page {} from: {}", page_num, url);

            let response = self.get(&url).send().await?;
            let next_token = response
                .headers()
                .get(NEXT_PAGE_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string());

            let page_context = format!("{} (page {})", error_context, page_num);
            let items: Vec<T> = self.parse_api_response(response, &page_context).await?;
            debug!("Page {} returned {} items", page_num, items.len());
            all_items.extend(items);

            match next_token {
                Some(token) if !token.is_empty() => {
                    page_token = Some(token);
                    page_num += 1;
                }
                _ => break,
            }
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }
}

/// Reject regions the endpoint scheme cannot express
fn validate_region(region: &str) -> Result<()> {
    if region.is_empty() {
        return Err(OciError::ClientCreation(
            "region is empty in the auth context".to_string(),
        ));
    }
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(OciError::ClientCreation(format!(
            "malformed region '{}' in the auth context",
            region
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::auth::{AuthContext, InstanceIdentity};

    /// Auth context used by API tests; token keeps requests distinguishable
    pub fn test_ctx() -> AuthContext {
        AuthContext::InstancePrincipal(InstanceIdentity {
            tenancy_id: "ocid1.tenancy.oc1..test".to_string(),
            region: "eu-frankfurt-1".to_string(),
            token: "st-test".to_string(),
        })
    }

    /// Client handle pointed at a mock server
    pub fn test_client(kind: ServiceKind, base_url: &str) -> ApiClient {
        ApiClient::with_endpoint(kind, &test_ctx(), base_url.to_string())
    }
}
