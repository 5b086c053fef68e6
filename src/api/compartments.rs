//! Compartment lookups (identity service)

use log::debug;
use serde::Deserialize;

use crate::config::api;
use crate::error::Result;

use super::ApiClient;

/// Compartment data from the identity service
#[derive(Deserialize, Debug, Clone)]
pub struct Compartment {
    pub id: String,
    pub name: String,
    #[serde(rename = "lifecycleState")]
    pub lifecycle_state: Option<String>,
}

impl ApiClient {
    /// Fetch one compartment by OCID. The tenancy root is itself a
    /// compartment, which is what the connectivity check relies on.
    pub async fn get_compartment(&self, compartment_id: &str) -> Result<Compartment> {
        let url = format!("{}/{}/{}", self.endpoint(), api::COMPARTMENTS, compartment_id);
        debug!("Fetching compartment from: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("compartment '{}'", compartment_id))
            .await
    }

    /// List all compartments directly under the tenancy, paginating until
    /// every page is consumed.
    pub async fn list_compartments(&self, tenancy_id: &str) -> Result<Vec<Compartment>> {
        let path = format!("/{}?compartmentId={}", api::COMPARTMENTS, tenancy_id);
        self.fetch_all_pages(&path, &format!("compartments of tenancy '{}'", tenancy_id))
            .await
    }
}
