//! Structured resource search (search service)

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::Result;

use super::ApiClient;

/// Structured search request body
#[derive(Serialize, Debug)]
struct StructuredSearchDetails {
    #[serde(rename = "type")]
    search_type: &'static str,
    query: &'static str,
    #[serde(rename = "matchingContextType")]
    matching_context_type: &'static str,
}

/// One search hit: enough to resolve the instance and its compartment
#[derive(Deserialize, Debug, Clone)]
pub struct ResourceSummary {
    pub identifier: String,
    #[serde(rename = "compartmentId")]
    pub compartment_id: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

/// Search response wrapper
#[derive(Deserialize, Debug)]
struct ResourceSummaryCollection {
    items: Vec<ResourceSummary>,
}

impl ApiClient {
    /// Search the tenancy for compute instances in the RUNNING lifecycle
    /// state. One server-side filtered call; the result set is not paginated
    /// by this tool.
    pub async fn search_running_instances(&self) -> Result<Vec<ResourceSummary>> {
        let url = format!("{}/{}", self.endpoint(), api::SEARCH_RESOURCES);
        let details = StructuredSearchDetails {
            search_type: "Structured",
            query: api::RUNNING_INSTANCES_QUERY,
            matching_context_type: "NONE",
        };
        debug!("Searching resources at: {}", url);

        let response = self.post(&url).json(&details).send().await?;
        let collection: ResourceSummaryCollection = self
            .parse_api_response(response, "running instances")
            .await?;

        info!("Found {} running instances", collection.items.len());
        Ok(collection.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_client;
    use crate::api::ServiceKind;
    use crate::error::OciError;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_sends_structured_query() {
        let mock_server = MockServer::start().await;
        let client = test_client(ServiceKind::Search, &mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/resources"))
            .and(body_partial_json(serde_json::json!({
                "type": "Structured",
                "query": "query instance resources where lifeCycleState = 'RUNNING'"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {"identifier": "i1", "compartmentId": "c1", "displayName": "web-1"},
                    {"identifier": "i2", "compartmentId": "c2"}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resources = client.search_running_instances().await.unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].identifier, "i1");
        assert_eq!(resources[1].compartment_id, "c2");
        assert!(resources[1].display_name.is_none());
    }

    #[tokio::test]
    async fn test_search_empty_result() {
        let mock_server = MockServer::start().await;
        let client = test_client(ServiceKind::Search, &mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/resources"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})),
            )
            .mount(&mock_server)
            .await;

        let resources = client.search_running_instances().await.unwrap();
        assert!(resources.is_empty());
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let mock_server = MockServer::start().await;
        let client = test_client(ServiceKind::Search, &mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/resources"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = client.search_running_instances().await;
        assert!(matches!(result, Err(OciError::Api { status: 401, .. })));
    }
}
