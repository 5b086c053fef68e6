//! Compute instance listings and lookups

use log::debug;
use serde::Deserialize;

use crate::config::api;
use crate::error::Result;

use super::ApiClient;

/// Compute instance data from the compute service
#[derive(Deserialize, Debug, Clone)]
pub struct Instance {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub shape: String,
    #[serde(rename = "lifecycleState")]
    pub lifecycle_state: String,
}

impl Instance {
    /// Binary status used by the plain listing: RUNNING or not
    pub fn running_status(&self) -> &'static str {
        if self.lifecycle_state == "RUNNING" {
            "Running"
        } else {
            "Not Running"
        }
    }

    /// Finer-grained status used by the table view
    pub fn display_status(&self) -> &'static str {
        match self.lifecycle_state.as_str() {
            "RUNNING" => "Running",
            "STARTING" => "Starting",
            "STOPPING" => "Stopping",
            _ => "Not Running",
        }
    }
}

impl ApiClient {
    /// List all instances in a compartment, paginating until every page is
    /// consumed.
    pub async fn list_instances(&self, compartment_id: &str) -> Result<Vec<Instance>> {
        let path = format!("/{}?compartmentId={}", api::INSTANCES, compartment_id);
        self.fetch_all_pages(&path, &format!("instances in compartment '{}'", compartment_id))
            .await
    }

    /// Fetch one instance by OCID
    pub async fn get_instance(&self, instance_id: &str) -> Result<Instance> {
        let url = format!("{}/{}/{}", self.endpoint(), api::INSTANCES, instance_id);
        debug!("Fetching instance from: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("instance '{}'", instance_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_client;
    use crate::api::ServiceKind;
    use crate::error::OciError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub fn instance_json(id: &str, name: &str, state: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "displayName": name,
            "shape": "VM.Standard.E4.Flex",
            "lifecycleState": state
        })
    }

    #[tokio::test]
    async fn test_list_instances_success() {
        let mock_server = MockServer::start().await;
        let client = test_client(ServiceKind::Compute, &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/instances"))
            .and(query_param("compartmentId", "c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                instance_json("i1", "web-1", "RUNNING"),
                instance_json("i2", "db-1", "STOPPED")
            ])))
            .mount(&mock_server)
            .await;

        let instances = client.list_instances("c1").await.unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].display_name, "web-1");
        assert_eq!(instances[1].lifecycle_state, "STOPPED");
    }

    #[tokio::test]
    async fn test_list_instances_empty_compartment() {
        let mock_server = MockServer::start().await;
        let client = test_client(ServiceKind::Compute, &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/instances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let instances = client.list_instances("c-empty").await.unwrap();
        assert!(instances.is_empty());
    }

    #[tokio::test]
    async fn test_get_instance_success() {
        let mock_server = MockServer::start().await;
        let client = test_client(ServiceKind::Compute, &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/instances/ocid1.instance.oc1..i1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(instance_json("ocid1.instance.oc1..i1", "app-1", "RUNNING")),
            )
            .mount(&mock_server)
            .await;

        let instance = client.get_instance("ocid1.instance.oc1..i1").await.unwrap();
        assert_eq!(instance.display_name, "app-1");
        assert_eq!(instance.shape, "VM.Standard.E4.Flex");
    }

    #[tokio::test]
    async fn test_get_instance_error() {
        let mock_server = MockServer::start().await;
        let client = test_client(ServiceKind::Compute, &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/instances/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client.get_instance("gone").await;
        assert!(matches!(result, Err(OciError::Api { status: 404, .. })));
    }

    #[test]
    fn test_running_status_mapping() {
        let mut instance: Instance =
            serde_json::from_value(instance_json("i1", "n", "RUNNING")).unwrap();
        assert_eq!(instance.running_status(), "Running");

        instance.lifecycle_state = "STOPPED".to_string();
        assert_eq!(instance.running_status(), "Not Running");

        instance.lifecycle_state = "STARTING".to_string();
        assert_eq!(instance.running_status(), "Not Running");
    }

    #[test]
    fn test_display_status_mapping() {
        let mut instance: Instance =
            serde_json::from_value(instance_json("i1", "n", "RUNNING")).unwrap();
        assert_eq!(instance.display_status(), "Running");

        instance.lifecycle_state = "STARTING".to_string();
        assert_eq!(instance.display_status(), "Starting");

        instance.lifecycle_state = "STOPPING".to_string();
        assert_eq!(instance.display_status(), "Stopping");

        instance.lifecycle_state = "TERMINATED".to_string();
        assert_eq!(instance.display_status(), "Not Running");
    }
}
