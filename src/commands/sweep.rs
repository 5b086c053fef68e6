//! Tenancy-wide parallel instance sweep

use log::{info, warn};

use crate::api::{ApiClient, ServiceKind};
use crate::auth;
use crate::cli::SweepArgs;
use crate::collector::{collect, CompartmentInstances};
use crate::error::Result;
use crate::output::output_sweep;
use crate::ui::{create_spinner, finish_spinner};

use super::ensure_tenancy_id;

/// Sweep every compartment of the tenancy for instance names.
///
/// The compartment list itself must succeed; from there the sweep is lenient:
/// a compartment whose listing fails still yields a row with an empty name
/// list rather than disappearing from the report.
pub async fn run(args: &SweepArgs, profile: &str) -> Result<()> {
    let ctx = auth::resolve(profile).await?;
    let tenancy_id = ensure_tenancy_id(&ctx)?;

    let identity = ApiClient::new(ServiceKind::Identity, &ctx)?;
    let compute = ApiClient::new(ServiceKind::Compute, &ctx)?;

    let spinner = create_spinner("Listing compartments...", args.output);
    let compartments = identity.list_compartments(&tenancy_id).await?;
    info!("Found {} compartments", compartments.len());

    if let Some(s) = &spinner {
        s.set_message(format!(
            "Listing instances across {} compartments...",
            compartments.len()
        ));
    }

    let units: Vec<String> = compartments.into_iter().map(|c| c.id).collect();
    let results = sweep_compartments(&compute, units, args.max_workers).await;

    finish_spinner(spinner, "Done");
    output_sweep(&results, args.output);
    Ok(())
}

/// Fan the per-compartment listings out across the worker pool.
///
/// Always yields exactly one record per compartment: a listing failure is
/// logged and coerced to an empty name list.
async fn sweep_compartments(
    compute: &ApiClient,
    units: Vec<String>,
    max_workers: usize,
) -> Vec<CompartmentInstances> {
    collect(units, max_workers, |compartment_id| async move {
        let instance_names = match compute.list_instances(&compartment_id).await {
            Ok(instances) => instances.into_iter().map(|i| i.display_name).collect(),
            Err(err) => {
                warn!(
                    "Error listing instances in compartment {}: {}",
                    compartment_id, err
                );
                Vec::new()
            }
        };
        Ok(CompartmentInstances {
            compartment_id,
            instance_names,
        })
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_sweep_one_record_per_compartment_despite_failures() {
        let mock_server = MockServer::start().await;
        let compute = test_client(ServiceKind::Compute, &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/instances"))
            .and(query_param("compartmentId", "c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "i1", "displayName": "i1", "shape": "s", "lifecycleState": "RUNNING"},
                {"id": "i2", "displayName": "i2", "shape": "s", "lifecycleState": "STOPPED"}
            ])))
            .mount(&mock_server)
            .await;
        // c2 fails; its record must still appear, with no names
        Mock::given(method("GET"))
            .and(path("/instances"))
            .and(query_param("compartmentId", "c2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let units = vec!["c1".to_string(), "c2".to_string()];
        let mut results = sweep_compartments(&compute, units, 4).await;
        results.sort_by(|a, b| a.compartment_id.cmp(&b.compartment_id));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].compartment_id, "c1");
        assert_eq!(results[0].instance_names, vec!["i1", "i2"]);
        assert_eq!(results[1].compartment_id, "c2");
        assert!(results[1].instance_names.is_empty());
    }

    #[tokio::test]
    async fn test_sweep_no_compartments() {
        let mock_server = MockServer::start().await;
        let compute = test_client(ServiceKind::Compute, &mock_server.uri());

        let results = sweep_compartments(&compute, vec![], 4).await;
        assert!(results.is_empty());
    }
}
