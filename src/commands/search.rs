//! Tenancy-wide search for running instances

use std::fmt;

use log::{debug, info, warn};

use crate::api::{ApiClient, ResourceSummary, ServiceKind};
use crate::auth;
use crate::cli::SearchArgs;
use crate::collector::{collect, InstanceDetail};
use crate::error::Result;
use crate::output::output_search;
use crate::ui::{create_spinner, finish_spinner};

use super::ensure_tenancy_id;

/// One search hit to resolve into a full record
struct SearchUnit {
    identifier: String,
    compartment_id: String,
}

impl fmt::Display for SearchUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

impl From<ResourceSummary> for SearchUnit {
    fn from(resource: ResourceSummary) -> Self {
        Self {
            identifier: resource.identifier,
            compartment_id: resource.compartment_id,
        }
    }
}

/// Search the tenancy for running instances and resolve each hit into its
/// compartment name, display name, and shape.
///
/// The search call itself must succeed; per-hit resolution never loses a
/// record. A lookup that fails contributes the `Unknown` sentinel for the
/// fields it could not resolve.
pub async fn run(args: &SearchArgs, profile: &str) -> Result<()> {
    let ctx = auth::resolve(profile).await?;
    let tenancy_id = ensure_tenancy_id(&ctx)?;
    debug!("Searching tenancy {}", tenancy_id);

    let identity = ApiClient::new(ServiceKind::Identity, &ctx)?;
    let compute = ApiClient::new(ServiceKind::Compute, &ctx)?;
    let search = ApiClient::new(ServiceKind::Search, &ctx)?;

    let spinner = create_spinner("Searching for running instances...", args.output);
    let resources = search.search_running_instances().await?;
    info!("Resolving {} search hits", resources.len());

    if let Some(s) = &spinner {
        s.set_message(format!("Resolving {} instances...", resources.len()));
    }

    let units: Vec<SearchUnit> = resources.into_iter().map(SearchUnit::from).collect();
    let results = search_instances(&identity, &compute, units, args.max_workers).await;

    finish_spinner(spinner, "Done");
    output_search(&results, args.output);
    Ok(())
}

/// Fan the per-hit resolutions out across the worker pool.
///
/// Every unit produces a record: `resolve_unit` degrades to sentinels
/// internally and the fetch future itself never returns `Err`, so the
/// dispatch layer has nothing to drop.
async fn search_instances(
    identity: &ApiClient,
    compute: &ApiClient,
    units: Vec<SearchUnit>,
    max_workers: usize,
) -> Vec<InstanceDetail> {
    collect(units, max_workers, |unit| async move {
        Ok(resolve_unit(identity, compute, unit).await)
    })
    .await
}

/// Resolve one search hit, degrading instead of failing.
///
/// An instance lookup failure yields the full `Unknown` sentinel and skips
/// the compartment lookup; a compartment lookup failure keeps the instance
/// details and falls back to the raw compartment OCID, which still groups
/// the row correctly.
async fn resolve_unit(
    identity: &ApiClient,
    compute: &ApiClient,
    unit: SearchUnit,
) -> InstanceDetail {
    let instance = match compute.get_instance(&unit.identifier).await {
        Ok(instance) => instance,
        Err(err) => {
            warn!("Error fetching instance {}: {}", unit.identifier, err);
            return InstanceDetail::unknown(&unit.compartment_id);
        }
    };

    let compartment = match identity.get_compartment(&unit.compartment_id).await {
        Ok(compartment) => compartment.name,
        Err(err) => {
            warn!(
                "Error fetching compartment {}: {}",
                unit.compartment_id, err
            );
            unit.compartment_id.clone()
        }
    };

    InstanceDetail {
        compartment,
        display_name: instance.display_name,
        shape: instance.shape,
    }
}
