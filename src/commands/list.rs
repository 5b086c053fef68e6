//! Single-compartment instance listing

use log::info;

use crate::api::{verify_connectivity, ApiClient, ServiceKind};
use crate::auth;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::output_listing;

use super::validate_compartment_id;

/// List all instances in one compartment, with a connectivity check up front
pub async fn run(args: &ListArgs, profile: &str) -> Result<()> {
    validate_compartment_id(&args.compartment_id)?;

    let ctx = auth::resolve(profile).await?;
    let identity = ApiClient::new(ServiceKind::Identity, &ctx)?;
    let compute = ApiClient::new(ServiceKind::Compute, &ctx)?;

    verify_connectivity(&identity, &ctx).await?;

    let instances = compute.list_instances(&args.compartment_id).await?;
    info!(
        "Found {} instances in compartment {}",
        instances.len(),
        args.compartment_id
    );

    output_listing(&args.compartment_id, &instances, args.output);
    Ok(())
}
