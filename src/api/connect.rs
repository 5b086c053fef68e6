//! Connectivity check against the tenancy root

use log::{error, info};

use crate::auth::AuthContext;
use crate::error::{OciError, Result};

use super::ApiClient;

/// Verify the auth context is usable by fetching the tenancy's root
/// compartment through the identity client.
///
/// Returns `Ok(true)` or an error, never `Ok(false)`. This is an optional
/// fail-fast gate: the single-listing flow invokes it before bulk work, the
/// parallel flows deliberately skip it.
pub async fn verify_connectivity(identity: &ApiClient, ctx: &AuthContext) -> Result<bool> {
    let tenancy_id = ctx.tenancy_id();
    if tenancy_id.is_empty() {
        let err = OciError::Connectivity(
            "Tenancy ID not found in configuration or signer".to_string(),
        );
        error!("{}", err);
        return Err(err);
    }

    match identity.get_compartment(tenancy_id).await {
        Ok(compartment) => {
            info!("Connected to OCI, root compartment: {}", compartment.name);
            Ok(true)
        }
        Err(err) => {
            error!("Failed to connect to OCI: {}", err);
            Err(OciError::Connectivity(err.to_string()))
        }
    }
}
