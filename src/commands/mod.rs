//! Command handlers, one per inventory flow

pub mod list;
pub mod search;
pub mod sweep;
pub mod view;

use crate::auth::AuthContext;
use crate::error::{OciError, Result};

/// Reject unusable compartment ids before any credential or network work.
/// Non-empty is the whole contract; content is left to the service.
pub fn validate_compartment_id(compartment_id: &str) -> Result<()> {
    if compartment_id.is_empty() {
        return Err(OciError::Validation(
            "Invalid compartment ID provided".to_string(),
        ));
    }
    Ok(())
}

/// Tenancy id the parallel flows dispatch under; missing is fatal
pub fn ensure_tenancy_id(ctx: &AuthContext) -> Result<String> {
    let tenancy_id = ctx.tenancy_id();
    if tenancy_id.is_empty() {
        return Err(OciError::Connectivity(
            "Tenancy ID not found in configuration or signer".to_string(),
        ));
    }
    Ok(tenancy_id.to_string())
}
