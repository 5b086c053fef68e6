//! Interactive single-compartment table view

use crate::api::{ApiClient, ServiceKind};
use crate::auth;
use crate::cli::ViewArgs;
use crate::error::Result;
use crate::tui;

use super::validate_compartment_id;

/// Open the interactive table view for one compartment
pub async fn run(args: &ViewArgs, profile: &str) -> Result<()> {
    validate_compartment_id(&args.compartment_id)?;
    // Reject bad color names before touching credentials or the terminal
    tui::parse_bg_color(&args.bg_color)?;

    let ctx = auth::resolve(profile).await?;
    let compute = ApiClient::new(ServiceKind::Compute, &ctx)?;

    tui::run(&compute, &args.compartment_id, &args.bg_color).await
}
