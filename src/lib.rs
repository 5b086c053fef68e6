//! ocictl - Explore OCI compute instances across a tenancy
//!
//! A CLI tool to list, sweep, and search OCI compute instances.
//!
//! # Features
//!
//! - List instances in a single compartment
//! - Sweep every compartment of the tenancy in parallel
//! - Search the tenancy for running instances and resolve their details
//! - Interactive terminal table view with manual refresh
//! - Instance-principal authentication with config-file fallback
//! - Multiple output formats (table, CSV, JSON)
//! - Automatic pagination handling
//!
//! # Example
//!
//! ```bash
//! # List instances in one compartment
//! ocictl list -c ocid1.compartment.oc1..aaa
//!
//! # Sweep the whole tenancy with 8 workers
//! ocictl sweep -m 8
//!
//! # Find all running instances
//! ocictl search
//!
//! # Browse a compartment interactively
//! ocictl view -c ocid1.compartment.oc1..aaa -b black
//!
//! # Output as JSON
//! ocictl sweep -o json
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod collector;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod tui;
pub mod ui;

pub use api::{verify_connectivity, ApiClient, Compartment, Instance, ResourceSummary, ServiceKind};
pub use auth::{resolve, AuthContext, InstanceIdentity, MetadataProbe, ProfileConfig};
pub use cli::{Cli, Command, ListArgs, OutputFormat, SearchArgs, SweepArgs, ViewArgs};
pub use collector::{collect, CompartmentInstances, InstanceDetail};
pub use error::{OciError, Result};
pub use output::{output_listing, output_search, output_sweep};
