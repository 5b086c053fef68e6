//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::defaults;

/// OCI compute-instance inventory CLI
#[derive(Parser, Debug)]
#[command(name = "ocictl")]
#[command(version)]
#[command(about = "List and search OCI compute instances", long_about = None)]
pub struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// OCI configuration profile name
    #[arg(short, long, global = true, default_value = defaults::PROFILE)]
    pub profile: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, one per inventory flow
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List compute instances in one compartment
    List(ListArgs),
    /// Browse one compartment's instances in an interactive table
    View(ViewArgs),
    /// List instances across all compartments of the tenancy in parallel
    Sweep(SweepArgs),
    /// Search the tenancy for running instances and resolve their details
    Search(SearchArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Compartment OCID to list compute instances
    #[arg(short, long)]
    pub compartment_id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct ViewArgs {
    /// Compartment OCID to list compute instances
    #[arg(short, long)]
    pub compartment_id: String,

    /// Background color for the table view
    #[arg(short, long, default_value = defaults::BG_COLOR)]
    pub bg_color: String,
}

#[derive(clap::Args, Debug)]
pub struct SweepArgs {
    /// Maximum number of concurrent compartment fetches
    #[arg(short, long, default_value_t = defaults::MAX_WORKERS)]
    pub max_workers: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Maximum number of concurrent instance resolutions
    #[arg(short, long, default_value_t = defaults::MAX_WORKERS)]
    pub max_workers: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_cli_global_defaults() {
        let cli = Cli::parse_from(["ocictl", "list", "-c", "ocid1.compartment.oc1..aaa"]);
        assert!(!cli.verbose);
        assert_eq!(cli.profile, defaults::PROFILE);
    }

    #[test]
    fn test_list_requires_compartment_id() {
        let result = Cli::try_parse_from(["ocictl", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_args() {
        let cli = Cli::parse_from(["ocictl", "list", "-c", "ocid1.compartment.oc1..aaa"]);
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.compartment_id, "ocid1.compartment.oc1..aaa");
                assert_eq!(args.output, OutputFormat::Table);
            }
            _ => panic!("Expected Command::List"),
        }
    }

    #[test]
    fn test_view_args_defaults() {
        let cli = Cli::parse_from(["ocictl", "view", "-c", "ocid1.compartment.oc1..bbb"]);
        match cli.command {
            Command::View(args) => {
                assert_eq!(args.compartment_id, "ocid1.compartment.oc1..bbb");
                assert_eq!(args.bg_color, "white");
            }
            _ => panic!("Expected Command::View"),
        }
    }

    #[test]
    fn test_view_bg_color() {
        let cli = Cli::parse_from(["ocictl", "view", "-c", "c1", "-b", "black"]);
        match cli.command {
            Command::View(args) => assert_eq!(args.bg_color, "black"),
            _ => panic!("Expected Command::View"),
        }
    }

    #[test]
    fn test_sweep_default_workers() {
        let cli = Cli::parse_from(["ocictl", "sweep"]);
        match cli.command {
            Command::Sweep(args) => assert_eq!(args.max_workers, 4),
            _ => panic!("Expected Command::Sweep"),
        }
    }

    #[test]
    fn test_search_custom_workers() {
        let cli = Cli::parse_from(["ocictl", "search", "-m", "8"]);
        match cli.command {
            Command::Search(args) => assert_eq!(args.max_workers, 8),
            _ => panic!("Expected Command::Search"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ocictl", "search", "-v", "-p", "STAGING"]);
        assert!(cli.verbose);
        assert_eq!(cli.profile, "STAGING");
    }

    #[test]
    fn test_output_format_parsing() {
        let cli = Cli::parse_from(["ocictl", "sweep", "-o", "json"]);
        match cli.command {
            Command::Sweep(args) => assert_eq!(args.output, OutputFormat::Json),
            _ => panic!("Expected Command::Sweep"),
        }
    }
}
