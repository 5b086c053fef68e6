/// Configuration constants for the OCI control-plane API
pub mod api {
    /// API version path segment shared by the services used here
    pub const API_VERSION: &str = "20160918";

    /// Compartments endpoint (identity service)
    pub const COMPARTMENTS: &str = "compartments";

    /// Instances endpoint (compute service)
    pub const INSTANCES: &str = "instances";

    /// Resource search endpoint (search service)
    pub const SEARCH_RESOURCES: &str = "resources";

    /// Default page size for paginated list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Structured search query for running compute instances, tenancy-wide
    pub const RUNNING_INSTANCES_QUERY: &str =
        "query instance resources where lifeCycleState = 'RUNNING'";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to the OCI configuration file (relative to HOME)
    pub const FILE_PATH: &str = ".oci/config";

    /// Environment marker that enables the instance-principal path.
    /// Only presence is checked, the value is ignored.
    pub const INSTANCE_PRINCIPAL_ENV_VAR: &str = "OCI_RESOURCE_PRINCIPAL_VERSION";

    /// Fields a profile section must carry to be structurally valid
    pub const REQUIRED_PROFILE_FIELDS: &[&str] =
        &["tenancy", "user", "fingerprint", "key_file", "region"];
}

/// Instance metadata service (only reachable from inside OCI compute)
pub mod imds {
    /// Base URL of the metadata service
    pub const BASE_URL: &str = "http://169.254.169.254/opc/v2";

    /// Authorization header value the metadata service expects
    pub const AUTH_HEADER: &str = "Bearer Oracle";

    /// Probe timeout in seconds; the service answers in milliseconds when
    /// present and not at all when absent
    pub const TIMEOUT_SECS: u64 = 3;
}

/// Default values for CLI
pub mod defaults {
    /// Default configuration profile name
    pub const PROFILE: &str = "DEFAULT";

    /// Default worker-pool size for the parallel flows
    pub const MAX_WORKERS: usize = 4;

    /// Default TUI background color
    pub const BG_COLOR: &str = "white";
}
