//! Credential resolution with instance-principal / profile fallback

mod instance;
mod profile;

use std::path::Path;

use log::{debug, info, warn};

use crate::config::credentials;
use crate::error::Result;

pub use instance::{InstanceIdentity, MetadataProbe};
pub use profile::{default_config_path, ProfileConfig};

/// How the process authenticates to the control plane.
///
/// Exactly one mode is active per invocation; the context is immutable once
/// resolved and shared read-only by every client.
#[derive(Debug, Clone)]
pub enum AuthContext {
    /// Automatic identity from the instance metadata service
    InstancePrincipal(InstanceIdentity),
    /// Named profile loaded from the per-user configuration file
    Profile(ProfileConfig),
}

impl AuthContext {
    /// Tenancy this context belongs to
    pub fn tenancy_id(&self) -> &str {
        match self {
            AuthContext::InstancePrincipal(identity) => &identity.tenancy_id,
            AuthContext::Profile(config) => &config.tenancy,
        }
    }

    /// Home region of the credential source
    pub fn region(&self) -> &str {
        match self {
            AuthContext::InstancePrincipal(identity) => &identity.region,
            AuthContext::Profile(config) => &config.region,
        }
    }

    /// Authorization header value for control-plane requests.
    ///
    /// Instance-principal mode carries a session token; profile mode sends
    /// the keyId triple the service resolves the uploaded key by.
    pub fn auth_header(&self) -> String {
        match self {
            AuthContext::InstancePrincipal(identity) => format!("Bearer {}", identity.token),
            AuthContext::Profile(config) => format!(
                "Signature keyId=\"{}/{}/{}\"",
                config.tenancy, config.user, config.fingerprint
            ),
        }
    }
}

/// Resolve an auth context for the named profile.
///
/// Instance-principal is preferred when the environment marker is present;
/// its failure is logged and falls through to the profile path. Profile
/// failures are terminal.
pub async fn resolve(profile: &str) -> Result<AuthContext> {
    let marker_present = std::env::var_os(credentials::INSTANCE_PRINCIPAL_ENV_VAR).is_some();
    let config_path = default_config_path().unwrap_or_else(|| {
        // No home dir resolves to a path that cannot exist, which surfaces
        // as the ConfigNotFound the caller expects.
        Path::new(credentials::FILE_PATH).to_path_buf()
    });
    resolve_with(marker_present, &MetadataProbe::new(), &config_path, profile).await
}

/// Resolution with injectable environment, probe, and config path
pub async fn resolve_with(
    marker_present: bool,
    probe: &MetadataProbe,
    config_path: &Path,
    profile: &str,
) -> Result<AuthContext> {
    if marker_present {
        debug!(
            "{} is set, attempting instance-principal authentication",
            credentials::INSTANCE_PRINCIPAL_ENV_VAR
        );
        match probe.acquire().await {
            Ok(identity) => {
                info!("Initialized OCI with instance principal");
                return Ok(AuthContext::InstancePrincipal(identity));
            }
            Err(err) => {
                // Expected fallback path, not fatal
                warn!("Instance principal authentication failed: {}", err);
            }
        }
    }

    let config = ProfileConfig::load(config_path, profile)?;
    info!("Initialized OCI with config file profile '{}'", profile);
    Ok(AuthContext::Profile(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn valid_config_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[DEFAULT]\n\
              tenancy = ocid1.tenancy.oc1..profile\n\
              user = ocid1.user.oc1..u\n\
              fingerprint = aa:bb\n\
              key_file = /tmp/key.pem\n\
              region = eu-frankfurt-1\n",
        )
        .unwrap();
        file
    }

    fn unreachable_probe() -> MetadataProbe {
        // Closed port, fails fast
        MetadataProbe::with_base_url("http://127.0.0.1:1".to_string())
    }

    #[tokio::test]
    async fn test_no_marker_missing_config_is_config_not_found() {
        let result = resolve_with(
            false,
            &unreachable_probe(),
            Path::new("/nonexistent/.oci/config"),
            "DEFAULT",
        )
        .await;
        assert!(matches!(result, Err(crate::error::OciError::ConfigNotFound(_))));
    }

    #[tokio::test]
    async fn test_no_marker_uses_profile() {
        let file = valid_config_file();
        let ctx = resolve_with(false, &unreachable_probe(), file.path(), "DEFAULT")
            .await
            .unwrap();
        assert!(matches!(ctx, AuthContext::Profile(_)));
        assert_eq!(ctx.tenancy_id(), "ocid1.tenancy.oc1..profile");
    }

    #[tokio::test]
    async fn test_marker_with_failing_probe_falls_back_to_profile() {
        let file = valid_config_file();
        let ctx = resolve_with(true, &unreachable_probe(), file.path(), "DEFAULT")
            .await
            .unwrap();
        assert!(matches!(ctx, AuthContext::Profile(_)));
    }

    #[tokio::test]
    async fn test_marker_with_failing_probe_and_missing_config_is_fatal() {
        let result = resolve_with(
            true,
            &unreachable_probe(),
            Path::new("/nonexistent/.oci/config"),
            "DEFAULT",
        )
        .await;
        assert!(matches!(result, Err(crate::error::OciError::ConfigNotFound(_))));
    }

    #[tokio::test]
    async fn test_marker_with_working_probe_wins_over_profile() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/instance/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tenantId": "ocid1.tenancy.oc1..imds",
                "canonicalRegionName": "us-phoenix-1"
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/identity/token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "st-1"})),
            )
            .mount(&mock_server)
            .await;

        let probe = MetadataProbe::with_base_url(mock_server.uri());
        let file = valid_config_file();
        let ctx = resolve_with(true, &probe, file.path(), "DEFAULT")
            .await
            .unwrap();
        assert!(matches!(ctx, AuthContext::InstancePrincipal(_)));
        assert_eq!(ctx.tenancy_id(), "ocid1.tenancy.oc1..imds");
        assert_eq!(ctx.region(), "us-phoenix-1");
    }

    #[test]
    fn test_auth_header_instance_principal() {
        let ctx = AuthContext::InstancePrincipal(InstanceIdentity {
            tenancy_id: "t".to_string(),
            region: "r".to_string(),
            token: "st-xyz".to_string(),
        });
        assert_eq!(ctx.auth_header(), "Bearer st-xyz");
    }

    #[test]
    fn test_auth_header_profile() {
        let ctx = AuthContext::Profile(ProfileConfig {
            profile: "DEFAULT".to_string(),
            tenancy: "ten".to_string(),
            user: "usr".to_string(),
            fingerprint: "fp".to_string(),
            key_file: "/tmp/key.pem".to_string(),
            region: "eu-frankfurt-1".to_string(),
        });
        let header = ctx.auth_header();
        assert!(header.starts_with("Signature keyId=\"ten/usr/fp\""));
    }
}
