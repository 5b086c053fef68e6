//! Profile-based credentials from the OCI configuration file
//!
//! The file is a sequence of `[PROFILE]` sections holding `key = value`
//! credential fields, read-only to this tool. No pack crate covers this
//! format, so the section parser lives here.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::credentials;
use crate::error::{OciError, Result};

/// Validated credential fields of one profile section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    pub profile: String,
    pub tenancy: String,
    pub user: String,
    pub fingerprint: String,
    pub key_file: String,
    pub region: String,
}

impl ProfileConfig {
    /// Load and structurally validate the named profile from `path`.
    ///
    /// A missing file is `ConfigNotFound`; a missing section or missing
    /// required field is `InvalidConfig` naming the profile and path.
    pub fn load(path: &Path, profile: &str) -> Result<Self> {
        if !path.exists() {
            return Err(OciError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| OciError::InvalidConfig {
            profile: profile.to_string(),
            path: path.to_path_buf(),
            reason: format!("could not read file: {}", e),
        })?;

        let sections = parse_sections(&content);
        let fields = sections.get(profile).ok_or_else(|| OciError::InvalidConfig {
            profile: profile.to_string(),
            path: path.to_path_buf(),
            reason: format!("profile section '[{}]' not found", profile),
        })?;

        Self::from_fields(profile, path, fields)
    }

    /// Build a validated config from raw section fields
    fn from_fields(
        profile: &str,
        path: &Path,
        fields: &HashMap<String, String>,
    ) -> Result<Self> {
        let missing: Vec<&str> = credentials::REQUIRED_PROFILE_FIELDS
            .iter()
            .copied()
            .filter(|f| fields.get(*f).map(|v| v.is_empty()).unwrap_or(true))
            .collect();

        if !missing.is_empty() {
            return Err(OciError::InvalidConfig {
                profile: profile.to_string(),
                path: path.to_path_buf(),
                reason: format!("missing required field(s): {}", missing.join(", ")),
            });
        }

        debug!("Loaded profile '{}' from {}", profile, path.display());
        Ok(Self {
            profile: profile.to_string(),
            tenancy: fields["tenancy"].clone(),
            user: fields["user"].clone(),
            fingerprint: fields["fingerprint"].clone(),
            key_file: fields["key_file"].clone(),
            region: fields["region"].clone(),
        })
    }
}

/// Well-known per-user path of the OCI configuration file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
}

/// Parse `[SECTION]` / `key = value` content into per-section field maps.
/// Blank lines and `#`/`;` comment lines are skipped; unknown keys are kept
/// so extra fields never invalidate a profile.
fn parse_sections(content: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }
        if let (Some(section), Some((key, value))) = (&current, line.split_once('=')) {
            if let Some(fields) = sections.get_mut(section) {
                fields.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }

    sections
}
