//! Audit configuration loaded from TOML.
//!
//! A config file lists audits as `[[audit]]` tables. Audits named like a
//! built-in replace it; any other name is added after the built-ins.
//!
//! ```toml
//! [[audit]]
//! name = "street"
//! target_key = "addr:street"
//! pattern = "trailing-word"
//! vocabulary = ["Street", "Road", "Avenue"]
//!
//! [audit.corrections]
//! "St." = "Street"
//! "Rd." = "Road"
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::spec::AuditSpec;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default, rename = "audit")]
    audits: Vec<AuditSpec>,
}

/// Ordered set of audits, unique by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    audits: Vec<AuditSpec>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AuditConfig {
    pub fn builtin() -> Self {
        Self {
            audits: AuditSpec::builtin(),
        }
    }

    /// Built-in audits overlaid with the audits defined in a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let overrides = parse(&contents, &path.display().to_string())?;
        debug!(path = %path.display(), audits = overrides.len(), "loaded audit config");
        let mut config = Self::builtin();
        config.merge(overrides);
        Ok(config)
    }

    /// Built-in audits overlaid with audits from an in-memory TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let overrides = parse(contents, "<inline>")?;
        let mut config = Self::builtin();
        config.merge(overrides);
        Ok(config)
    }

    fn merge(&mut self, overrides: Vec<AuditSpec>) {
        for spec in overrides {
            match self.audits.iter_mut().find(|existing| existing.name == spec.name) {
                Some(existing) => *existing = spec,
                None => self.audits.push(spec),
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&AuditSpec> {
        self.audits.iter().find(|spec| spec.name == name)
    }

    /// Like [`AuditConfig::get`], with an error naming the configured audits.
    pub fn require(&self, name: &str) -> Result<&AuditSpec, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::UnknownAudit {
            name: name.to_string(),
            available: self.names().collect::<Vec<_>>().join(", "),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.audits.iter().map(|spec| spec.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuditSpec> {
        self.audits.iter()
    }

    pub fn len(&self) -> usize {
        self.audits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audits.is_empty()
    }
}

fn parse(contents: &str, origin: &str) -> Result<Vec<AuditSpec>, ConfigError> {
    let file: ConfigFile = toml::from_str(contents).map_err(|e| ConfigError::Toml {
        origin: origin.to_string(),
        source: e,
    })?;
    let mut seen = BTreeSet::new();
    for spec in &file.audits {
        if !seen.insert(spec.name.as_str()) {
            return Err(ConfigError::DuplicateAudit {
                name: spec.name.clone(),
            });
        }
        if spec.target_key.trim().is_empty() {
            return Err(ConfigError::EmptyTargetKey {
                name: spec.name.clone(),
            });
        }
    }
    Ok(file.audits)
}
