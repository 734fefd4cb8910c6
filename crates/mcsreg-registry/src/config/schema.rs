use std::collections::HashSet;

use serde::Deserialize;
use mcsreg_core::error::{McsError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    pub version: u32,

    #[serde(default)]
    pub mcs: McsSection,

    #[serde(default)]
    pub directory: DirectorySection,
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(McsError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.mcs.validate()?;
        self.directory.validate()?;

        Ok(())
    }
}

/// Which backend to load and the raw `common[:specific]` parameter string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct McsSection {
    #[serde(default = "default_plugin")]
    pub plugin: String,

    #[serde(default)]
    pub parameters: Option<String>,
}

impl Default for McsSection {
    fn default() -> Self {
        Self {
            plugin: default_plugin(),
            parameters: None,
        }
    }
}

impl McsSection {
    pub fn new(plugin: impl Into<String>, parameters: Option<&str>) -> Self {
        Self {
            plugin: plugin.into(),
            parameters: parameters.map(str::to_string),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.plugin.trim().is_empty() {
            return Err(McsError::Config("mcs.plugin must not be empty".into()));
        }
        Ok(())
    }
}

fn default_plugin() -> String {
    "mcs/none".into()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorySection {
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

impl DirectorySection {
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for u in &self.users {
            if u.name.trim().is_empty() {
                return Err(McsError::Config(format!(
                    "directory.users[uid={}].name must not be empty",
                    u.uid
                )));
            }
            if !seen.insert(u.uid) {
                return Err(McsError::Config(format!(
                    "directory.users has duplicate uid {}",
                    u.uid
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    pub uid: u32,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub accounts: Vec<String>,
}
