//! Registry config loader (strict parsing) and configuration sources.

pub mod schema;
pub mod source;

use std::fs;

use mcsreg_core::error::{McsError, Result};

pub use schema::{DirectorySection, McsSection, RegistryConfig, UserEntry};
pub use source::{ConfigSource, FileConfig, SharedConfig};

pub fn load_from_file(path: &str) -> Result<RegistryConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| McsError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RegistryConfig> {
    let cfg: RegistryConfig = serde_yaml::from_str(s)
        .map_err(|e| McsError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
