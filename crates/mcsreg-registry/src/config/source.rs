//! Where the registry reads its backend name and parameter string from.
//!
//! The registry fetches a fresh [`McsSection`] on every (re)initialization, so
//! a source that changes between calls is picked up by `reconfig`.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use mcsreg_core::error::{McsError, Result};

use super::schema::McsSection;

pub trait ConfigSource: Send + Sync {
    fn fetch(&self) -> Result<McsSection>;
}

/// In-memory source, updated by the embedding process before a reconfig.
#[derive(Debug, Default)]
pub struct SharedConfig {
    inner: RwLock<McsSection>,
}

impl SharedConfig {
    pub fn new(section: McsSection) -> Self {
        Self {
            inner: RwLock::new(section),
        }
    }

    pub fn set(&self, section: McsSection) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = section;
    }

    pub fn get(&self) -> McsSection {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ConfigSource for SharedConfig {
    fn fetch(&self) -> Result<McsSection> {
        let section = self.get();
        section.validate()?;
        Ok(section)
    }
}

/// Re-reads a YAML config file on every fetch.
#[derive(Debug, Clone)]
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileConfig {
    fn fetch(&self) -> Result<McsSection> {
        let path = self
            .path
            .to_str()
            .ok_or_else(|| McsError::Config(format!("non utf-8 path: {}", self.path.display())))?;
        super::load_from_file(path).map(|cfg| cfg.mcs)
    }
}
