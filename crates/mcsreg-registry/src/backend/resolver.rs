use std::sync::Arc;

use dashmap::DashMap;

use mcsreg_core::error::{McsError, Result};
use mcsreg_core::McsParams;

use crate::backends;
use crate::directory::IdentityDirectory;

use super::McsBackend;

/// Prefix of fully qualified backend names (`mcs/user`).
pub const PLUGIN_PREFIX: &str = "mcs/";

/// Inputs handed to a backend constructor.
#[derive(Debug)]
pub struct BackendInit<'a> {
    pub name: &'a str,
    pub params: &'a McsParams,
}

pub type BackendFactory = Arc<dyn Fn(&BackendInit<'_>) -> Result<Box<dyn McsBackend>> + Send + Sync>;

/// Name -> constructor table used to load backends.
#[derive(Default)]
pub struct BackendResolver {
    factories: DashMap<String, BackendFactory>,
}

impl BackendResolver {
    pub fn new() -> Self {
        Self {
            factories: DashMap::new(),
        }
    }

    /// Resolver preloaded with `none`, `user`, `group`, and `account`.
    pub fn with_builtins(directory: Arc<dyn IdentityDirectory>) -> Self {
        let r = Self::new();
        backends::register_builtins(&r, directory);
        r
    }

    /// Register (or replace) a backend under `name`. `mcs/` is optional.
    pub fn register(&self, name: &str, factory: BackendFactory) {
        let key = short_name(name).to_string();
        if self.factories.insert(key.clone(), factory).is_some() {
            tracing::warn!(plugin = %key, "mcs backend factory replaced");
        }
    }

    pub fn register_fn<F>(&self, name: &str, f: F)
    where
        F: Fn(&BackendInit<'_>) -> Result<Box<dyn McsBackend>> + Send + Sync + 'static,
    {
        self.register(name, Arc::new(f));
    }

    pub fn registered(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn resolve(&self, name: &str, params: &McsParams) -> Result<Box<dyn McsBackend>> {
        let factory = self
            .factories
            .get(short_name(name))
            .ok_or_else(|| McsError::load(name, "unknown plugin"))?
            .value()
            .clone();

        factory(&BackendInit { name, params })
    }
}

fn short_name(name: &str) -> &str {
    let name = name.trim();
    name.strip_prefix(PLUGIN_PREFIX).unwrap_or(name)
}
