//! Process-wide registry slot for callers that cannot thread an `Arc` through.

use std::sync::{Arc, OnceLock};

use mcsreg_core::error::{McsError, Result};

use crate::registry::McsRegistry;

static REGISTRY: OnceLock<Arc<McsRegistry>> = OnceLock::new();

/// Install the process registry. Only the first call succeeds.
pub fn install(registry: Arc<McsRegistry>) -> Result<()> {
    REGISTRY
        .set(registry)
        .map_err(|_| McsError::Internal("mcs registry already installed".into()))
}

pub fn registry() -> Option<Arc<McsRegistry>> {
    REGISTRY.get().cloned()
}
