use std::sync::Arc;

use mcsreg_core::{JobRecord, McsParams, Result};

use super::{BackendResolver, LabelContext, McsBackend};

/// Exclusive owner of the loaded backend. Lives inside the registry state.
pub struct BackendHandle {
    name: String,
    backend: Arc<dyn McsBackend>,
}

impl BackendHandle {
    pub fn load(resolver: &BackendResolver, name: &str, params: &McsParams) -> Result<Self> {
        let backend = resolver.resolve(name, params)?;
        tracing::debug!(plugin = %name, backend = backend.name(), "mcs backend loaded");
        Ok(Self {
            name: name.to_string(),
            backend: Arc::from(backend),
        })
    }

    /// Tear the backend down. Failures are logged, never returned.
    pub fn unload(self) {
        if let Err(e) = self.backend.fini() {
            tracing::warn!(plugin = %self.name, error = %e, "mcs backend unload failed");
        } else {
            tracing::debug!(plugin = %self.name, "mcs backend unloaded");
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Detach a call-scoped reference usable after the registry lock is released.
    pub fn lease(&self, ctx: LabelContext) -> BackendLease {
        BackendLease {
            backend: Arc::clone(&self.backend),
            ctx,
        }
    }
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendHandle")
            .field("name", &self.name)
            .field("backend", &self.backend.name())
            .finish()
    }
}

/// Backend plus the settings it was leased with.
pub struct BackendLease {
    backend: Arc<dyn McsBackend>,
    ctx: LabelContext,
}

impl BackendLease {
    pub fn assign_label(&self, job: &mut JobRecord, label: Option<&str>) -> Result<()> {
        self.backend.set_label(&self.ctx, job, label)
    }

    pub fn check_label(&self, user_id: u32, label: Option<&str>) -> Result<()> {
        self.backend.check_label(&self.ctx, user_id, label)
    }
}
