//! MCS label registry: one loaded backend, its parsed settings, and the
//! init/fini/reconfig lifecycle around them.
//!
//! All state lives behind a single mutex:
//! - transitions (`init`, `fini`, `reconfig`, `reset_settings`) run entirely
//!   under it, including the backend load, so concurrent first callers block
//!   and then observe `Ready` (one load only);
//! - readers take it briefly and copy what they need;
//! - dispatch leases the backend together with a settings snapshot under the
//!   lock, then calls the backend with the lock released.
//!
//! A poisoned lock is recovered instead of propagating the panic.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use mcsreg_core::{EnforcementSettings, JobRecord, McsError, McsParams, Result};

use crate::backend::{BackendHandle, BackendLease, BackendResolver, LabelContext};
use crate::config::ConfigSource;

/// Lifecycle phase. `Initializing`, `Reconfiguring` and `Finalizing` only
/// exist while the state lock is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Uninitialized,
    Initializing,
    Ready,
    Reconfiguring,
    Finalizing,
}

#[derive(Debug)]
struct RegistryState {
    phase: Phase,
    backend: Option<BackendHandle>,
    settings: EnforcementSettings,
    params: McsParams,
}

impl RegistryState {
    fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            backend: None,
            settings: EnforcementSettings::default(),
            params: McsParams::default(),
        }
    }

    fn is_ready(&self) -> bool {
        self.phase == Phase::Ready && self.backend.is_some()
    }

    fn is_clear(&self) -> bool {
        self.phase == Phase::Uninitialized
            && self.backend.is_none()
            && self.params == McsParams::default()
            && self.settings == EnforcementSettings::default()
    }

    fn context(&self) -> LabelContext {
        LabelContext {
            settings: self.settings,
            specific_params: self.params.specific.clone(),
        }
    }
}

/// Consistent view of the registry, read in one critical section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStatus {
    pub phase: Phase,
    pub plugin: Option<String>,
    pub settings: EnforcementSettings,
    pub parameters: Option<String>,
    pub specific_params: Option<String>,
}

pub struct McsRegistry {
    source: Arc<dyn ConfigSource>,
    resolver: Arc<BackendResolver>,
    state: Mutex<RegistryState>,
}

impl McsRegistry {
    pub fn new(source: Arc<dyn ConfigSource>, resolver: Arc<BackendResolver>) -> Self {
        Self {
            source,
            resolver,
            state: Mutex::new(RegistryState::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the configured backend unless already `Ready`.
    ///
    /// On failure the registry stays `Uninitialized` and the next call retries.
    pub fn init(&self) -> Result<()> {
        let mut st = self.lock();
        self.init_locked(&mut st)
    }

    /// Unload the backend and clear all derived state. Never fails.
    pub fn fini(&self) {
        let mut st = self.lock();
        Self::fini_locked(&mut st);
    }

    /// `fini` followed by `init` without releasing the lock in between.
    pub fn reconfig(&self) -> Result<()> {
        let mut st = self.lock();
        st.phase = Phase::Reconfiguring;
        tracing::debug!("mcs reconfig");
        Self::fini_locked(&mut st);
        self.init_locked(&mut st)
    }

    /// Force the flags back to defaults; backend and params are untouched.
    pub fn reset_settings(&self) {
        self.lock().settings = EnforcementSettings::default();
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub fn is_ready(&self) -> bool {
        self.lock().is_ready()
    }

    pub fn settings(&self) -> EnforcementSettings {
        self.lock().settings
    }

    pub fn enforced(&self) -> bool {
        self.lock().settings.enforced
    }

    pub fn private_data(&self) -> bool {
        self.lock().settings.private_data
    }

    /// Text after the first `:` of the parameter string, verbatim.
    pub fn specific_params(&self) -> Option<String> {
        self.lock().params.specific.clone()
    }

    pub fn plugin_name(&self) -> Option<String> {
        self.lock().backend.as_ref().map(|b| b.name().to_string())
    }

    /// Whether `job` gets MCS-exclusive node selection.
    pub fn select_for(&self, job: &JobRecord) -> bool {
        self.settings().select_for(job.whole_node())
    }

    pub fn status(&self) -> RegistryStatus {
        let st = self.lock();
        RegistryStatus {
            phase: st.phase,
            plugin: st.backend.as_ref().map(|b| b.name().to_string()),
            settings: st.settings,
            parameters: st.params.raw.clone(),
            specific_params: st.params.specific.clone(),
        }
    }

    /// Initialize if needed and take the backend with a matching settings snapshot.
    fn lease(&self) -> Result<BackendLease> {
        let mut st = self.lock();
        self.init_locked(&mut st)?;
        let ctx = st.context();
        match st.backend.as_ref() {
            Some(backend) => Ok(backend.lease(ctx)),
            None => Err(McsError::Internal("ready without backend".into())),
        }
    }

    /// Assign (or validate) the label of `job` through the active backend.
    pub fn assign_label(&self, job: &mut JobRecord, label: Option<&str>) -> Result<()> {
        let lease = self.lease()?;
        lease.assign_label(job, label)
    }

    /// Check that `user_id` may use `label` through the active backend.
    pub fn check_label(&self, user_id: u32, label: Option<&str>) -> Result<()> {
        let lease = self.lease()?;
        lease.check_label(user_id, label)
    }

    fn init_locked(&self, st: &mut RegistryState) -> Result<()> {
        if st.is_ready() {
            return Ok(());
        }

        st.phase = Phase::Initializing;

        let section = match self.source.fetch() {
            Ok(section) => section,
            Err(e) => {
                st.params = McsParams::default();
                st.settings = EnforcementSettings::default();
                st.phase = Phase::Uninitialized;
                tracing::error!(error = %e, "mcs config unavailable");
                return Err(e);
            }
        };

        st.params = McsParams::split(section.parameters.as_deref());
        st.settings = st.params.settings();

        match BackendHandle::load(&self.resolver, &section.plugin, &st.params) {
            Ok(handle) => {
                st.backend = Some(handle);
                st.phase = Phase::Ready;
                tracing::info!(
                    plugin = %section.plugin,
                    enforced = st.settings.enforced,
                    select = ?st.settings.select,
                    private_data = st.settings.private_data,
                    "mcs initialized"
                );
                Ok(())
            }
            Err(e) => {
                st.phase = Phase::Uninitialized;
                tracing::error!(plugin = %section.plugin, error = %e, "cannot create mcs context");
                Err(e)
            }
        }
    }

    fn fini_locked(st: &mut RegistryState) {
        if st.is_clear() {
            return;
        }

        st.phase = Phase::Finalizing;
        if let Some(handle) = st.backend.take() {
            handle.unload();
        }
        st.params = McsParams::default();
        st.settings = EnforcementSettings::default();
        st.phase = Phase::Uninitialized;
        tracing::debug!("mcs finalized");
    }
}

impl std::fmt::Debug for McsRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McsRegistry")
            .field("status", &self.status())
            .finish()
    }
}
