//! Backend capability contract and the handle owning one loaded backend.
//!
//! Re-exports the resolver so registry code can depend on this module directly.

pub mod handle;
pub mod resolver;

use mcsreg_core::{EnforcementSettings, JobRecord, Result};

pub use handle::{BackendHandle, BackendLease};
pub use resolver::{BackendFactory, BackendInit, BackendResolver};

/// Label assignment and verification policy. One implementation is active at a time.
pub trait McsBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Assign (or validate) the label of `job`, writing `job.mcs_label`.
    fn set_label(&self, ctx: &LabelContext, job: &mut JobRecord, label: Option<&str>) -> Result<()>;

    /// Verify that `user_id` may use `label`.
    fn check_label(&self, ctx: &LabelContext, user_id: u32, label: Option<&str>) -> Result<()>;

    /// Release backend resources on unload.
    fn fini(&self) -> Result<()> {
        Ok(())
    }
}

/// Registry state captured together with the backend for one dispatched call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelContext {
    pub settings: EnforcementSettings,
    pub specific_params: Option<String>,
}

impl LabelContext {
    /// Whether an unlabeled job must receive a label anyway.
    ///
    /// Jobs without details are labeled; otherwise only when enforced or when the
    /// job asked for MCS node sharing.
    pub fn label_required(&self, job: &JobRecord) -> bool {
        if self.settings.enforced {
            return true;
        }
        match job.whole_node() {
            None => true,
            Some(_) => job.wants_mcs_nodes(),
        }
    }
}
