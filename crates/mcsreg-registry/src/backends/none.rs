use mcsreg_core::{JobRecord, Result};

use crate::backend::{LabelContext, McsBackend};

/// Never labels jobs and accepts every check.
#[derive(Debug, Default)]
pub struct NoneBackend;

impl McsBackend for NoneBackend {
    fn name(&self) -> &'static str {
        "none"
    }

    fn set_label(&self, _ctx: &LabelContext, job: &mut JobRecord, _label: Option<&str>) -> Result<()> {
        job.mcs_label = None;
        Ok(())
    }

    fn check_label(&self, _ctx: &LabelContext, _user_id: u32, _label: Option<&str>) -> Result<()> {
        Ok(())
    }
}
