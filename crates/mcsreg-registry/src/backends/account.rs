use std::sync::Arc;

use mcsreg_core::error::{McsError, Result};
use mcsreg_core::JobRecord;

use crate::backend::{LabelContext, McsBackend};
use crate::directory::IdentityDirectory;

/// Labels jobs with their account; checks require an association with it.
pub struct AccountBackend {
    directory: Arc<dyn IdentityDirectory>,
}

impl AccountBackend {
    pub fn new(directory: Arc<dyn IdentityDirectory>) -> Self {
        Self { directory }
    }
}

impl McsBackend for AccountBackend {
    fn name(&self) -> &'static str {
        "account"
    }

    fn set_label(&self, ctx: &LabelContext, job: &mut JobRecord, label: Option<&str>) -> Result<()> {
        job.mcs_label = None;

        match label {
            Some(label) => {
                if job.account.as_deref() != Some(label) {
                    return Err(McsError::LabelRejected(format!(
                        "label {label} is not the job account"
                    )));
                }
                job.mcs_label = Some(label.to_string());
            }
            None if ctx.label_required(job) => {
                let account = job.account.clone().ok_or_else(|| {
                    McsError::LabelRejected(format!("job {} has no account", job.job_id))
                })?;
                job.mcs_label = Some(account);
            }
            None => {}
        }
        Ok(())
    }

    fn check_label(&self, _ctx: &LabelContext, user_id: u32, label: Option<&str>) -> Result<()> {
        let Some(label) = label else {
            return Ok(());
        };
        if self.directory.accounts_of(user_id).iter().any(|a| a == label) {
            Ok(())
        } else {
            Err(McsError::LabelRejected(format!(
                "uid {user_id} has no association with account {label}"
            )))
        }
    }
}
