use std::sync::Arc;

use mcsreg_core::error::{McsError, Result};
use mcsreg_core::JobRecord;

use crate::backend::{LabelContext, McsBackend};
use crate::directory::IdentityDirectory;

/// Labels jobs with their owner's user name.
pub struct UserBackend {
    directory: Arc<dyn IdentityDirectory>,
}

impl UserBackend {
    pub fn new(directory: Arc<dyn IdentityDirectory>) -> Self {
        Self { directory }
    }

    fn user(&self, uid: u32) -> Result<String> {
        self.directory
            .user_name(uid)
            .ok_or_else(|| McsError::LabelRejected(format!("unknown uid {uid}")))
    }
}

impl McsBackend for UserBackend {
    fn name(&self) -> &'static str {
        "user"
    }

    fn set_label(&self, ctx: &LabelContext, job: &mut JobRecord, label: Option<&str>) -> Result<()> {
        job.mcs_label = None;

        match label {
            Some(label) => {
                let user = self.user(job.user_id)?;
                if label != user {
                    tracing::debug!(job_id = job.job_id, %label, %user, "mcs/user label mismatch");
                    return Err(McsError::LabelRejected(format!(
                        "label {label} is not the job owner {user}"
                    )));
                }
                job.mcs_label = Some(user);
            }
            None if ctx.label_required(job) => {
                job.mcs_label = Some(self.user(job.user_id)?);
            }
            None => {}
        }
        Ok(())
    }

    fn check_label(&self, _ctx: &LabelContext, user_id: u32, label: Option<&str>) -> Result<()> {
        let Some(label) = label else {
            return Ok(());
        };
        if self.user(user_id)? == label {
            Ok(())
        } else {
            Err(McsError::LabelRejected(format!(
                "uid {user_id} may not use label {label}"
            )))
        }
    }
}
