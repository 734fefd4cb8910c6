use std::sync::Arc;

use mcsreg_core::error::{McsError, Result};
use mcsreg_core::JobRecord;

use crate::backend::{LabelContext, McsBackend};
use crate::directory::IdentityDirectory;

/// Labels jobs with one of a configured, ordered list of groups.
///
/// The list comes from the specific parameters as `grp1|grp2|...`. When no
/// label is requested the first listed group the owner belongs to wins.
pub struct GroupBackend {
    directory: Arc<dyn IdentityDirectory>,
    groups: Vec<String>,
}

impl GroupBackend {
    pub fn from_params(directory: Arc<dyn IdentityDirectory>, specific: Option<&str>) -> Result<Self> {
        let raw = specific.ok_or_else(|| McsError::load("mcs/group", "no group list in parameters"))?;

        let mut groups = Vec::new();
        for g in raw.split('|') {
            let g = g.trim();
            if g.is_empty() {
                return Err(McsError::load(
                    "mcs/group",
                    format!("empty group name in {raw:?}"),
                ));
            }
            groups.push(g.to_string());
        }

        Ok(Self { directory, groups })
    }

    fn is_member(&self, uid: u32, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
            && self.directory.groups_of(uid).iter().any(|g| g == group)
    }
}

impl McsBackend for GroupBackend {
    fn name(&self) -> &'static str {
        "group"
    }

    fn set_label(&self, ctx: &LabelContext, job: &mut JobRecord, label: Option<&str>) -> Result<()> {
        job.mcs_label = None;

        match label {
            Some(label) => {
                if !self.is_member(job.user_id, label) {
                    return Err(McsError::LabelRejected(format!(
                        "uid {} may not use group {label}",
                        job.user_id
                    )));
                }
                job.mcs_label = Some(label.to_string());
            }
            None if ctx.label_required(job) => {
                let member_of = self.directory.groups_of(job.user_id);
                let group = self
                    .groups
                    .iter()
                    .find(|g| member_of.contains(g))
                    .ok_or_else(|| {
                        McsError::LabelRejected(format!(
                            "uid {} is in none of the mcs groups",
                            job.user_id
                        ))
                    })?;
                job.mcs_label = Some(group.clone());
            }
            None => {}
        }
        Ok(())
    }

    fn check_label(&self, _ctx: &LabelContext, user_id: u32, label: Option<&str>) -> Result<()> {
        match label {
            None => Ok(()),
            Some(label) if self.is_member(user_id, label) => Ok(()),
            Some(label) => Err(McsError::LabelRejected(format!(
                "uid {user_id} may not use group {label}"
            ))),
        }
    }
}
