//! Job descriptor fields read or written by the label registry.
//!
//! The registry itself only reads `details.whole_node`. Backends read the owner
//! and account and write `mcs_label`.

/// Whole-node sharing mode requested by a job.
///
/// Only [`WholeNode::Mcs`] carries meaning for label select resolution; the
/// other values are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WholeNode {
    /// Nodes may be shared (no whole-node request).
    #[default]
    Shared,
    /// Whole nodes required.
    Required,
    /// Nodes shared only with jobs of the same user.
    User,
    /// Nodes shared only with jobs carrying the same MCS label.
    Mcs,
}

#[derive(Debug, Clone, Default)]
pub struct JobDetails {
    pub whole_node: WholeNode,
}

#[derive(Debug, Clone, Default)]
pub struct JobRecord {
    pub job_id: u32,
    pub user_id: u32,
    pub account: Option<String>,
    pub details: Option<JobDetails>,
    /// Label assigned by the active backend.
    pub mcs_label: Option<String>,
}

impl JobRecord {
    pub fn new(job_id: u32, user_id: u32) -> Self {
        Self {
            job_id,
            user_id,
            ..Self::default()
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_whole_node(mut self, whole_node: WholeNode) -> Self {
        self.details = Some(JobDetails { whole_node });
        self
    }

    /// Sharing mode, if the job carries details at all.
    pub fn whole_node(&self) -> Option<WholeNode> {
        self.details.as_ref().map(|d| d.whole_node)
    }

    /// True when the job asked for MCS-exclusive node sharing.
    pub fn wants_mcs_nodes(&self) -> bool {
        self.whole_node() == Some(WholeNode::Mcs)
    }
}
