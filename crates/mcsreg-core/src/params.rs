//! MCS parameter string parsing.
//!
//! The configured parameter string has the shape `common[:specific]`. Only the
//! first colon is significant: the common part is scanned for flag tokens, the
//! specific part is kept verbatim for the active backend.
//!
//! Token matching is plain case-sensitive substring search, so overlapping
//! tokens are checked in a fixed order (`noselect` before `ondemandselect`
//! before `select`). Unknown tokens are ignored; there is no error path.

use serde::{Deserialize, Serialize};

pub const TOKEN_ENFORCED: &str = "enforced";
pub const TOKEN_NOSELECT: &str = "noselect";
pub const TOKEN_ONDEMANDSELECT: &str = "ondemandselect";
pub const TOKEN_SELECT: &str = "select";
pub const TOKEN_PRIVATEDATA: &str = "privatedata";

/// Node-sharing select behavior for labeled jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    /// Select only when the job itself asks for MCS node sharing.
    #[default]
    OnDemand,
    /// Always select.
    Required,
    /// Never select.
    Disabled,
}

/// Flags parsed from the common part of the parameter string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnforcementSettings {
    pub enforced: bool,
    pub select: SelectMode,
    pub private_data: bool,
}

impl EnforcementSettings {
    /// Parse all three axes from the common parameter part.
    pub fn parse(common: Option<&str>) -> Self {
        Self {
            enforced: parse_enforced(common),
            select: parse_select(common),
            private_data: parse_private_data(common),
        }
    }

    /// Resolve select behavior for a job with the given whole-node mode.
    pub fn select_for(&self, whole_node: Option<crate::WholeNode>) -> bool {
        match self.select {
            SelectMode::Required => true,
            SelectMode::OnDemand => whole_node == Some(crate::WholeNode::Mcs),
            SelectMode::Disabled => false,
        }
    }
}

pub fn parse_enforced(params: Option<&str>) -> bool {
    match params {
        Some(p) if p.contains(TOKEN_ENFORCED) => true,
        _ => {
            tracing::info!(params = ?params, "mcs: no enforced token, ondemand set");
            false
        }
    }
}

pub fn parse_select(params: Option<&str>) -> SelectMode {
    let Some(p) = params else {
        return SelectMode::OnDemand;
    };

    if p.contains(TOKEN_NOSELECT) {
        SelectMode::Disabled
    } else if p.contains(TOKEN_ONDEMANDSELECT) {
        SelectMode::OnDemand
    } else if p.contains(TOKEN_SELECT) {
        SelectMode::Required
    } else {
        tracing::info!(params = %p, "mcs: no select token, ondemandselect set");
        SelectMode::OnDemand
    }
}

pub fn parse_private_data(params: Option<&str>) -> bool {
    params.is_some_and(|p| p.contains(TOKEN_PRIVATEDATA))
}

/// Raw parameter string split into its common and specific parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McsParams {
    pub raw: Option<String>,
    pub common: Option<String>,
    pub specific: Option<String>,
}

impl McsParams {
    pub fn split(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            tracing::info!("mcs: no parameters, default values set");
            return Self::default();
        };

        let (common, specific) = match raw.split_once(':') {
            Some((common, rest)) => {
                let specific = (!rest.is_empty()).then(|| rest.to_string());
                (common.to_string(), specific)
            }
            None => (raw.to_string(), None),
        };

        Self {
            raw: Some(raw.to_string()),
            common: Some(common),
            specific,
        }
    }

    /// Settings derived from the common part.
    pub fn settings(&self) -> EnforcementSettings {
        EnforcementSettings::parse(self.common.as_deref())
    }
}
