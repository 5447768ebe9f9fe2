//! The user's current filter selection.
//!
//! A [`Focus`] names the severity buckets and workflows currently shown.
//! It is owned by the presentation layer and always replaced wholesale,
//! never patched in place, so one recomputation sees a consistent
//! selection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::severity::Bucket;
use crate::workflow::{UNORGANIZED, WorkflowMapping};

/// Currently-visible severity buckets and workflow names.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Focus {
    /// Visible coarse severity buckets
    pub severities: HashSet<Bucket>,
    /// Visible workflow names, [`UNORGANIZED`] included when selected
    pub workflows: HashSet<String>,
}

impl Focus {
    /// Everything visible: all three buckets, plus every workflow the
    /// mapping mentions and the [`UNORGANIZED`] sentinel.
    ///
    /// With no mapping configured the workflow set is just the sentinel;
    /// the aggregators ignore it in that case anyway.
    pub fn all(mapping: Option<&WorkflowMapping>) -> Self {
        let workflows = match mapping {
            Some(mapping) => mapping.workflow_names().into_iter().collect(),
            None => HashSet::from([UNORGANIZED.to_string()]),
        };
        Self {
            severities: Bucket::ALL.into_iter().collect(),
            workflows,
        }
    }

    /// True when the bucket is currently shown.
    pub fn shows_bucket(&self, bucket: Bucket) -> bool {
        self.severities.contains(&bucket)
    }

    /// True when the workflow name is currently shown.
    pub fn shows_workflow(&self, name: &str) -> bool {
        self.workflows.contains(name)
    }
}
