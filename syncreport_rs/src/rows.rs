//! Display row shapes produced by the aggregators.
//!
//! A view is an ordered sequence of [`ReportRow`]s: either a group with
//! child rows or a flat leaf. The two shapes are a tagged variant rather
//! than one struct callers probe for a sub-row list, and they serialize
//! with an explicit tag so the rendering layer can consume them as JSON.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One flattened audit record, carrying everything the renderer needs to
/// display the issue and to recover the original record on drill-in.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueRow {
    /// Identifier of the originating file, when the record carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    /// Resolved display name of the originating file
    pub file_name: String,
    /// Fine-grained severity level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    /// Grouping category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Issue type within the category
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One output row: a named group of child rows, or a flat leaf.
///
/// Groups keep first-seen order; the `category` of a group is the category
/// name in the problems view and the workflow name in the workflow view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "row", rename_all = "snake_case")]
pub enum ReportRow {
    /// Parent row with child issue rows
    Group {
        /// Grouping key shown on the parent row
        category: String,
        /// Child rows, in surviving-record order
        #[serde(rename = "subRows")]
        sub_rows: Vec<IssueRow>,
    },
    /// Ungrouped top-level issue row
    Leaf {
        /// The issue itself
        issue: IssueRow,
    },
}

impl ReportRow {
    /// The leaf records in this row's subtree.
    pub fn leaves(&self) -> impl Iterator<Item = &IssueRow> {
        match self {
            ReportRow::Group { sub_rows, .. } => {
                Box::new(sub_rows.iter()) as Box<dyn Iterator<Item = &IssueRow>>
            }
            ReportRow::Leaf { issue } => Box::new(std::iter::once(issue)),
        }
    }

    /// Number of leaf records in this row's subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            ReportRow::Group { sub_rows, .. } => sub_rows.len(),
            ReportRow::Leaf { .. } => 1,
        }
    }
}

/// Total leaf records across a whole view.
pub fn total_leaves(rows: &[ReportRow]) -> usize {
    rows.iter().map(ReportRow::leaf_count).sum()
}
