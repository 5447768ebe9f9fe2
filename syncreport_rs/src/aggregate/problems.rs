//! Category-grouped "Problems" view.

use std::collections::HashMap;

use tracing::debug;

use crate::aggregate::flatten::{flatten_records, workflow_visible};
use crate::focus::Focus;
use crate::rows::ReportRow;
use crate::severity::Bucket;
use crate::types::{FileNameIndex, FileRecord};
use crate::workflow::WorkflowMapping;

/// Build the problems view: flatten, filter by focused workflows and
/// severity buckets, then group surviving rows by category.
///
/// Rows sharing a non-empty category become children of one group row, in
/// first-seen category order; rows with no category stay top-level leaves
/// interleaved at the position they first appear. Every surviving record
/// lands in exactly one row's subtree.
///
/// Workflow filtering only applies when a mapping is configured; without
/// one, every record is visible regardless of the workflow focus.
pub fn problems_view(
    file_records: &[FileRecord],
    names: &FileNameIndex,
    mapping: Option<&WorkflowMapping>,
    focus: &Focus,
) -> Vec<ReportRow> {
    let flat = flatten_records(file_records, names);
    let total = flat.len();

    let surviving = flat.into_iter().filter(|row| {
        let workflow_ok = match mapping {
            Some(mapping) => workflow_visible(mapping, focus, row),
            None => true,
        };
        workflow_ok && focus.shows_bucket(Bucket::classify(row.level))
    });

    let mut rows: Vec<ReportRow> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    for row in surviving {
        match row.category.as_deref() {
            Some(category) if !category.is_empty() => {
                let idx = *group_index.entry(category.to_string()).or_insert_with(|| {
                    rows.push(ReportRow::Group {
                        category: category.to_string(),
                        sub_rows: Vec::new(),
                    });
                    rows.len() - 1
                });
                if let ReportRow::Group { sub_rows, .. } = &mut rows[idx] {
                    sub_rows.push(row);
                }
            }
            _ => rows.push(ReportRow::Leaf { issue: row }),
        }
    }

    debug!(
        total,
        groups = group_index.len(),
        rows = rows.len(),
        "built problems view"
    );
    rows
}
