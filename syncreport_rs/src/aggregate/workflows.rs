//! Workflow-grouped view.

use std::collections::HashMap;

use tracing::debug;

use crate::aggregate::flatten::flatten_records;
use crate::focus::Focus;
use crate::rows::{IssueRow, ReportRow};
use crate::severity::Bucket;
use crate::types::{FileNameIndex, FileRecord};
use crate::workflow::WorkflowMapping;

/// Build the workflow view: flatten, filter by focused severity buckets,
/// then group rows under every workflow they resolve to.
///
/// This view exists to browse by workflow, so the workflow focus does not
/// filter here - workflow resolution is the grouping key instead. A record
/// belonging to N workflows appears under N different buckets; that
/// duplication is the point of the view, not an error. Records with no
/// mapping entry accumulate under the `Unorganized` bucket.
///
/// With no mapping configured the filtered rows come back flat, ungrouped.
pub fn workflow_view(
    file_records: &[FileRecord],
    names: &FileNameIndex,
    mapping: Option<&WorkflowMapping>,
    focus: &Focus,
) -> Vec<ReportRow> {
    let flat = flatten_records(file_records, names);
    let total = flat.len();

    let surviving: Vec<IssueRow> = flat
        .into_iter()
        .filter(|row| focus.shows_bucket(Bucket::classify(row.level)))
        .collect();

    let Some(mapping) = mapping else {
        debug!(total, rows = surviving.len(), "built workflow view (no mapping, flat)");
        return surviving
            .into_iter()
            .map(|issue| ReportRow::Leaf { issue })
            .collect();
    };

    let mut rows: Vec<ReportRow> = Vec::new();
    let mut bucket_index: HashMap<String, usize> = HashMap::new();
    for row in surviving {
        let assignment = mapping.resolve(row.category.as_deref(), row.kind.as_deref());
        for name in assignment.names() {
            let idx = *bucket_index.entry(name.to_string()).or_insert_with(|| {
                rows.push(ReportRow::Group {
                    category: name.to_string(),
                    sub_rows: Vec::new(),
                });
                rows.len() - 1
            });
            if let ReportRow::Group { sub_rows, .. } = &mut rows[idx] {
                sub_rows.push(row.clone());
            }
        }
    }

    debug!(
        total,
        buckets = bucket_index.len(),
        "built workflow view"
    );
    rows
}
