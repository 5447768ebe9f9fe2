//! Flattening of per-file audit records into display rows.

use tracing::trace;

use crate::focus::Focus;
use crate::rows::IssueRow;
use crate::types::{FileNameIndex, FileRecord};
use crate::workflow::WorkflowMapping;

/// Flatten every file's audit records into single rows carrying the
/// originating file identifier and its resolved display name.
///
/// Nothing is filtered here: a record with no level, category, or type
/// still produces a row. Rows keep the pipeline's emission order.
pub fn flatten_records(file_records: &[FileRecord], names: &FileNameIndex) -> Vec<IssueRow> {
    let rows: Vec<IssueRow> = file_records
        .iter()
        .flat_map(|record| {
            record.audit_records.iter().map(|entry| {
                let info = &entry.audit_info;
                IssueRow {
                    file_id: record.file.identifier.clone(),
                    file_name: names
                        .resolve(record.file.identifier.as_deref(), info.file_name.as_deref()),
                    level: info.level,
                    category: info.category.clone(),
                    kind: info.kind.clone(),
                    message: info.message.clone(),
                }
            })
        })
        .collect();
    trace!(files = file_records.len(), rows = rows.len(), "flattened audit records");
    rows
}

/// Whether a row survives the workflow focus filter.
///
/// Visible when at least one resolved workflow (or the sentinel) is in the
/// focused set. Callers skip this check entirely when no mapping is
/// configured.
pub(crate) fn workflow_visible(mapping: &WorkflowMapping, focus: &Focus, row: &IssueRow) -> bool {
    mapping
        .resolve(row.category.as_deref(), row.kind.as_deref())
        .names()
        .any(|name| focus.shows_workflow(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuditInfo, AuditRecord, FileRef, SourceFile, SourceFilesInfo};

    fn record(identifier: Option<&str>, infos: Vec<AuditInfo>) -> FileRecord {
        FileRecord {
            file: FileRef {
                identifier: identifier.map(String::from),
            },
            audit_records: infos
                .into_iter()
                .map(|audit_info| AuditRecord {
                    audit_info,
                    element_ref: None,
                })
                .collect(),
        }
    }

    #[test]
    fn flatten_attaches_resolved_file_names() {
        let info = SourceFilesInfo {
            master: SourceFile {
                file_id: Some("f1".into()),
                file_name: Some("plant.twin".into()),
                ..Default::default()
            },
            files: vec![],
        };
        let names = FileNameIndex::new(&info);
        let records = vec![
            record(
                Some("f1"),
                vec![AuditInfo {
                    message: Some("a".into()),
                    ..Default::default()
                }],
            ),
            record(
                Some("ghost"),
                vec![AuditInfo {
                    message: Some("b".into()),
                    file_name: Some("embedded.rvt".into()),
                    ..Default::default()
                }],
            ),
        ];

        let rows = flatten_records(&records, &names);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].file_name, "plant.twin");
        assert_eq!(rows[1].file_name, "embedded.rvt");
        assert_eq!(rows[1].file_id.as_deref(), Some("ghost"));
    }

    #[test]
    fn flatten_keeps_records_with_no_fields() {
        let names = FileNameIndex::default();
        let rows = flatten_records(&[record(None, vec![AuditInfo::default()])], &names);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].file_name, "unknown");
        assert!(rows[0].level.is_none());
    }
}
