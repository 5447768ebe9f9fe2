//! Report data types describing one synchronization run.
//!
//! These types mirror the JSON artifact produced by the ingestion pipeline.
//! They're designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - View layers can share data without borrowing issues
//! - **Default-able** - Build partial fixtures with `..Default::default()`
//!
//! Field names follow the artifact's camelCase wire format. Every field the
//! pipeline may omit is optional: the aggregation core degrades gracefully
//! instead of rejecting a partially-populated report.
//!
//! # Example
//!
//! ```rust
//! use syncreport::types::{ReportData, SourceFile, SourceFilesInfo};
//!
//! let data = ReportData {
//!     source_files: SourceFilesInfo {
//!         master: SourceFile {
//!             file_id: Some("root-1".into()),
//!             file_name: Some("plant.twin".into()),
//!             state: Some("Processed".into()),
//!             ..Default::default()
//!         },
//!         files: vec![],
//!     },
//!     ..Default::default()
//! };
//! assert_eq!(data.source_files.master.file_name.as_deref(), Some("plant.twin"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One physical input file attempted by the ingestion pipeline.
///
/// `state` is a free-form string; `"Processed"` is the canonical success
/// value and anything else (including an absent state) means the file
/// failed or went missing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    /// Stable file identifier assigned by the pipeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    /// Display name shown to the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Source path the file was loaded from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Whether the source file was found on disk
    #[serde(default)]
    pub file_exists: bool,
    /// Whether the derived BIM file was produced
    #[serde(default)]
    pub bim_file_exists: bool,
    /// Processing state, canonically `"Processed"` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Human-readable failure reason, when processing failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl SourceFile {
    /// Canonical success value for [`SourceFile::state`].
    pub const STATE_PROCESSED: &'static str = "Processed";

    /// True when this file's state is exactly `"Processed"`.
    ///
    /// A missing state counts as failed: the pipeline writes the state for
    /// every file it completed.
    pub fn is_processed(&self) -> bool {
        self.state.as_deref() == Some(Self::STATE_PROCESSED)
    }
}

/// The master file plus the referenced sub-files of one run.
///
/// The master file's own identity fields live at this level on the wire,
/// alongside the `Files` list of referenced sub-files. `#[serde(flatten)]`
/// reproduces that shape while keeping one `SourceFile` type for both.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceFilesInfo {
    /// The root/master file of the run
    #[serde(flatten)]
    pub master: SourceFile,
    /// Referenced sub-files, in pipeline order
    #[serde(rename = "Files", default)]
    pub files: Vec<SourceFile>,
}

impl SourceFilesInfo {
    /// All attempted files: the master first, then the sub-files.
    pub fn all_files(&self) -> impl Iterator<Item = &SourceFile> {
        std::iter::once(&self.master).chain(self.files.iter())
    }
}

/// One issue detected during ingestion.
///
/// Produced upstream and never mutated by the view layer. `category` is the
/// coarse grouping key (e.g. `"MissingData"`), `kind` the finer-grained
/// issue type within it (serialized as `"type"` on the wire).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditInfo {
    /// Severity level; absent levels classify as informational
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    /// Grouping category, e.g. `"MissingData"` or `"VisualFidelity"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Issue type within the category, e.g. `"Material"`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// File name embedded directly in the record, used as a resolution
    /// fallback when the owning file identifier is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// One audit entry: an [`AuditInfo`] plus an element reference the current
/// views don't consume but the artifact carries.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    /// The issue itself
    #[serde(default)]
    pub audit_info: AuditInfo,
    /// Reference to the model element the issue points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_ref: Option<String>,
}

/// Identifier of the file a group of audit records belongs to.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FileRef {
    /// File identifier, resolvable against [`SourceFilesInfo`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// All audit records reported against one file.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// The file these records belong to
    #[serde(default)]
    pub file: FileRef,
    /// Audit records in pipeline order
    #[serde(default)]
    pub audit_records: Vec<AuditRecord>,
}

/// Job/run metadata attached to a report.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportDataContext {
    /// Ingestion job identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Target twin model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// Run timestamp as written by the pipeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Root aggregate for one synchronization report.
///
/// Created once when a report is loaded and read-only afterwards; the
/// aggregators never mutate it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    /// Job/run metadata
    #[serde(default)]
    pub context: ReportDataContext,
    /// Master file and referenced sub-files
    #[serde(default)]
    pub source_files: SourceFilesInfo,
    /// Audit records grouped per file
    #[serde(default)]
    pub file_records: Vec<FileRecord>,
}

/// Display name shown when a file identifier resolves to nothing.
pub const UNKNOWN_FILE: &str = "unknown";

/// File-id to display-name resolution table for one [`ReportData`].
///
/// Built once per report from [`SourceFilesInfo`] (master file included),
/// so resolution is stable: the same identifier always yields the same
/// name for a given report.
///
/// # Example
///
/// ```rust
/// use syncreport::types::{FileNameIndex, SourceFile, SourceFilesInfo};
///
/// let info = SourceFilesInfo {
///     master: SourceFile {
///         file_id: Some("root-1".into()),
///         file_name: Some("plant.twin".into()),
///         ..Default::default()
///     },
///     files: vec![],
/// };
/// let index = FileNameIndex::new(&info);
/// assert_eq!(index.resolve(Some("root-1"), None), "plant.twin");
/// assert_eq!(index.resolve(Some("nope"), Some("fallback.rvt")), "fallback.rvt");
/// assert_eq!(index.resolve(None, None), "unknown");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FileNameIndex {
    names: HashMap<String, String>,
}

impl FileNameIndex {
    /// Build the index from a report's file listing.
    pub fn new(info: &SourceFilesInfo) -> Self {
        let mut names = HashMap::new();
        for file in info.all_files() {
            if let (Some(id), Some(name)) = (&file.file_id, &file.file_name) {
                names.insert(id.clone(), name.clone());
            }
        }
        Self { names }
    }

    /// Resolve an identifier to a display name.
    ///
    /// Falls back to the record's embedded file name when the identifier is
    /// absent or unlisted, and to [`UNKNOWN_FILE`] after that. Never fails.
    pub fn resolve(&self, identifier: Option<&str>, embedded_name: Option<&str>) -> String {
        identifier
            .and_then(|id| self.names.get(id))
            .map(String::as_str)
            .or(embedded_name)
            .unwrap_or(UNKNOWN_FILE)
            .to_string()
    }
}
