//! Banner summary counts.
//!
//! Always computed over the full, unfiltered report - the banner stays
//! the same whatever the user's current focus is.

use serde::{Deserialize, Serialize};

use crate::severity::Bucket;
use crate::types::{FileRecord, ReportData, ReportDataContext, SourceFile, SourceFilesInfo};

/// Per-bucket issue counts across the whole report.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueCounts {
    /// Records in the `Error` bucket
    pub error_count: usize,
    /// Records in the `Warning` bucket
    pub warning_count: usize,
    /// Records in the `Info` bucket
    pub info_count: usize,
    /// All records, whatever the bucket
    pub issues_count: usize,
}

/// Processed/failed file counts across the whole report.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileCounts {
    /// All attempted files, master included
    pub total_file_count: usize,
    /// Files whose state is not exactly `"Processed"`
    pub failed_file_count: usize,
}

/// The banner's full payload: issue counts, file counts, and the run
/// metadata they belong to.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Job/run metadata of the summarized report
    pub context: ReportDataContext,
    /// Per-bucket issue counts
    pub issues: IssueCounts,
    /// Processed/failed file counts
    pub files: FileCounts,
}

/// Count every audit record into its bucket, unfiltered.
pub fn count_issues(file_records: &[FileRecord]) -> IssueCounts {
    let mut counts = IssueCounts::default();
    for record in file_records {
        for entry in &record.audit_records {
            match Bucket::classify(entry.audit_info.level) {
                Bucket::Error => counts.error_count += 1,
                Bucket::Warning => counts.warning_count += 1,
                Bucket::Info => counts.info_count += 1,
            }
            counts.issues_count += 1;
        }
    }
    counts
}

/// Count attempted and failed files, master included.
///
/// A file failed when its state is anything other than `"Processed"`;
/// missing, failed, and unknown states all count the same way.
pub fn count_files(info: &SourceFilesInfo) -> FileCounts {
    let mut counts = FileCounts::default();
    for file in info.all_files() {
        counts.total_file_count += 1;
        if !file.is_processed() {
            counts.failed_file_count += 1;
        }
    }
    counts
}

/// The files that failed processing, master included, in listing order.
pub fn failed_files(info: &SourceFilesInfo) -> Vec<&SourceFile> {
    info.all_files().filter(|f| !f.is_processed()).collect()
}

/// Full banner summary for a report.
pub fn summarize(data: &ReportData) -> ReportSummary {
    ReportSummary {
        context: data.context.clone(),
        issues: count_issues(&data.file_records),
        files: count_files(&data.source_files),
    }
}
