//! Severity levels, coarse display buckets, and the sort order between them.
//!
//! The pipeline emits five fine-grained levels; the report UI only ever
//! shows three coarse buckets. This module is the single home of that
//! mapping - the problems view, the workflow view, and the banner counts
//! all classify through [`Bucket::classify`].

use serde::{Deserialize, Serialize};

use crate::rows::IssueRow;

/// Fine-grained audit level as written by the ingestion pipeline.
///
/// `Unknown` captures any unrecognized wire value so a malformed artifact
/// still deserializes; it classifies as informational and sorts last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Ingestion aborted for the affected file
    Fatal,
    /// Data lost or unusable
    Error,
    /// Severe degradation, ingestion continued
    Critical,
    /// Degradation the user should review
    Warning,
    /// Informational note
    Info,
    /// Unrecognized level value
    #[serde(other)]
    Unknown,
}

/// Coarse severity bucket used by banners and top-level filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// `Fatal` and `Error` levels
    Error,
    /// `Critical` and `Warning` levels
    Warning,
    /// Everything else, including absent or unrecognized levels
    Info,
}

impl Bucket {
    /// Map a fine-grained level to its display bucket.
    ///
    /// Total: every input, including `None`, lands in exactly one bucket.
    ///
    /// ```rust
    /// use syncreport::severity::{Bucket, Severity};
    ///
    /// assert_eq!(Bucket::classify(Some(Severity::Fatal)), Bucket::Error);
    /// assert_eq!(Bucket::classify(Some(Severity::Critical)), Bucket::Warning);
    /// assert_eq!(Bucket::classify(None), Bucket::Info);
    /// ```
    pub fn classify(level: Option<Severity>) -> Bucket {
        match level {
            Some(Severity::Fatal) | Some(Severity::Error) => Bucket::Error,
            Some(Severity::Critical) | Some(Severity::Warning) => Bucket::Warning,
            _ => Bucket::Info,
        }
    }

    /// All three buckets, most severe first.
    pub const ALL: [Bucket; 3] = [Bucket::Error, Bucket::Warning, Bucket::Info];
}

/// Sort rank of a level, most severe first.
///
/// `Fatal` ranks 0; an absent or unrecognized level ranks after every
/// known level.
pub fn rank(level: Option<Severity>) -> u8 {
    match level {
        Some(Severity::Fatal) => 0,
        Some(Severity::Error) => 1,
        Some(Severity::Critical) => 2,
        Some(Severity::Warning) => 3,
        Some(Severity::Info) => 4,
        Some(Severity::Unknown) | None => 5,
    }
}

/// Stable sort of issue rows by severity, most severe first.
///
/// Rows with equal rank keep their original relative order, so a sorted
/// view preserves the pipeline's emission order within each level.
pub fn sort_by_severity(rows: &mut [IssueRow]) {
    rows.sort_by_key(|row| rank(row.level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_total_over_known_and_bogus_levels() {
        assert_eq!(Bucket::classify(Some(Severity::Fatal)), Bucket::Error);
        assert_eq!(Bucket::classify(Some(Severity::Error)), Bucket::Error);
        assert_eq!(Bucket::classify(Some(Severity::Critical)), Bucket::Warning);
        assert_eq!(Bucket::classify(Some(Severity::Warning)), Bucket::Warning);
        assert_eq!(Bucket::classify(Some(Severity::Info)), Bucket::Info);
        assert_eq!(Bucket::classify(Some(Severity::Unknown)), Bucket::Info);
        assert_eq!(Bucket::classify(None), Bucket::Info);
    }

    #[test]
    fn bogus_wire_level_deserializes_as_unknown() {
        let level: Severity = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(level, Severity::Unknown);
    }

    #[test]
    fn severity_sort_orders_most_severe_first() {
        let mut rows = vec![
            IssueRow {
                level: Some(Severity::Info),
                message: Some("info".into()),
                ..Default::default()
            },
            IssueRow {
                level: Some(Severity::Fatal),
                message: Some("fatal".into()),
                ..Default::default()
            },
            IssueRow {
                level: Some(Severity::Warning),
                message: Some("warning".into()),
                ..Default::default()
            },
        ];
        sort_by_severity(&mut rows);
        let order: Vec<_> = rows.iter().map(|r| r.level.unwrap()).collect();
        assert_eq!(order, vec![Severity::Fatal, Severity::Warning, Severity::Info]);
    }

    #[test]
    fn severity_sort_is_stable_for_equal_levels() {
        let mut rows = vec![
            IssueRow {
                level: Some(Severity::Error),
                message: Some("first".into()),
                ..Default::default()
            },
            IssueRow {
                level: Some(Severity::Fatal),
                message: Some("fatal".into()),
                ..Default::default()
            },
            IssueRow {
                level: Some(Severity::Error),
                message: Some("second".into()),
                ..Default::default()
            },
        ];
        sort_by_severity(&mut rows);
        assert_eq!(rows[1].message.as_deref(), Some("first"));
        assert_eq!(rows[2].message.as_deref(), Some("second"));
    }

    #[test]
    fn unknown_level_ranks_after_all_known_levels() {
        assert!(rank(Some(Severity::Unknown)) > rank(Some(Severity::Info)));
        assert_eq!(rank(None), rank(Some(Severity::Unknown)));
    }
}
