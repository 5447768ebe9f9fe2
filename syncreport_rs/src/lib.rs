//! # syncreport
//!
//! Aggregation core for digital-twin synchronization reports.
//!
//! The ingestion pipeline writes one JSON artifact per run: the files it
//! attempted, a flat list of audit records per file, and job metadata.
//! This crate reshapes that artifact into the grouped, filtered, sorted
//! view models a report UI renders - the category-grouped problems table,
//! the workflow-grouped table, and the banner counts. It is a pure
//! in-process library: no fetching, no persistence, no rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use syncreport::controller::ReportController;
//! use syncreport::types::ReportData;
//!
//! // Deserialize the pipeline's artifact (loading is the caller's job)
//! let data: ReportData = serde_json::from_str("{}").unwrap();
//!
//! // One controller owns the report and the current focus
//! let controller = ReportController::builder()
//!     .report_data(data)
//!     .build()
//!     .expect("report data supplied");
//!
//! // Grouped rows for the tables, counts for the banner
//! let problems = controller.problems();
//! let summary = controller.summary();
//! assert!(problems.is_empty());
//! assert_eq!(summary.issues.issues_count, 0);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Report data model mirroring the pipeline artifact
//! - [`severity`] - Level-to-bucket classification and the severity order
//! - [`workflow`] - Workflow mapping and resolution
//! - [`focus`] - The user's current filter selection
//! - [`rows`] - Display row shapes the aggregators produce
//! - [`aggregate`] - The pure view-building pipeline
//! - [`controller`] - Top-level owner tying data, mapping, and focus together
//! - [`events`] - Injected fire-and-forget notification hooks
//! - [`error`] - The one loud configuration error
//!
//! Every aggregation is a pure function of its inputs, recomputed on
//! demand; the data tree is never mutated after load.

#![doc(html_root_url = "https://docs.rs/syncreport/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aggregate;
pub mod controller;
pub mod error;
pub mod events;
pub mod focus;
pub mod rows;
pub mod severity;
pub mod types;
pub mod workflow;

pub use aggregate::{
    FileCounts, IssueCounts, ReportSummary, count_files, count_issues, failed_files,
    flatten_records, problems_view, summarize, workflow_view,
};
pub use controller::{ReportController, ReportControllerBuilder};
pub use error::ConfigError;
pub use events::{EventSink, NoopSink};
pub use focus::Focus;
pub use rows::{IssueRow, ReportRow, total_leaves};
pub use severity::{Bucket, Severity, sort_by_severity};
pub use types::ReportData;
pub use workflow::{UNORGANIZED, WorkflowAssignment, WorkflowMapping};
