//! Library error types.
//!
//! Missing report *content* never errors - the aggregators degrade field
//! by field. The only error the crate produces marks a wiring mistake in
//! the embedding application, which should fail loudly instead of
//! rendering an empty report.

use thiserror::Error;

/// A controller was assembled without the inputs it depends on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// [`crate::controller::ReportControllerBuilder::build`] was called
    /// before any report data was supplied.
    #[error("report controller built without report data; call report_data() before build()")]
    MissingReportData,
}
