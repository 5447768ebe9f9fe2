//! Top-level report controller.
//!
//! One controller owns the loaded [`ReportData`], the optional workflow
//! mapping, and the current [`Focus`], and computes every view from them.
//! Nested UI pieces receive the computed rows as plain values - there is
//! no ambient "current report" context to reach into. The focus is
//! replaced wholesale on user action, so each recomputation sees one
//! consistent selection.

use tracing::debug;

use crate::aggregate::{
    FileCounts, IssueCounts, ReportSummary, count_files, count_issues, problems_view, summarize,
    workflow_view,
};
use crate::error::ConfigError;
use crate::events::{EventSink, NoopSink};
use crate::focus::Focus;
use crate::rows::{IssueRow, ReportRow};
use crate::types::{FileNameIndex, ReportData};
use crate::workflow::WorkflowMapping;

/// Owner of one loaded report and its current focus.
///
/// # Example
///
/// ```rust
/// use syncreport::controller::ReportController;
/// use syncreport::types::ReportData;
///
/// let controller = ReportController::builder()
///     .report_data(ReportData::default())
///     .build()
///     .expect("report data was supplied");
/// assert!(controller.problems().is_empty());
/// ```
pub struct ReportController {
    data: ReportData,
    mapping: Option<WorkflowMapping>,
    focus: Focus,
    names: FileNameIndex,
    sink: Box<dyn EventSink>,
}

impl std::fmt::Debug for ReportController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportController")
            .field("data", &self.data)
            .field("mapping", &self.mapping)
            .field("focus", &self.focus)
            .field("names", &self.names)
            .field("sink", &"<dyn EventSink>")
            .finish()
    }
}

impl ReportController {
    /// Start assembling a controller.
    pub fn builder() -> ReportControllerBuilder {
        ReportControllerBuilder::default()
    }

    /// The loaded report.
    pub fn data(&self) -> &ReportData {
        &self.data
    }

    /// The configured workflow mapping, if any.
    pub fn mapping(&self) -> Option<&WorkflowMapping> {
        self.mapping.as_ref()
    }

    /// The current focus selection.
    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Replace the focus wholesale.
    pub fn set_focus(&mut self, focus: Focus) {
        debug!(
            severities = focus.severities.len(),
            workflows = focus.workflows.len(),
            "focus replaced"
        );
        self.focus = focus;
    }

    /// The category-grouped problems view under the current focus.
    pub fn problems(&self) -> Vec<ReportRow> {
        problems_view(
            &self.data.file_records,
            &self.names,
            self.mapping.as_ref(),
            &self.focus,
        )
    }

    /// The workflow-grouped view under the current focus.
    pub fn workflows(&self) -> Vec<ReportRow> {
        workflow_view(
            &self.data.file_records,
            &self.names,
            self.mapping.as_ref(),
            &self.focus,
        )
    }

    /// Unfiltered per-bucket issue counts.
    pub fn counts(&self) -> IssueCounts {
        count_issues(&self.data.file_records)
    }

    /// Unfiltered processed/failed file counts.
    pub fn file_counts(&self) -> FileCounts {
        count_files(&self.data.source_files)
    }

    /// The banner's full summary payload.
    pub fn summary(&self) -> ReportSummary {
        summarize(&self.data)
    }

    /// Notify the sink that the report was opened.
    pub fn open_report(&self) {
        self.sink.report_opened(&self.summary());
    }

    /// Notify the sink that an issue detail was opened.
    pub fn open_issue(&self, issue: &IssueRow) {
        self.sink.issue_opened(issue, &self.summary());
    }
}

/// Builder for [`ReportController`].
///
/// Report data is the one mandatory input; [`build`](Self::build) fails
/// with [`ConfigError::MissingReportData`] without it. Everything else has
/// a working default: no mapping, an everything-visible focus, a no-op
/// sink.
#[derive(Default)]
pub struct ReportControllerBuilder {
    data: Option<ReportData>,
    mapping: Option<WorkflowMapping>,
    focus: Option<Focus>,
    sink: Option<Box<dyn EventSink>>,
}

impl ReportControllerBuilder {
    /// Supply the loaded report.
    pub fn report_data(mut self, data: ReportData) -> Self {
        self.data = Some(data);
        self
    }

    /// Supply the workflow mapping configuration.
    pub fn workflow_mapping(mut self, mapping: WorkflowMapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Supply an initial focus; defaults to everything visible.
    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Inject an event sink; defaults to [`NoopSink`].
    pub fn event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Assemble the controller.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingReportData`] when no report data was
    /// supplied - a wiring mistake in the embedding application, distinct
    /// from a report that is merely empty.
    pub fn build(self) -> Result<ReportController, ConfigError> {
        let data = self.data.ok_or(ConfigError::MissingReportData)?;
        let names = FileNameIndex::new(&data.source_files);
        let focus = self
            .focus
            .unwrap_or_else(|| Focus::all(self.mapping.as_ref()));
        debug!(
            files = data.source_files.files.len() + 1,
            records = data.file_records.len(),
            has_mapping = self.mapping.is_some(),
            "report controller built"
        );
        Ok(ReportController {
            data,
            mapping: self.mapping,
            focus,
            names,
            sink: self.sink.unwrap_or_else(|| Box::new(NoopSink)),
        })
    }
}
