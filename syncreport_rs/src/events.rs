//! Fire-and-forget notification hooks.
//!
//! The embedding application may want to know when a report or an issue
//! detail is opened (telemetry, toasts). The core only exposes the counts
//! payload; transport is the embedder's concern. The sink is an injected
//! capability, not ambient state - pass it to the controller builder.

use crate::aggregate::ReportSummary;
use crate::rows::IssueRow;

/// Receiver for report interaction events.
///
/// All methods are infallible and default to no-ops, so an implementation
/// overrides only what it cares about. Implementations must not block:
/// the controller calls the sink synchronously from the UI's path.
pub trait EventSink {
    /// The report was opened or first rendered.
    fn report_opened(&self, _summary: &ReportSummary) {}

    /// The user drilled into one issue's detail.
    fn issue_opened(&self, _issue: &IssueRow, _summary: &ReportSummary) {}
}

/// Sink that ignores every event; the default when none is injected.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {}
