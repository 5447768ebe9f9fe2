//! Aggregation pipeline - flat audit records in, display rows out.
//!
//! Every function here is a pure, synchronous transformation over
//! already-loaded report data: no I/O, no shared state, cheap enough to
//! recompute eagerly on every focus change. Callers memoize if they want
//! to, keyed on input identity.
//!
//! Pipeline stages:
//!
//! ```text
//! Vec<FileRecord>
//!   └── flatten_records          (attach file id + resolved name)
//!       ├── problems_view        (workflow filter → severity filter → group by category)
//!       ├── workflow_view        (severity filter → group by resolved workflow)
//!       └── count_issues         (unfiltered bucket counts)
//! ```

mod counts;
mod flatten;
mod problems;
mod workflows;

pub use counts::{
    FileCounts, IssueCounts, ReportSummary, count_files, count_issues, failed_files, summarize,
};
pub use flatten::flatten_records;
pub use problems::problems_view;
pub use workflows::workflow_view;
