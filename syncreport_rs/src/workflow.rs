//! Workflow mapping and resolution.
//!
//! The embedding application may supply a read-only mapping from
//! `(category, type)` pairs to the end-user workflows the issue impacts.
//! One issue can belong to several workflows at once; issues with no
//! mapping entry belong to the [`UNORGANIZED`] sentinel bucket. When no
//! mapping is configured at all, the aggregators skip workflow filtering
//! and grouping entirely.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Sentinel workflow bucket for issues with no mapping entry.
pub const UNORGANIZED: &str = "Unorganized";

/// Nested `category -> type -> workflow names` mapping.
///
/// Supplied once by the embedding application and never mutated during a
/// report's lifetime. The name lists keep their configured order.
///
/// # Example
///
/// ```rust
/// use syncreport::workflow::{WorkflowAssignment, WorkflowMapping};
///
/// let json = r#"{"MissingData": {"Material": ["W1", "W2"]}}"#;
/// let mapping: WorkflowMapping = serde_json::from_str(json).unwrap();
///
/// let assignment = mapping.resolve(Some("MissingData"), Some("Material"));
/// assert_eq!(assignment, WorkflowAssignment::Workflows(&["W1".into(), "W2".into()]));
///
/// let fallback = mapping.resolve(Some("MissingData"), Some("Geometry"));
/// assert_eq!(fallback, WorkflowAssignment::Unorganized);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct WorkflowMapping {
    entries: HashMap<String, HashMap<String, Vec<String>>>,
}

impl WorkflowMapping {
    /// Build a mapping from nested map entries.
    pub fn new(entries: HashMap<String, HashMap<String, Vec<String>>>) -> Self {
        Self { entries }
    }

    /// Resolve the workflows a `(category, type)` pair belongs to.
    ///
    /// Any missing piece - category, type, or mapping entry - resolves to
    /// [`WorkflowAssignment::Unorganized`].
    pub fn resolve(&self, category: Option<&str>, kind: Option<&str>) -> WorkflowAssignment<'_> {
        let names = category
            .and_then(|c| self.entries.get(c))
            .zip(kind)
            .and_then(|(kinds, k)| kinds.get(k));
        match names {
            Some(names) if !names.is_empty() => WorkflowAssignment::Workflows(names.as_slice()),
            _ => WorkflowAssignment::Unorganized,
        }
    }

    /// Every workflow name the mapping mentions, plus [`UNORGANIZED`],
    /// sorted for deterministic iteration.
    ///
    /// This is the universe a workflow focus selection draws from.
    pub fn workflow_names(&self) -> BTreeSet<String> {
        let mut names: BTreeSet<String> = self
            .entries
            .values()
            .flat_map(|kinds| kinds.values())
            .flatten()
            .cloned()
            .collect();
        names.insert(UNORGANIZED.to_string());
        names
    }
}

/// Result of resolving one issue against the mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowAssignment<'a> {
    /// The issue belongs to these workflows (never empty)
    Workflows(&'a [String]),
    /// No mapping entry matched
    Unorganized,
}

impl WorkflowAssignment<'_> {
    /// The workflow names of this assignment; yields [`UNORGANIZED`] for
    /// the sentinel case.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        match self {
            WorkflowAssignment::Workflows(names) => {
                Box::new(names.iter().map(String::as_str)) as Box<dyn Iterator<Item = &str>>
            }
            WorkflowAssignment::Unorganized => Box::new(std::iter::once(UNORGANIZED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WorkflowMapping {
        serde_json::from_str(
            r#"{
                "MissingData": {
                    "Material": ["Rendering", "Costing"],
                    "Geometry": ["Rendering"]
                },
                "VisualFidelity": {
                    "Texture": ["Rendering"]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn resolve_returns_configured_list_in_order() {
        let mapping = sample();
        let assignment = mapping.resolve(Some("MissingData"), Some("Material"));
        let names: Vec<_> = assignment.names().collect();
        assert_eq!(names, vec!["Rendering", "Costing"]);
    }

    #[test]
    fn resolve_falls_back_to_unorganized() {
        let mapping = sample();
        assert_eq!(
            mapping.resolve(Some("X"), Some("Y")),
            WorkflowAssignment::Unorganized
        );
        assert_eq!(
            mapping.resolve(None, Some("Material")),
            WorkflowAssignment::Unorganized
        );
        assert_eq!(
            mapping.resolve(Some("MissingData"), None),
            WorkflowAssignment::Unorganized
        );
    }

    #[test]
    fn empty_entry_resolves_to_unorganized() {
        let mapping: WorkflowMapping =
            serde_json::from_str(r#"{"MissingData": {"Material": []}}"#).unwrap();
        assert_eq!(
            mapping.resolve(Some("MissingData"), Some("Material")),
            WorkflowAssignment::Unorganized
        );
    }

    #[test]
    fn workflow_names_include_sentinel() {
        let names = sample().workflow_names();
        assert!(names.contains("Rendering"));
        assert!(names.contains("Costing"));
        assert!(names.contains(UNORGANIZED));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn unorganized_assignment_yields_sentinel_name() {
        let names: Vec<_> = WorkflowAssignment::Unorganized.names().collect();
        assert_eq!(names, vec![UNORGANIZED]);
    }
}
