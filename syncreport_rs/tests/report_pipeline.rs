//! End-to-end pipeline tests over the canonical sample report.
//!
//! The fixture is one run of the ingestion pipeline: a processed master
//! file, one processed sub-file, one missing sub-file, and mixed
//! Fatal/Error/Info audit records across the `MissingData` and
//! `VisualFidelity` categories.

use pretty_assertions::assert_eq;

use syncreport::controller::ReportController;
use syncreport::focus::Focus;
use syncreport::rows::{ReportRow, total_leaves};
use syncreport::severity::{Bucket, sort_by_severity, Severity};
use syncreport::types::{FileNameIndex, ReportData};
use syncreport::workflow::{UNORGANIZED, WorkflowMapping};
use syncreport::{flatten_records, problems_view, workflow_view};

fn sample_report() -> ReportData {
    serde_json::from_str(include_str!("fixtures/sample_report.json"))
        .expect("fixture deserializes")
}

fn sample_mapping() -> WorkflowMapping {
    serde_json::from_str(
        r#"{
            "MissingData": {
                "Material": ["Structural Review", "Cost Estimation"],
                "Geometry": ["Structural Review"]
            },
            "VisualFidelity": {
                "Texture": ["Rendering"]
            }
        }"#,
    )
    .expect("mapping deserializes")
}

fn group_names(rows: &[ReportRow]) -> Vec<&str> {
    rows.iter()
        .map(|row| match row {
            ReportRow::Group { category, .. } => category.as_str(),
            ReportRow::Leaf { .. } => panic!("expected only groups, got {row:?}"),
        })
        .collect()
}

fn controller() -> ReportController {
    ReportController::builder()
        .report_data(sample_report())
        .workflow_mapping(sample_mapping())
        .build()
        .expect("report data supplied")
}

#[test]
fn banner_counts_cover_the_whole_report() {
    let summary = controller().summary();

    // 1 Fatal + 2 Error land in the error bucket, 2 Info in info.
    assert_eq!(summary.issues.error_count, 3);
    assert_eq!(summary.issues.warning_count, 0);
    assert_eq!(summary.issues.info_count, 2);
    assert_eq!(summary.issues.issues_count, 5);

    // The missing south wing is the only non-"Processed" file.
    assert_eq!(summary.files.total_file_count, 3);
    assert_eq!(summary.files.failed_file_count, 1);

    assert_eq!(summary.context.job_id.as_deref(), Some("job-7f3a"));
}

#[test]
fn problems_view_groups_per_distinct_category() {
    let rows = controller().problems();

    assert_eq!(group_names(&rows), vec!["MissingData", "VisualFidelity"]);
    assert_eq!(total_leaves(&rows), 5);
}

#[test]
fn problems_view_resolves_display_file_names() {
    let rows = controller().problems();
    let names: Vec<_> = rows
        .iter()
        .flat_map(ReportRow::leaves)
        .map(|leaf| leaf.file_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "plant.twin",
            "north-wing.rvt",
            "north-wing.rvt",
            "north-wing.rvt",
            "south-wing.rvt",
        ]
    );
}

#[test]
fn error_only_focus_drops_info_categories_entirely() {
    let mut controller = controller();
    let mut focus = Focus::all(controller.mapping());
    focus.severities = [Bucket::Error].into_iter().collect();
    controller.set_focus(focus);

    let rows = controller.problems();
    assert_eq!(group_names(&rows), vec!["MissingData"]);
    assert_eq!(total_leaves(&rows), 3);
    for leaf in rows.iter().flat_map(ReportRow::leaves) {
        assert!(matches!(
            leaf.level,
            Some(Severity::Fatal) | Some(Severity::Error)
        ));
    }
}

#[test]
fn workflow_focus_narrows_the_problems_view() {
    let mut controller = controller();
    let mut focus = Focus::all(controller.mapping());
    focus.workflows = ["Rendering".to_string()].into_iter().collect();
    controller.set_focus(focus);

    let rows = controller.problems();
    assert_eq!(group_names(&rows), vec!["VisualFidelity"]);
    assert_eq!(total_leaves(&rows), 2);
}

#[test]
fn workflow_view_duplicates_multi_membership_records() {
    let rows = controller().workflows();

    // First-seen bucket order follows record order: the master's Geometry
    // record opens Structural Review, the Material records add Cost
    // Estimation, the Texture records add Rendering.
    assert_eq!(
        group_names(&rows),
        vec!["Structural Review", "Cost Estimation", "Rendering"]
    );

    // Both Material records belong to two workflows, so 5 surviving
    // records produce 7 leaf entries.
    assert_eq!(total_leaves(&rows), 7);

    let structural = &rows[0];
    assert_eq!(structural.leaf_count(), 3);
}

#[test]
fn workflow_view_without_mapping_stays_flat() {
    let data = sample_report();
    let names = FileNameIndex::new(&data.source_files);
    let rows = workflow_view(&data.file_records, &names, None, &Focus::all(None));

    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| matches!(r, ReportRow::Leaf { .. })));
}

#[test]
fn unmapped_categories_fall_under_unorganized() {
    let mapping: WorkflowMapping =
        serde_json::from_str(r#"{"MissingData": {"Material": ["Structural Review"]}}"#).unwrap();
    let data = sample_report();
    let names = FileNameIndex::new(&data.source_files);

    let rows = workflow_view(
        &data.file_records,
        &names,
        Some(&mapping),
        &Focus::all(Some(&mapping)),
    );
    let groups = group_names(&rows);
    assert!(groups.contains(&UNORGANIZED));

    // Unorganized is focusable in the problems view like any workflow.
    let mut focus = Focus::all(Some(&mapping));
    focus.workflows = [UNORGANIZED.to_string()].into_iter().collect();
    let problems = problems_view(&data.file_records, &names, Some(&mapping), &focus);
    // Geometry and Texture records have no mapping entry under this
    // narrower mapping: the master Fatal plus both Info records.
    assert_eq!(total_leaves(&problems), 3);
}

#[test]
fn flattened_rows_sort_by_severity_stably() {
    let data = sample_report();
    let names = FileNameIndex::new(&data.source_files);
    let mut rows = flatten_records(&data.file_records, &names);
    sort_by_severity(&mut rows);

    let levels: Vec<_> = rows.iter().map(|r| r.level.unwrap()).collect();
    assert_eq!(
        levels,
        vec![
            Severity::Fatal,
            Severity::Error,
            Severity::Error,
            Severity::Info,
            Severity::Info,
        ]
    );
    // Equal levels keep emission order.
    assert_eq!(
        rows[1].message.as_deref(),
        Some("material library entry missing")
    );
    assert_eq!(rows[2].message.as_deref(), Some("fallback material applied"));
}

#[test]
fn view_rows_serialize_for_the_renderer() {
    let rows = controller().problems();
    let json = serde_json::to_value(&rows).expect("rows serialize");

    assert_eq!(json[0]["row"], "group");
    assert_eq!(json[0]["category"], "MissingData");
    assert_eq!(json[0]["subRows"][0]["level"], "Fatal");
    assert_eq!(json[0]["subRows"][0]["type"], "Geometry");
    assert_eq!(json[0]["subRows"][0]["fileName"], "plant.twin");
}
