//! Basic report aggregation example.
//!
//! Run with: `cargo run --example basic_report`

use syncreport::controller::ReportController;
use syncreport::focus::Focus;
use syncreport::severity::Bucket;
use syncreport::types::ReportData;
use syncreport::workflow::WorkflowMapping;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    // In the real application this artifact comes from the ingestion
    // pipeline; the loader is the embedder's concern.
    let data: ReportData = serde_json::from_str(include_str!(
        "../tests/fixtures/sample_report.json"
    ))?;
    let mapping: WorkflowMapping = serde_json::from_str(
        r#"{
            "MissingData": {
                "Material": ["Structural Review", "Cost Estimation"],
                "Geometry": ["Structural Review"]
            },
            "VisualFidelity": {
                "Texture": ["Rendering"]
            }
        }"#,
    )?;

    let mut controller = ReportController::builder()
        .report_data(data)
        .workflow_mapping(mapping)
        .build()?;

    println!("banner summary:");
    println!("{}", serde_json::to_string_pretty(&controller.summary())?);

    println!("\nproblems view (everything visible):");
    println!("{}", serde_json::to_string_pretty(&controller.problems())?);

    println!("\nworkflow view:");
    println!("{}", serde_json::to_string_pretty(&controller.workflows())?);

    // Narrow the focus to errors only, as the severity filter chips would.
    let mut focus = Focus::all(controller.mapping());
    focus.severities = [Bucket::Error].into_iter().collect();
    controller.set_focus(focus);

    println!("\nproblems view (errors only):");
    println!("{}", serde_json::to_string_pretty(&controller.problems())?);

    Ok(())
}
