use serde::Serialize;

use crate::error::Result;
use crate::rules::{Recommendation, Summary};
use crate::AnalysisReport;

#[derive(Serialize)]
struct JsonReport<'a> {
    report_id: String,
    generated_at: String,
    snapshot: &'a str,
    summary: Summary,
    recommendations: Vec<&'a Recommendation>,
}

/// Render the report as a JSON document.
pub fn render(report: &AnalysisReport) -> Result<String> {
    let doc = JsonReport {
        report_id: uuid::Uuid::new_v4().to_string(),
        generated_at: report.generated_at.to_rfc3339(),
        snapshot: &report.snapshot_name,
        summary: report.registry.summary(),
        recommendations: report.registry.iter().collect(),
    };
    let json = serde_json::to_string_pretty(&doc)?;
    Ok(json)
}
