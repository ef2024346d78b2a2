use crate::rules::registry::NO_RECOMMENDATIONS;
use crate::rules::Priority;
use crate::AnalysisReport;

/// Render the report as plain console output, grouped by priority tier.
pub fn render(report: &AnalysisReport) -> String {
    let mut output = String::new();
    let summary = report.registry.summary();

    if report.registry.is_empty() {
        output.push_str(&format!("\n  {NO_RECOMMENDATIONS}\n\n"));
        return output;
    }

    output.push_str(&format!("\n  {}건의 권장사항:\n\n", summary.total));

    for rec in report.registry.iter() {
        let tag = match rec.priority {
            Priority::High => "[HIGH]  ",
            Priority::Medium => "[MEDIUM]",
            Priority::Low => "[LOW]   ",
        };
        output.push_str(&format!("  {} {}\n", tag, rec.title));
        output.push_str(&format!("           {}\n", rec.description));
        if let Some(benefit) = &rec.quantitative_benefit {
            output.push_str(&format!("           예상 효과: {benefit}\n"));
        }
        output.push_str(&format!(
            "           영향도: {} / 예상 노력: {}\n",
            rec.impact, rec.effort
        ));
        output.push('\n');
    }

    output.push_str(&format!(
        "  합계: 높음 {} · 중간 {} · 낮음 {} (총 {}건)\n\n",
        summary.high, summary.medium, summary.low, summary.total
    ));

    output
}
