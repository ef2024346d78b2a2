use crate::AnalysisReport;

/// Render a full Markdown report: header, run metadata, summary counts,
/// then the recommendations section.
pub fn render(report: &AnalysisReport) -> String {
    let summary = report.registry.summary();
    let mut out = String::new();

    out.push_str("# 클라우드 리소스 감사 보고서\n\n");
    out.push_str(&format!("- 스냅샷: {}\n", report.snapshot_name));
    out.push_str(&format!(
        "- 생성 시각: {}\n",
        report.generated_at.to_rfc3339()
    ));
    out.push_str(&format!(
        "- 권장사항: 총 {}건 (높음 {} · 중간 {} · 낮음 {})\n\n",
        summary.total, summary.high, summary.medium, summary.low
    ));

    out.push_str(&report.registry.render(&report.section_title));
    out
}
