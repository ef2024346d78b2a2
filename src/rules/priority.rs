//! Priority resolution for recommendation drafts.
//!
//! All domains share this single table and keyword set. Resolution order is
//! observable behavior: the security override beats the cost override,
//! which beats the category base.

use super::recommendation::{Category, Draft, Priority};

/// Base priority per category.
const BASE_PRIORITY: &[(Category, Priority)] = &[
    (Category::SecurityRisk, Priority::High),
    (Category::CostImpact, Priority::High),
    (Category::Compliance, Priority::High),
    (Category::Performance, Priority::Medium),
    (Category::Monitoring, Priority::Medium),
    (Category::Optimization, Priority::Low),
    (Category::BestPractice, Priority::Low),
];

/// Title substrings that force a draft to high priority.
const SECURITY_KEYWORDS: &[&str] = &["security", "mfa", "보안"];

/// Title substrings that mark a draft as cost-related.
const COST_KEYWORDS: &[&str] = &["cost", "비용"];

/// Benefit substrings that count as a currency-like quantity. "%" is
/// included, so a non-cost draft whose benefit mentions a percentage is
/// promoted as well.
const CURRENCY_MARKERS: &[&str] = &["$", "원", "%"];

/// Resolve the final priority tier for a draft. Never fails; a category
/// missing from the base table falls back to medium.
pub fn classify(draft: &Draft) -> Priority {
    let title = draft.title.to_lowercase();
    let benefit = draft.quantitative_benefit.as_deref().unwrap_or("");

    if SECURITY_KEYWORDS.iter().any(|kw| title.contains(kw)) {
        return Priority::High;
    }

    let cost_context =
        COST_KEYWORDS.iter().any(|kw| title.contains(kw)) || !benefit.trim().is_empty();
    if cost_context && CURRENCY_MARKERS.iter().any(|m| benefit.contains(m)) {
        return Priority::High;
    }

    base_priority(draft.category)
}

/// Base-table lookup, fail-open to medium.
pub fn base_priority(category: Category) -> Priority {
    BASE_PRIORITY
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, p)| *p)
        .unwrap_or(Priority::Medium)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::recommendation::Level;

    fn draft(title: &str, category: Category, benefit: Option<&str>) -> Draft {
        Draft {
            title: title.into(),
            description: "test".into(),
            category,
            impact: Level::Medium,
            effort: Level::Medium,
            quantitative_benefit: benefit.map(String::from),
        }
    }

    #[test]
    fn base_table_values() {
        let cases = [
            (Category::SecurityRisk, Priority::High),
            (Category::CostImpact, Priority::High),
            (Category::Compliance, Priority::High),
            (Category::Performance, Priority::Medium),
            (Category::Monitoring, Priority::Medium),
            (Category::Optimization, Priority::Low),
            (Category::BestPractice, Priority::Low),
        ];
        for (category, expected) in cases {
            let d = draft("일반 점검 항목", category, None);
            assert_eq!(classify(&d), expected, "category {category:?}");
        }
    }

    #[test]
    fn mfa_title_forces_high_regardless_of_category() {
        let d = draft("MFA 필수 설정", Category::BestPractice, None);
        assert_eq!(classify(&d), Priority::High);
        let d = draft("enable mfa for admins", Category::Optimization, None);
        assert_eq!(classify(&d), Priority::High);
    }

    #[test]
    fn korean_security_keyword_forces_high() {
        let d = draft("보안 그룹 규칙 최소화", Category::Monitoring, None);
        assert_eq!(classify(&d), Priority::High);
    }

    #[test]
    fn quantified_benefit_promotes_low_category() {
        let d = draft(
            "인스턴스 타입 조정",
            Category::Optimization,
            Some("$10/month"),
        );
        assert_eq!(classify(&d), Priority::High);
    }

    #[test]
    fn cost_title_without_currency_marker_keeps_base() {
        let d = draft("비용 태깅 정책 수립", Category::BestPractice, None);
        assert_eq!(classify(&d), Priority::Low);
    }

    #[test]
    fn benefit_without_currency_marker_keeps_base() {
        let d = draft(
            "인스턴스 타입 조정",
            Category::Optimization,
            Some("약간의 개선"),
        );
        assert_eq!(classify(&d), Priority::Low);
    }

    // Quirk carried over from the original resolver: "%" counts as a
    // currency marker, so a percentage-only benefit still promotes.
    #[test]
    fn percent_benefit_promotes_non_cost_draft() {
        let d = draft(
            "로그 보존 기간 조정",
            Category::Optimization,
            Some("스토리지 30% 감소"),
        );
        assert_eq!(classify(&d), Priority::High);
    }

    #[test]
    fn security_override_wins_over_cost_override() {
        let d = draft(
            "보안 감사 비용 검토",
            Category::Optimization,
            Some("월 $5 절감 가능"),
        );
        assert_eq!(classify(&d), Priority::High);
    }
}
