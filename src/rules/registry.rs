//! Run-scoped accumulation of finalized recommendations.

use serde::{Deserialize, Serialize};

use super::priority::classify;
use super::recommendation::{Draft, Priority, Recommendation};

/// Fallback line rendered when a run produced no recommendations, so
/// reports never show empty section headers.
pub const NO_RECOMMENDATIONS: &str =
    "분석된 리소스에서 추가 권장사항이 발견되지 않았습니다.";

/// Per-tier counts, plus the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

/// Accumulates recommendations into three insertion-ordered priority
/// buckets. Scoped to one report-generation run; entries are never mutated
/// or removed. Adding after a render is allowed.
#[derive(Debug, Clone, Default)]
pub struct RecommendationRegistry {
    high: Vec<Recommendation>,
    medium: Vec<Recommendation>,
    low: Vec<Recommendation>,
}

impl RecommendationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the draft's priority and append it to the matching bucket.
    /// Always succeeds.
    pub fn add(&mut self, draft: Draft) {
        let priority = classify(&draft);
        let rec = Recommendation::from_draft(draft, priority);
        match priority {
            Priority::High => self.high.push(rec),
            Priority::Medium => self.medium.push(rec),
            Priority::Low => self.low.push(rec),
        }
    }

    pub fn bucket(&self, priority: Priority) -> &[Recommendation] {
        match priority {
            Priority::High => &self.high,
            Priority::Medium => &self.medium,
            Priority::Low => &self.low,
        }
    }

    /// All recommendations, highest tier first, insertion order within a
    /// tier.
    pub fn iter(&self) -> impl Iterator<Item = &Recommendation> {
        self.high
            .iter()
            .chain(self.medium.iter())
            .chain(self.low.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.medium.is_empty() && self.low.is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            high: self.high.len(),
            medium: self.medium.len(),
            low: self.low.len(),
            total: self.high.len() + self.medium.len() + self.low.len(),
        }
    }

    /// Render the registry as a Markdown fragment: one sub-section per
    /// non-empty tier, items numbered from 1 within each tier.
    pub fn render(&self, section_title: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("## {section_title}\n\n"));

        if self.is_empty() {
            out.push_str(NO_RECOMMENDATIONS);
            out.push('\n');
            return out;
        }

        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            let bucket = self.bucket(priority);
            if bucket.is_empty() {
                continue;
            }
            out.push_str(&format!("### {}\n\n", priority.label_ko()));
            for (idx, rec) in bucket.iter().enumerate() {
                out.push_str(&format!("{}. **{}**\n", idx + 1, rec.title));
                out.push_str(&format!("   - {}\n", rec.description));
                if let Some(benefit) = &rec.quantitative_benefit {
                    out.push_str(&format!("   - 예상 효과: {benefit}\n"));
                }
                out.push_str(&format!(
                    "   - 영향도: {} · 예상 노력: {}\n",
                    rec.impact, rec.effort
                ));
                out.push('\n');
            }
        }

        out
    }
}
