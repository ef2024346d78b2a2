//! cloud-advisor — recommendation engine for cloud resource inventories.
//!
//! Offline and rule-based: takes an already-collected inventory snapshot
//! (JSON), evaluates fixed per-domain heuristics, resolves priorities, and
//! renders a Markdown/console/JSON audit report.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use cloudadvisor::{analyze_snapshot, AnalyzeOptions};
//!
//! let options = AnalyzeOptions::default();
//! let report = analyze_snapshot(Path::new("./snapshot.json"), &options).unwrap();
//! println!("Recommendations: {}", report.registry.summary().total);
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod output;
pub mod rules;

use std::path::Path;

use chrono::{DateTime, Utc};

use config::Config;
use error::{AdvisorError, Result};
use inventory::Inventory;
use output::OutputFormat;
use rules::{RecommendationRegistry, RuleEngine};

/// Options for an analysis invocation.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Path to config file (defaults to `.cloudadvisor.toml` next to the
    /// snapshot).
    pub config_path: Option<std::path::PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// CLI override for the config's domain filter.
    pub domains_override: Option<Vec<rules::Domain>>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            format: OutputFormat::Console,
            domains_override: None,
        }
    }
}

/// Complete analysis report for one inventory run.
#[derive(Debug)]
pub struct AnalysisReport {
    pub snapshot_name: String,
    pub generated_at: DateTime<Utc>,
    pub section_title: String,
    pub registry: RecommendationRegistry,
}

/// Run the engine over a normalized inventory: evaluate all configured
/// heuristics and accumulate prioritized recommendations.
pub fn analyze(snapshot_name: &str, inventory: &Inventory, config: &Config) -> AnalysisReport {
    let engine = RuleEngine::with_config(&config.engine);
    let mut registry = RecommendationRegistry::new();
    for draft in engine.run(inventory) {
        registry.add(draft);
    }
    AnalysisReport {
        snapshot_name: snapshot_name.to_string(),
        generated_at: Utc::now(),
        section_title: config.report.section_title.clone(),
        registry,
    }
}

/// Load a snapshot file and its config, normalize, and run the engine.
pub fn analyze_snapshot(path: &Path, options: &AnalyzeOptions) -> Result<AnalysisReport> {
    let config_path = options.config_path.clone().unwrap_or_else(|| {
        path.parent()
            .unwrap_or_else(|| Path::new("."))
            .join(".cloudadvisor.toml")
    });
    let mut config = Config::load(&config_path)?;

    // Apply CLI override
    if let Some(domains) = &options.domains_override {
        config.engine.domains = Some(domains.clone());
    }

    let content = std::fs::read_to_string(path)?;
    let snapshot: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| AdvisorError::Snapshot {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;
    let inventory = Inventory::from_json(&snapshot);

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "inventory".into());

    tracing::debug!(snapshot = %name, empty = inventory.is_empty(), "snapshot loaded");

    Ok(analyze(&name, &inventory, &config))
}

/// Render an analysis report in the specified format.
pub fn render_report(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    output::render(report, format)
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use crate::rules::{Category, Draft, Level, Priority};

    fn any_category() -> impl Strategy<Value = Category> {
        prop_oneof![
            Just(Category::SecurityRisk),
            Just(Category::CostImpact),
            Just(Category::Compliance),
            Just(Category::Performance),
            Just(Category::Monitoring),
            Just(Category::Optimization),
            Just(Category::BestPractice),
        ]
    }

    fn any_draft() -> impl Strategy<Value = Draft> {
        (
            "\\PC{0,40}",
            any_category(),
            proptest::option::of("\\PC{0,20}"),
        )
            .prop_map(|(title, category, benefit)| Draft {
                title,
                description: "property test".into(),
                category,
                impact: Level::Medium,
                effort: Level::Medium,
                quantitative_benefit: benefit,
            })
    }

    proptest! {
        #[test]
        fn summary_total_equals_bucket_sum(drafts in proptest::collection::vec(any_draft(), 0..32)) {
            let mut registry = RecommendationRegistry::new();
            let count = drafts.len();
            for draft in drafts {
                registry.add(draft);
            }
            let summary = registry.summary();
            prop_assert_eq!(summary.total, count);
            prop_assert_eq!(summary.total, summary.high + summary.medium + summary.low);
        }

        #[test]
        fn classify_never_panics_and_mfa_always_wins(draft in any_draft()) {
            let _ = crate::rules::priority::classify(&draft);

            let mut mfa = draft;
            mfa.title.push_str("MFA");
            prop_assert_eq!(crate::rules::priority::classify(&mfa), Priority::High);
        }
    }
}
