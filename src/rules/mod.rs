pub mod builtin;
pub mod priority;
pub mod recommendation;
pub mod registry;

use std::collections::HashSet;

use crate::config::EngineConfig;
use crate::inventory::Inventory;

pub use recommendation::{
    Category, Domain, Draft, Level, Priority, Recommendation, RuleMetadata,
};
pub use registry::{RecommendationRegistry, Summary};

/// A heuristic inspects resource collections and produces recommendation
/// drafts. Pure and infallible: missing or empty collections simply yield
/// no drafts.
pub trait Heuristic: Send + Sync {
    /// Metadata about this rule (id, name, domain, category).
    fn metadata(&self) -> RuleMetadata;

    /// Evaluate the rule against an inventory.
    fn run(&self, inventory: &Inventory) -> Vec<Draft>;
}

/// The rule engine runs all registered heuristics against an inventory.
pub struct RuleEngine {
    heuristics: Vec<Box<dyn Heuristic>>,
}

impl RuleEngine {
    /// Create a new engine with all built-in heuristics registered.
    pub fn new() -> Self {
        Self {
            heuristics: builtin::all_heuristics(),
        }
    }

    /// Create an engine honoring the config's domain filter and rule
    /// ignore list. Ignored rules are skipped at registration, so they
    /// never run.
    pub fn with_config(config: &EngineConfig) -> Self {
        let heuristics = builtin::all_heuristics()
            .into_iter()
            .filter(|h| {
                let meta = h.metadata();
                if config.ignore_rules.contains(&meta.id) {
                    tracing::debug!(rule = %meta.id, "rule ignored by config");
                    return false;
                }
                match &config.domains {
                    Some(domains) => domains.contains(&meta.domain),
                    None => true,
                }
            })
            .collect();
        Self { heuristics }
    }

    /// Run all heuristics and collect their drafts, deduplicated by title
    /// (first occurrence wins).
    pub fn run(&self, inventory: &Inventory) -> Vec<Draft> {
        let mut seen = HashSet::new();
        self.heuristics
            .iter()
            .flat_map(|h| h.run(inventory))
            .filter(|d| seen.insert(d.title.clone()))
            .collect()
    }

    /// List metadata for all registered rules.
    pub fn list_rules(&self) -> Vec<RuleMetadata> {
        self.heuristics.iter().map(|h| h.metadata()).collect()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
