use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::Domain;

/// Top-level configuration from `.cloudadvisor.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Which rules run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Domains to analyze. Absent means all domains.
    #[serde(default)]
    pub domains: Option<Vec<Domain>>,
    /// Rule IDs to skip entirely.
    #[serde(default)]
    pub ignore_rules: HashSet<String>,
}

/// Report rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Section title for the recommendations block.
    #[serde(default = "default_section_title")]
    pub section_title: String,
}

fn default_section_title() -> String {
    "권장 조치사항".into()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            section_title: default_section_title(),
        }
    }
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# cloud-advisor configuration

[engine]
# Domains to analyze. Remove entries to narrow the run.
domains = ["networking", "compute", "security"]

# Rule IDs to skip entirely.
# ignore_rules = ["ADVISOR-007"]

[report]
# Section title for the recommendations block.
section_title = "권장 조치사항"
"#
    }
}
