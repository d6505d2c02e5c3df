// ⚙️ Configuration - Rubric and export settings as data
// Loaded from an optional JSON file; every field has a default

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdoConfig {
    pub rubrics: RubricConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RubricConfig {
    /// Upper bound on commemorations kept on any day
    pub max_commemorations: usize,

    /// Fail the build on a same-key tie instead of auditing it
    pub strict_ties: bool,
}

impl Default for RubricConfig {
    fn default() -> Self {
        RubricConfig {
            max_commemorations: 2,
            strict_ties: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Path of the generated .ics file
    pub output: PathBuf,

    /// JSON index of propers (name -> { "url": ... })
    pub propers: Option<PathBuf>,

    pub calendar_name: String,
    pub calendar_description: String,
    pub prodid: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            output: PathBuf::from("ordo.ics"),
            propers: None,
            calendar_name: "UVOC Tridentine calendar".to_string(),
            calendar_description: "Liturgical calendar using the 1962 Roman Catholic rubrics \
                with links to propers provided by Una Voce Orange County (uvoc.org)."
                .to_string(),
            prodid: "-//github.oliviergt//Ordo//EN".to_string(),
        }
    }
}

impl OrdoConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: OrdoConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        Ok(config)
    }

    /// Builder: override the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.export.output = output.into();
        self
    }

    /// Builder: attach a propers index
    pub fn with_propers(mut self, propers: impl Into<PathBuf>) -> Self {
        self.export.propers = Some(propers.into());
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
