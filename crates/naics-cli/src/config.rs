//! Rule configuration (TOML) and rule resolution.
//!
//! A rule config can rename the rule, replace its metadata, and point
//! at a CSV code list. Precedence for the reference set: the
//! `--codes-csv` flag, then the config's `codes_csv` (resolved relative
//! to the config file), then the built-in 2022 set.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use naics_codes::{builtin_rule, load_code_set_csv};
use naics_model::RuleDefinition;
use serde::Deserialize;

/// On-disk rule configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    /// Rule identifier override.
    pub name: Option<String>,
    /// CSV file with the reference set; built-in 2022 set when absent.
    pub codes_csv: Option<PathBuf>,
    #[serde(default)]
    pub metadata: MetadataConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataConfig {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub contributors: Vec<String>,
}

pub fn load_rule_config(path: &Path) -> Result<RuleConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read rule config: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse rule config: {}", path.display()))
}

/// Build the rule to run from CLI inputs.
pub fn resolve_rule(
    rule_config: Option<&Path>,
    codes_csv: Option<&Path>,
) -> Result<RuleDefinition> {
    let mut rule = builtin_rule();

    if let Some(config_path) = rule_config {
        let config = load_rule_config(config_path)?;
        if let Some(name) = config.name {
            rule.name = name;
        }
        if !config.metadata.tags.is_empty() {
            rule.metadata.tags = config.metadata.tags;
        }
        if !config.metadata.contributors.is_empty() {
            rule.metadata.contributors = config.metadata.contributors;
        }
        if codes_csv.is_none()
            && let Some(relative) = config.codes_csv
        {
            let path = resolve_relative(config_path, &relative);
            rule.code_set = load_code_set_csv(&path)
                .with_context(|| format!("load code set: {}", path.display()))?;
        }
    }

    if let Some(path) = codes_csv {
        rule.code_set = load_code_set_csv(path)
            .with_context(|| format!("load code set: {}", path.display()))?;
    }

    Ok(rule)
}

fn resolve_relative(config_path: &Path, target: &Path) -> PathBuf {
    if target.is_absolute() {
        return target.to_path_buf();
    }
    config_path
        .parent()
        .map(|parent| parent.join(target))
        .unwrap_or_else(|| target.to_path_buf())
}
