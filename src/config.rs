use crate::augment::Operation;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_table")]
    pub table: PathBuf,

    #[serde(default = "default_probability")]
    pub probability: f64,

    #[serde(default = "default_operations")]
    pub operations: Vec<Operation>,
}

fn default_table() -> PathBuf {
    PathBuf::from("missp.csv")
}

fn default_probability() -> f64 {
    1.0
}

fn default_operations() -> Vec<Operation> {
    vec![Operation::Punctuation, Operation::Misspell, Operation::Typo]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: default_table(),
            probability: default_probability(),
            operations: default_operations(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        table: Option<PathBuf>,
        probability: Option<f64>,
        operations: Vec<Operation>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".textaug.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(table) = table {
            config.table = table;
        }
        if let Some(probability) = probability {
            config.probability = probability;
        }
        if !operations.is_empty() {
            config.operations = operations;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.table != default_table() {
            self.table = other.table;
        }
        if other.probability != default_probability() {
            self.probability = other.probability;
        }
        if other.operations != default_operations() {
            self.operations = other.operations;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "textaug").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.table, PathBuf::from("missp.csv"));
        assert_eq!(config.probability, 1.0);
        assert_eq!(config.operations.len(), 3);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            probability: 0.5,
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.probability, 0.5);
        assert_eq!(merged.table, PathBuf::from("missp.csv"));
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            "table = \"variants.csv\"\nprobability = 0.25\noperations = [\"typo\"]\n",
        )
        .unwrap();

        assert_eq!(config.table, PathBuf::from("variants.csv"));
        assert_eq!(config.probability, 0.25);
        assert_eq!(config.operations, vec![Operation::Typo]);
    }
}
