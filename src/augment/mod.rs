pub mod misspell;
pub mod punctuation;
pub mod typo;

use crate::table::MisspellingTable;
use crate::Config;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use misspell::{insert_misspellings, substitute};
pub use punctuation::remove_punctuation;
pub use typo::insert_typo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Punctuation,
    Misspell,
    Typo,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "punctuation" => Ok(Operation::Punctuation),
            "misspell" => Ok(Operation::Misspell),
            "typo" => Ok(Operation::Typo),
            _ => Err(format!("Unknown operation: {}", s)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Punctuation => write!(f, "punctuation"),
            Operation::Misspell => write!(f, "misspell"),
            Operation::Typo => write!(f, "typo"),
        }
    }
}

/// Applies a configured sequence of augmentation operations.
///
/// The misspelling table is loaded once per augmenter, so a single CLI run
/// sees one consistent snapshot of the table file.
pub struct Augmenter {
    operations: Vec<Operation>,
    table: Option<MisspellingTable>,
    probability: f64,
    rng: StdRng,
}

impl Augmenter {
    pub fn new(config: &Config, seed: Option<u64>) -> Result<Self> {
        let table = if config.operations.contains(&Operation::Misspell) {
            let table = MisspellingTable::load(&config.table).with_context(|| {
                format!("Failed to load misspelling table: {}", config.table.display())
            })?;
            Some(table)
        } else {
            None
        };

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            operations: config.operations.clone(),
            table,
            probability: config.probability,
            rng,
        })
    }

    /// Apply the configured operations to `text`, in order.
    pub fn augment(&mut self, text: &str) -> Result<String> {
        let mut output = text.to_string();

        for op in self.operations.clone() {
            output = match op {
                Operation::Punctuation => punctuation::remove_punctuation(&output),
                Operation::Misspell => {
                    let table = self
                        .table
                        .as_ref()
                        .context("No misspelling table loaded")?;
                    misspell::substitute(&output, table, self.probability, &mut self.rng)
                }
                Operation::Typo => typo::insert_typo(&output, &mut self.rng)?,
            };
        }

        Ok(output)
    }
}
