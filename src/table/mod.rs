use anyhow::{bail, Context, Result};
use colored::*;
use std::collections::HashMap;
use std::path::Path;

/// Word -> candidate-misspellings mapping loaded from a CSV table.
///
/// The first column holds the word (its header name does not matter and may
/// be empty, as written by dataframe exporters). A column named
/// `misspellings` holds the candidates as a bracketed list literal such as
/// `['teh', 'hte']`.
#[derive(Debug)]
pub struct MisspellingTable {
    entries: HashMap<String, Vec<String>>,
}

impl MisspellingTable {
    /// Load a table from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open misspelling table: {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header row: {}", path.display()))?
            .clone();

        // The first column is the index, so the candidate column is looked
        // up among the remaining ones.
        let column = headers
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, name)| *name == "misspellings")
            .map(|(idx, _)| idx)
            .with_context(|| {
                format!("No 'misspellings' column in {}", path.display())
            })?;

        let mut entries = HashMap::new();

        for (row, record) in reader.records().enumerate() {
            // Header occupies line 1
            let line = row + 2;

            let record = record
                .with_context(|| format!("Malformed CSV record at line {}", line))?;

            let word = record
                .get(0)
                .with_context(|| format!("Missing index column at line {}", line))?;

            let cell = record
                .get(column)
                .with_context(|| format!("Missing misspellings cell at line {}", line))?;

            let candidates = parse_candidate_list(cell).with_context(|| {
                format!("Invalid candidate list for '{}' at line {}", word, line)
            })?;

            // Duplicate words: last row wins
            entries.insert(word.to_string(), candidates);
        }

        Ok(Self { entries })
    }

    /// Candidate misspellings for a word, if the word is known.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter()
    }
}

/// Parse a bracketed list literal such as `['teh', 'hte']`.
///
/// Items are quoted with `'` or `"` and separated by commas; whitespace
/// around items is ignored. Backslash escapes the quote characters and
/// itself. This is a fixed grammar, not a general literal evaluator.
fn parse_candidate_list(cell: &str) -> Result<Vec<String>> {
    let inner = cell
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .with_context(|| format!("Expected a bracketed list, got '{}'", cell.trim()))?;

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }

        let quote = match chars.next() {
            None if items.is_empty() => break,
            None => bail!("Trailing comma in list"),
            Some(q @ ('\'' | '"')) => q,
            Some(other) => bail!("Expected quoted item, found '{}'", other),
        };

        let mut item = String::new();
        loop {
            match chars.next() {
                None => bail!("Unterminated string in list"),
                Some('\\') => match chars.next() {
                    Some(c @ ('\'' | '"' | '\\')) => item.push(c),
                    Some(c) => bail!("Unsupported escape '\\{}'", c),
                    None => bail!("Unterminated escape in list"),
                },
                Some(c) if c == quote => break,
                Some(c) => item.push(c),
            }
        }
        items.push(item);

        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }

        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(other) => bail!("Expected ',' between items, found '{}'", other),
        }
    }

    Ok(items)
}

/// Validate a table file and print entry statistics.
pub fn show_info(path: &Path) -> Result<()> {
    let table = MisspellingTable::load(path)?;

    println!("{}", format!("Misspelling table: {}", path.display()).bold());
    println!("  Entries: {}", table.len().to_string().yellow());

    let total_candidates: usize = table.entries().map(|(_, c)| c.len()).sum();
    println!("  Candidates: {}", total_candidates.to_string().yellow());

    let mut words: Vec<&String> = table.entries().map(|(w, _)| w).collect();
    words.sort();

    if !words.is_empty() {
        println!("  Sample:");
        for word in words.iter().take(5) {
            let candidates = table.get(word.as_str()).unwrap_or_default().join(", ");
            println!("    {} {} {}", word.cyan(), "→".dimmed(), candidates);
        }
    }

    println!("{} Table is valid.", "✓".green().bold());

    Ok(())
}
