use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    source: String,
    text: String,
}

/// Print one augmented result in the requested format.
pub fn print_augmented(source: &str, text: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            // Raw text, no trailing newline added beyond the content's own
            print!("{}", text);
            let _ = std::io::stdout().flush();
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                source: source.to_string(),
                text: text.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }
}

pub fn print_in_place_summary(total_files: usize, colored: bool) {
    let file_word = if total_files == 1 { "file" } else { "files" };
    if colored {
        println!(
            "{} {} {} augmented",
            "✓".green().bold(),
            total_files.to_string().green().bold(),
            file_word
        );
    } else {
        println!("✓ {} {} augmented", total_files, file_word);
    }
}
