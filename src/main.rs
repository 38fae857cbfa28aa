use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use textaug::augment::{Augmenter, Operation};
use textaug::cli::output::{self, OutputFormat};
use textaug::{table, Config};

#[derive(Parser, Debug)]
#[command(name = "textaug")]
#[command(version, about = "Text augmentation for generating noisy training data", long_about = None)]
struct Cli {
    /// Files to augment (reads stdin when omitted)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Operations to apply, in order (punctuation, misspell, typo)
    #[arg(long, value_delimiter = ',')]
    ops: Vec<Operation>,

    /// Per-word substitution probability for the misspell operation
    #[arg(short, long, value_parser = probability_in_range)]
    probability: Option<f64>,

    /// Misspelling table (CSV with a 'misspellings' column)
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Rewrite files with their augmented content
    #[arg(short, long)]
    in_place: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Misspelling table management
    Table {
        #[command(subcommand)]
        action: TableCommands,
    },
}

#[derive(Parser, Debug)]
enum TableCommands {
    /// Validate a table file and show entry statistics
    Info {
        /// Path to the CSV table
        path: PathBuf,
    },
}

fn probability_in_range(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("probability must be between 0 and 1, got {}", value))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "textaug", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    // Load configuration
    let config = Config::load(cli.table.clone(), cli.probability, cli.ops.clone())?;

    let mut augmenter = Augmenter::new(&config, cli.seed)?;

    // No files: filter stdin to stdout
    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;

        let augmented = augmenter.augment(&input)?;
        output::print_augmented("<stdin>", &augmented, &cli.format);
        return Ok(());
    }

    // Process files
    let mut processed = 0;

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let augmented = augmenter.augment(&content)?;

        if cli.in_place {
            fs::write(file_path, &augmented)
                .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
        } else {
            output::print_augmented(&file_path.display().to_string(), &augmented, &cli.format);
        }

        processed += 1;
    }

    if cli.in_place {
        output::print_in_place_summary(processed, !cli.no_color);
    }

    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Table { action } => match action {
            TableCommands::Info { path } => {
                table::show_info(&path)?;
            }
        },
    }
    Ok(())
}
