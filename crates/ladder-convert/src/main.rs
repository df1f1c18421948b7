use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ladder_convert::{Converter, ConverterConfig};

/// Convert a word list into a word ladder puzzle YAML file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list to read, one word per line (overrides LADDER_INPUT_PATH)
    #[arg(long)]
    input: Option<PathBuf>,

    /// YAML file to write (overrides LADDER_OUTPUT_PATH; default: new.yaml next to the input)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Puzzle author (overrides LADDER_AUTHOR)
    #[arg(long)]
    author: Option<String>,

    /// Puzzle difficulty (overrides LADDER_DIFFICULTY)
    #[arg(long)]
    difficulty: Option<String>,

    /// Name the output `{first}-{last}.yaml` when no output path is given
    #[arg(long, default_value_t = false)]
    name_from_words: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ConverterConfig::from_env();
    if let Some(path) = args.input {
        config.input_path = path;
    }
    if let Some(path) = args.output {
        config.output_path = Some(path);
    }
    if let Some(author) = args.author {
        config.author = author;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if args.name_from_words {
        config.name_from_words = true;
    }

    tracing::debug!(?config, "Converter config");

    let report = Converter::new(config).run()?;
    writeln!(std::io::stdout(), "{report}")?;

    Ok(())
}
