//! The read → build → write pipeline.
//!
//! A run reads the whole word list, builds the [`PuzzleDocument`] and its
//! YAML text in memory, then writes the output file in one call. Nothing is
//! written unless every earlier step succeeded. An existing output file is
//! overwritten; two runs racing on the same output path leave whichever
//! wrote last.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::ConverterConfig;
use crate::document::PuzzleDocument;
use crate::error::{ConvertError, ConvertResult};
use crate::words::read_words;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    pub title: String,
    pub rung_count: usize,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Created {}", self.output_path.display())
    }
}

/// Converts a word list file into a puzzle YAML file.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Build the document for the configured input without writing anything.
    pub fn build(&self) -> ConvertResult<PuzzleDocument> {
        let input = &self.config.input_path;
        let words = read_words(input)?;
        PuzzleDocument::from_words(&words, &self.config.author, &self.config.difficulty)
            .map_err(|e| e.with_input_path(input))
    }

    pub fn run(&self) -> ConvertResult<ConversionReport> {
        let doc = self.build()?;
        let yaml = doc.to_yaml()?;
        let output_path = self.config.resolve_output_path(&doc);

        debug!(
            output = %output_path.display(),
            bytes = yaml.len(),
            exists = output_path.exists(),
            "Writing puzzle"
        );
        std::fs::write(&output_path, yaml).map_err(|source| ConvertError::FileWrite {
            path: output_path.clone(),
            source,
        })?;

        info!(
            input = %self.config.input_path.display(),
            output = %output_path.display(),
            rungs = doc.ladder.len(),
            title = %doc.meta.title,
            "Puzzle written"
        );

        Ok(ConversionReport {
            output_path,
            rung_count: doc.ladder.len(),
            title: doc.meta.title,
        })
    }
}
