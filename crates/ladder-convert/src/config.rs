use std::path::{Path, PathBuf};

use crate::document::PuzzleDocument;

/// Word list read when no input path is configured.
pub const DEFAULT_INPUT_PATH: &str = "../static/data/new.txt";
/// File name written next to the input when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "new.yaml";
pub const DEFAULT_AUTHOR: &str = "Sandy Weisz";
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Converter configuration.
///
/// The zero-argument defaults read `../static/data/new.txt` and write
/// `../static/data/new.yaml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Plain-text word list, one word per line.
    pub input_path: PathBuf,

    /// Output YAML path (None = derive from the input's directory).
    pub output_path: Option<PathBuf>,

    pub author: String,

    pub difficulty: String,

    /// Name a derived output `{first}-{last}.yaml` instead of `new.yaml`.
    pub name_from_words: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: None,
            author: DEFAULT_AUTHOR.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            name_from_words: false,
        }
    }
}

impl ConverterConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("LADDER_INPUT_PATH") {
            config.input_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("LADDER_OUTPUT_PATH") {
            config.output_path = Some(PathBuf::from(path));
        }
        if let Some(author) = lookup("LADDER_AUTHOR") {
            config.author = author;
        }
        if let Some(difficulty) = lookup("LADDER_DIFFICULTY") {
            config.difficulty = difficulty;
        }
        if let Some(val) = lookup("LADDER_NAME_FROM_WORDS") {
            config.name_from_words = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Directory the input lives in; output files default to it.
    pub fn input_dir(&self) -> &Path {
        self.input_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Where `doc` should be written.
    ///
    /// An explicit `output_path` wins. Otherwise the file goes next to the
    /// input, named `new.yaml` or `{first}-{last}.yaml`.
    pub fn resolve_output_path(&self, doc: &PuzzleDocument) -> PathBuf {
        if let Some(path) = &self.output_path {
            return path.clone();
        }
        let file_name = match doc.file_stem_slug() {
            Some(stem) if self.name_from_words => format!("{stem}.yaml"),
            _ => DEFAULT_OUTPUT_FILE.to_string(),
        };
        self.input_dir().join(file_name)
    }
}
