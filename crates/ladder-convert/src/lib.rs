//! Word ladder puzzle skeleton generator
//!
//! Reads a plain-text word list (one word per line) and writes a YAML
//! puzzle document:
//!
//! ```yaml
//! meta:
//!   title: From cat to dog
//!   author: Sandy Weisz
//!   difficulty: medium
//! ladder:
//! - word: cat
//!   clue: ''
//!   transform: ''
//! ```
//!
//! Clues and transforms are left blank for editing by hand. The word list
//! is not checked for ladder legality.
//!
//! # Usage
//!
//! ```bash
//! # Reads ../static/data/new.txt, writes ../static/data/new.yaml
//! ladder-convert
//!
//! # Explicit paths
//! ladder-convert --input words.txt --output puzzle.yaml
//!
//! # Name the output after the first and last words (cat-dog.yaml)
//! LADDER_NAME_FROM_WORDS=1 ladder-convert
//! ```

pub mod config;
pub mod converter;
pub mod document;
pub mod error;
pub mod words;

pub use config::ConverterConfig;
pub use converter::{ConversionReport, Converter};
pub use document::{Meta, PuzzleDocument, Rung};
pub use error::{ConvertError, ConvertResult, ErrorKind};
