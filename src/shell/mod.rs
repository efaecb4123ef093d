//! File and stream plumbing around the converter.

mod files;

use crate::converter;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub use files::{load_input, save_output};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("nothing to save")]
    NothingToSave,
}

/// Conversion requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Pick the direction from the input's shape.
    #[default]
    Convert,
    Encode,
    Decode,
}

impl Mode {
    pub fn apply(self, text: &str) -> String {
        match self {
            Mode::Convert => converter::convert(text),
            Mode::Encode => converter::encode(text),
            Mode::Decode => converter::decode(text),
        }
    }
}

/// Load, convert and save in one pass.
pub fn run(mode: Mode, input: Option<&Path>, output: Option<&Path>) -> Result<(), ShellError> {
    let text = load_input(input)?;
    info!(?mode, bytes = text.len(), "converting input");

    let result = mode.apply(&text);
    save_output(output, &result)?;

    if let Some(path) = output {
        info!(path = %path.display(), "result saved");
    }
    Ok(())
}
