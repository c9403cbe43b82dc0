use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Where the text to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
}

/// Read the whole source into memory.
pub fn read_source(source: &InputSource) -> Result<Vec<u8>, SourceError> {
    match source {
        InputSource::File(path) => fs::read(path).map_err(|source| SourceError::File {
            path: path.clone(),
            source,
        }),
        InputSource::Stdin => {
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(SourceError::Stdin)?;
            Ok(bytes)
        }
    }
}
