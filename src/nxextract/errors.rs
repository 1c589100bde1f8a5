use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal extraction failures. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to determine source length")]
    SourceLen(#[source] io::Error),
    #[error("{name}: bytes {offset:#x}..{end:#x} lie outside the {source_len} byte source")]
    OutOfBounds {
        name: String,
        offset: u64,
        end: u64,
        source_len: u64,
    },
    #[error("{name}: failed to seek source to {offset:#x}")]
    Seek {
        name: String,
        offset: u64,
        #[source]
        source: io::Error,
    },
    #[error("{name}: failed to read {length} bytes from source")]
    Read {
        name: String,
        length: u32,
        #[source]
        source: io::Error,
    },
    #[error("{name}: failed to create directory {}", path.display())]
    CreateDir {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{name}: failed to write {}", path.display())]
    Write {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    /// Name of the record that was being processed.
    pub fn record_name(&self) -> Option<&str> {
        match self {
            ExtractError::SourceLen(_) => None,
            ExtractError::OutOfBounds { name, .. }
            | ExtractError::Seek { name, .. }
            | ExtractError::Read { name, .. }
            | ExtractError::CreateDir { name, .. }
            | ExtractError::Write { name, .. } => Some(name),
        }
    }
}
