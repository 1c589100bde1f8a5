use clap::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum NxExtractCliError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} is not a file")]
    NotAFile(String),
    #[error("No source executable given. Pass one, or run without arguments for the TUI")]
    MissingSource,
}

impl From<NxExtractCliError> for ErrorKind {
    fn from(error: NxExtractCliError) -> Self {
        match error {
            NxExtractCliError::NotFound(_) | NxExtractCliError::NotAFile(_) => ErrorKind::Io,
            NxExtractCliError::MissingSource => ErrorKind::MissingRequiredArgument,
        }
    }
}
