use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Probe error: {0}")]
    Probe(#[from] endpoint_probe::ProbeError),

    #[error("Stdin stream is empty.")]
    EmptyStdin,

    #[error("Failed to read file {path}: {message}")]
    UnreadableFile { path: PathBuf, message: String },

    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Probe(err) => err.to_string(),
            Self::EmptyStdin => "Stdin stream is empty.".to_string(),
            Self::UnreadableFile { path, message } => {
                format!("Failed to read file {}: {message}", path.display())
            }
            Self::Other(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
