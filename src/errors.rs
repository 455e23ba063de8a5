use std::io;

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum FadeError {
    #[error("Couldn't find input file '{0}'")]
    NotFound(String),

    #[error("Failed to decode image '{0}': {1}")]
    Decode(String, String),

    #[error("Failed to encode image '{0}': {1}")]
    Encode(String, String),

    #[error("Error during file IO for '{0}': {1}")]
    Io(String, io::ErrorKind),
}
