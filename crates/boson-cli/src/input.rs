//! Reading JSON input from a file or stdin.

use serde_json::Value;
use std::io::{self, Read};
use thiserror::Error;

/// Errors reading command input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and parses JSON from `path`, or from stdin when no path is given.
pub fn read_json(path: Option<String>) -> Result<Value, InputError> {
    let text = match path {
        Some(path) => {
            tracing::debug!(%path, "reading input file");
            std::fs::read_to_string(&path).map_err(|source| InputError::File { path, source })?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&text)?)
}
