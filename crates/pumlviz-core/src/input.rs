//! Resolves the diagram argument: a path to an existing file, or literal text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing input\nUsage: pumlviz <plantuml-text|file-path> [output-path]")]
    Missing,
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns the diagram text for `arg`. If `arg` names an existing path its
/// contents are read as UTF-8; otherwise `arg` itself is the text.
/// Absent or empty input is `InputError::Missing`.
pub fn resolve(arg: Option<&str>) -> Result<String, InputError> {
    let arg = match arg {
        Some(a) if !a.is_empty() => a,
        _ => return Err(InputError::Missing),
    };

    let path = Path::new(arg);
    let text = if path.exists() {
        tracing::debug!("reading diagram from {}", path.display());
        fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        arg.to_string()
    };

    if text.is_empty() {
        return Err(InputError::Missing);
    }
    Ok(text)
}
