//! Blocking single-GET download into a `.part` file with atomic finalize.

use super::error::FetchError;
use super::Timeouts;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `out.png` → `out.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// GETs `url` and stores the body at `dest`, replacing any existing file.
/// Returns the number of body bytes written.
///
/// Runs in the current thread; call from `spawn_blocking` in async code.
/// On any error both the temp file and `dest` are removed, so a stale image
/// from an earlier run never survives a failed fetch.
pub fn download_to(url: &str, dest: &Path, timeouts: Timeouts) -> Result<u64, FetchError> {
    let part = temp_path(dest);
    let result = transfer(url, &part, timeouts)
        .and_then(|written| finalize(&part, dest).map(|()| written));
    if result.is_err() {
        discard(&part);
        discard(dest);
    }
    result
}

fn transfer(url: &str, part: &Path, timeouts: Timeouts) -> Result<u64, FetchError> {
    let file = File::create(part).map_err(|e| FetchError::io(part, e))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0u64;
    let mut write_error: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(timeouts.connect)?;
    easy.timeout(timeouts.total)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match writer.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_error = Some(e);
                Ok(0) // short count aborts the transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(FetchError::io(part, e));
    }
    performed?;

    let code = easy.response_code()?;
    if code != 200 {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }

    let file = writer
        .into_inner()
        .map_err(|e| FetchError::io(part, e.into_error()))?;
    file.sync_all().map_err(|e| FetchError::io(part, e))?;
    Ok(written)
}

fn finalize(part: &Path, dest: &Path) -> Result<(), FetchError> {
    fs::rename(part, dest).map_err(|e| FetchError::io(dest, e))
}

fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("failed to remove {}: {}", path.display(), e),
    }
}
