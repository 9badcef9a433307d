//! Builds render URLs and downloads the rendered diagram.
//!
//! Uses the curl crate (libcurl) for a single GET; the blocking transfer runs
//! on tokio's blocking pool so callers can simply `.await` it.

mod download;
mod error;

pub use download::{download_to, temp_path, TEMP_SUFFIX};
pub use error::FetchError;

use crate::config::PumlConfig;
use std::path::Path;
use std::time::Duration;

/// Curl timeouts for the image GET.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub connect: Duration,
    pub total: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(15),
            total: Duration::from_secs(60),
        }
    }
}

/// Render server client: a fixed URL prefix plus timeouts.
#[derive(Debug, Clone)]
pub struct Fetcher {
    server: String,
    timeouts: Timeouts,
}

impl Fetcher {
    /// `server` is used verbatim as the prefix, so it normally ends with the
    /// output format and a slash (e.g. `https://host/png/`).
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            timeouts: Timeouts::default(),
        }
    }

    pub fn from_config(cfg: &PumlConfig) -> Self {
        Self::new(cfg.server.clone()).with_timeouts(cfg.timeouts())
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Server prefix + token. Tokens are URL-safe, so nothing is escaped.
    pub fn url_for(&self, token: &str) -> String {
        format!("{}{}", self.server, token)
    }

    /// Returns the render URL for `token`. When `dest` is given, also downloads
    /// the image there (overwriting); without it no network I/O happens.
    pub async fn fetch(&self, token: &str, dest: Option<&Path>) -> Result<String, FetchError> {
        let url = self.url_for(token);
        tracing::debug!("render url: {}", url);

        let Some(dest) = dest else {
            return Ok(url);
        };

        let task_url = url.clone();
        let task_dest = dest.to_path_buf();
        let timeouts = self.timeouts;
        let result = tokio::task::spawn_blocking(move || {
            download_to(&task_url, &task_dest, timeouts)
        })
        .await?;

        match result {
            Ok(written) => {
                tracing::info!("saved {} bytes from {} to {}", written, url, dest.display());
                Ok(url)
            }
            Err(e) => {
                tracing::warn!("fetch {} failed: {}", url, e);
                Err(e)
            }
        }
    }
}
