//! Default command: encode the diagram, print its URL, optionally save the image.

use anyhow::{Context, Result};
use pumlviz_core::{encode, Fetcher};
use std::io::Write;
use std::path::Path;

pub async fn run_visualize(
    fetcher: &Fetcher,
    text: &str,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let token = encode(text);
    tracing::debug!(
        "encoded {} bytes of diagram text into {} symbols",
        text.len(),
        token.len()
    );

    writeln!(out, "URL: {}", fetcher.url_for(&token))?;
    fetcher
        .fetch(&token, output)
        .await
        .context("visualization failed")?;
    if let Some(path) = output {
        writeln!(out, "Saved to: {}", path.display())?;
    }
    Ok(())
}
