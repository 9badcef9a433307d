//! `pumlviz --decode <token|url>` – print the diagram text behind a token.

use anyhow::{Context, Result};
use pumlviz_core::decode;
use pumlviz_core::input::InputError;

pub fn run_decode(arg: Option<&str>) -> Result<()> {
    let arg = arg.filter(|a| !a.is_empty()).ok_or(InputError::Missing)?;
    let token = token_from_arg(arg);
    let text = decode(token).with_context(|| format!("cannot decode token {:?}", token))?;
    println!("{}", text);
    Ok(())
}

/// Accepts either a bare token or a full render URL; the token is the last path segment.
pub(crate) fn token_from_arg(arg: &str) -> &str {
    let trimmed = arg.trim().trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((_, token)) => token,
        None => trimmed,
    }
}
