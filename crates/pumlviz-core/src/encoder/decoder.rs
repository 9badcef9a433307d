//! Token → text, the inverse of [`super::encode`].

use super::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::DeflateDecoder;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid token symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("inflate failed: {0}")]
    Inflate(#[source] std::io::Error),
    #[error("decoded diagram is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decodes a PlantUML token back into diagram text.
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let mut b64 = String::with_capacity(token.len() + 3);
    for (position, symbol) in token.chars().enumerate() {
        let c = alphabet::from_plantuml(symbol)
            .ok_or(DecodeError::InvalidSymbol { symbol, position })?;
        b64.push(match c {
            '-' => '+',
            '_' => '/',
            c => c,
        });
    }
    while b64.len() % 4 != 0 {
        b64.push('=');
    }

    let compressed = STANDARD.decode(b64.as_bytes())?;
    let mut bytes = Vec::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_end(&mut bytes)
        .map_err(DecodeError::Inflate)?;
    Ok(String::from_utf8(bytes)?)
}
