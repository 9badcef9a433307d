//! Text → token encoding for PlantUML render servers.
//!
//! Pipeline: UTF-8 bytes, raw deflate at the highest level, standard base64,
//! URL-safe substitution with padding stripped, then the PlantUML alphabet
//! remap. [`decode`] runs it backwards.

pub mod alphabet;
mod decoder;

pub use alphabet::is_token_symbol;
pub use decoder::{decode, DecodeError};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::Write;

/// Encodes diagram text into the token a PlantUML server expects after its
/// format prefix (e.g. `/png/`). Deterministic; the result needs no URL escaping.
pub fn encode(text: &str) -> String {
    let compressed = deflate_raw(text.as_bytes());
    let b64 = STANDARD.encode(compressed);

    b64.trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .map(alphabet::to_plantuml)
        .collect()
}

/// Raw DEFLATE (no zlib header or checksum) at `Compression::best()`.
fn deflate_raw(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(
        Vec::with_capacity(data.len() / 2 + 16),
        Compression::best(),
    );
    // The sink is a Vec, so neither call can hit an I/O error.
    encoder
        .write_all(data)
        .expect("deflate into memory buffer failed");
    encoder.finish().expect("deflate into memory buffer failed")
}
