//! Symbol tables for PlantUML's base64 dialect.
//!
//! PlantUML reuses base64's 6-bit grouping but orders the symbols digits
//! first. Remapping is a position-for-position substitution between the
//! URL-safe base64 alphabet and the PlantUML one.

/// URL-safe base64 symbols in value order (`+` and `/` already replaced).
pub const URL_SAFE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// PlantUML symbols in value order.
pub const PLANTUML: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Marks a byte with no entry in a table. No symbol in either alphabet is NUL.
const UNMAPPED: u8 = 0;

const fn build_table(from: &[u8; 64], to: &[u8; 64]) -> [u8; 128] {
    let mut table = [UNMAPPED; 128];
    let mut i = 0;
    while i < 64 {
        table[from[i] as usize] = to[i];
        i += 1;
    }
    table
}

static TO_PLANTUML: [u8; 128] = build_table(URL_SAFE, PLANTUML);
static FROM_PLANTUML: [u8; 128] = build_table(PLANTUML, URL_SAFE);

fn lookup(table: &[u8; 128], symbol: char) -> Option<char> {
    if !symbol.is_ascii() {
        return None;
    }
    match table[symbol as usize] {
        UNMAPPED => None,
        b => Some(b as char),
    }
}

/// Maps a URL-safe base64 symbol to its PlantUML counterpart.
/// Anything outside the alphabet (e.g. stray `=`) passes through unchanged.
pub fn to_plantuml(symbol: char) -> char {
    lookup(&TO_PLANTUML, symbol).unwrap_or(symbol)
}

/// Inverse of [`to_plantuml`]; `None` for symbols outside the PlantUML alphabet.
pub fn from_plantuml(symbol: char) -> Option<char> {
    lookup(&FROM_PLANTUML, symbol)
}

/// True if `symbol` belongs to the PlantUML alphabet.
pub fn is_token_symbol(symbol: char) -> bool {
    from_plantuml(symbol).is_some()
}
