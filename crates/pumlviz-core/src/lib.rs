pub mod config;
pub mod logging;

pub mod encoder;
pub mod fetcher;
pub mod input;

pub use encoder::{decode, encode};
pub use fetcher::{FetchError, Fetcher};
