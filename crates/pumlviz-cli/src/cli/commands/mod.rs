//! CLI command handlers.

mod decode;
mod visualize;

pub use decode::run_decode;
pub use visualize::run_visualize;
