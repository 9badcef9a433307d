//! CLI for pumlviz.

mod commands;

use anyhow::Result;
use clap::Parser;
use pumlviz_core::{config, input, Fetcher};
use std::path::PathBuf;

use commands::{run_decode, run_visualize};

/// Encode PlantUML text into a render-server URL, optionally downloading the image.
#[derive(Debug, Parser)]
#[command(name = "pumlviz")]
#[command(about = "Encode PlantUML text into a render URL and optionally save the image", long_about = None)]
pub struct Cli {
    /// PlantUML text, or a path to a file containing it.
    pub input: Option<String>,

    /// Where to save the rendered image. Without it only the URL is printed.
    pub output: Option<PathBuf>,

    /// Render server prefix, e.g. https://host/svg/ (overrides `server` in config.toml).
    #[arg(long, value_name = "PREFIX")]
    pub server: Option<String>,

    /// Treat INPUT as a token (or a render URL) and print the decoded PlantUML text.
    #[arg(long, conflicts_with = "output")]
    pub decode: bool,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        Cli::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        if self.decode {
            return run_decode(self.input.as_deref());
        }

        let text = input::resolve(self.input.as_deref())?;
        let cfg = config::load_or_default();
        tracing::debug!("loaded config: {:?}", cfg);
        let mut fetcher = Fetcher::from_config(&cfg);
        if let Some(server) = self.server {
            fetcher = Fetcher::new(server).with_timeouts(cfg.timeouts());
        }

        run_visualize(
            &fetcher,
            &text,
            self.output.as_deref(),
            &mut std::io::stdout(),
        )
        .await
    }
}
