//! linemark CLI - convert a Markdown file into an HTML fragment

use std::path::PathBuf;
use std::process;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

use linemark::{Error, Options};

const USAGE: &str = "Usage: linemark README.md README.html";

/// Convert a line-oriented Markdown file into an HTML fragment.
#[derive(Parser)]
#[command(
    name = "linemark",
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Markdown file to read.
    #[arg(allow_hyphen_values = true)]
    source: PathBuf,

    /// HTML file to write (replaced if it exists).
    #[arg(allow_hyphen_values = true)]
    destination: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    // Exactly two positionals; anything else is a usage error
    let Ok(cli) = Cli::try_parse() else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    match linemark::convert_file(&cli.source, &cli.destination, &Options::default()) {
        Ok(lines) => {
            info!(
                source = %cli.source.display(),
                destination = %cli.destination.display(),
                lines,
                "done"
            );
            Ok(())
        }
        Err(err @ Error::MissingSource { .. }) => {
            eprintln!("{err}");
            process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the quiet default.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linemark=warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
