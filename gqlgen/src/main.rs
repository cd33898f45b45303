//! gqlgen command line.
//!
//! Typical use from a Go package:
//!
//! ```text
//! //go:generate gqlgen --schemas ../schema.graphql --entities Person --out models.go --package models
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gqlgen::{Config, OutputItem};
use tracing_subscriber::EnvFilter;

/// Generate Go structs and enums from GraphQL schemas
#[derive(Parser, Debug)]
#[command(name = "gqlgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Comma-separated schema files, merged in order
    #[arg(short, long, value_delimiter = ',')]
    schemas: Vec<PathBuf>,

    /// Comma-separated entities to generate (default: all)
    #[arg(short, long, value_delimiter = ',')]
    entities: Vec<String>,

    /// Output file
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Go package name
    #[arg(short, long, default_value = "main")]
    package: String,

    /// Skip the generated-code header
    #[arg(long)]
    no_header: bool,

    /// TOML run configuration, used instead of the flags above
    #[arg(short, long, conflicts_with_all = ["schemas", "entities", "out", "no_header"])]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        if let Some(path) = self.config {
            return Config::from_file(&path)
                .with_context(|| format!("loading {}", path.display()));
        }

        Ok(Config {
            schemas: self.schemas,
            outputs: vec![OutputItem {
                entities: self.entities,
                disable_header: self.no_header,
                ..OutputItem::new(self.out.unwrap_or_default(), self.package)
            }],
        })
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.into_config()?;
    gqlgen::run(&config).context("generation failed")?;

    Ok(())
}
