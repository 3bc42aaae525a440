//! Sitemapper CLI - sitemap.xml generation from JSON page data.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::Overrides;

#[derive(Parser)]
#[command(name = "sitemapper")]
#[command(about = "Generate sitemap.xml from JSON page data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to sitemap.toml config file
    #[arg(short, long, default_value = "sitemap.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write sitemap.xml from page data
    Generate {
        /// JSON page data file, or "-" for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Base URL prepended to every link
        #[arg(short, long, env = "SITEMAP_BASE_URL")]
        base_url: Option<String>,

        /// Output file (defaults to config or "sitemap.xml")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write robots.txt next to the sitemap
        #[arg(long)]
        robots: bool,

        /// Add the sitemaps.org xmlns attribute
        #[arg(long)]
        namespace: bool,
    },

    /// Validate page data without writing anything
    Check {
        /// JSON page data file, or "-" for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Base URL prepended to every link
        #[arg(short, long, env = "SITEMAP_BASE_URL")]
        base_url: Option<String>,
    },

    /// Create a starter config and page data file
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Generate {
            input,
            base_url,
            output,
            robots,
            namespace,
        } => {
            let overrides = Overrides {
                input,
                base_url,
                output,
                robots,
                namespace,
            };
            commands::generate::run(&cli.config, overrides)?;
        }
        Commands::Check { input, base_url } => {
            let overrides = Overrides {
                input,
                base_url,
                ..Default::default()
            };
            commands::check::run(&cli.config, overrides)?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "sitemapper",
            "generate",
            "-i",
            "nav.json",
            "-b",
            "https://example.com",
            "--robots",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                input,
                base_url,
                output,
                robots,
                namespace,
            } => {
                assert_eq!(input, Some(PathBuf::from("nav.json")));
                assert_eq!(base_url.as_deref(), Some("https://example.com"));
                assert_eq!(output, None);
                assert!(robots);
                assert!(!namespace);
            }
            _ => panic!("expected generate"),
        }
        assert_eq!(cli.config, PathBuf::from("sitemap.toml"));
    }

    #[test]
    fn config_flag_precedes_subcommand() {
        let cli = Cli::try_parse_from(["sitemapper", "-c", "site/sitemap.toml", "-v", "init", "-y"])
            .unwrap();

        assert_eq!(cli.config, PathBuf::from("site/sitemap.toml"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Init { yes: true }));
    }

    #[test]
    fn requires_subcommand() {
        assert!(Cli::try_parse_from(["sitemapper"]).is_err());
    }
}
