//! CLI command definitions for the `mindspace` binary.
//!
//! Uses clap derive macros for argument parsing. Every command except
//! `completions` prepares the classifier (embed + cluster) before running.

pub mod centroids;
pub mod classify;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indicatif::{ProgressBar, ProgressStyle};

use mindspace_infra::config::DEFAULT_CONFIG_FILE;
use mindspace_observe::tracing_setup::{LogFormat, TracingOptions};

/// Nearest-centroid sentiment classification service.
#[derive(Parser)]
#[command(name = "mindspace", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the service configuration file.
    #[arg(long, global = true, env = "MINDSPACE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit log lines as JSON objects on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build centroids and serve the HTTP API.
    Serve {
        /// Address to bind (overrides `server.host`).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Build centroids and classify one or more texts.
    Classify {
        /// Texts to classify.
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Build centroids and show how many each class received.
    Centroids,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Log filter directives derived from `-v` / `--quiet`.
    pub fn log_directives(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn,mindspace=info",
            1 => "info,mindspace=debug",
            _ => "trace",
        }
    }

    pub fn tracing_options(&self) -> TracingOptions {
        let format = if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Text
        };
        TracingOptions::new(self.log_directives())
            .with_format(format)
            .with_otel(self.otel)
    }
}

/// Spinner shown while the classifier is being prepared. Hidden for
/// `--json` and `--quiet` so stdout stays parseable.
pub fn preparing_spinner(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Embedding training set and building centroids...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["mindspace", "serve", "--port", "9001", "--host", "0.0.0.0"])
            .unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(9001));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_classify_requires_text() {
        assert!(Cli::try_parse_from(["mindspace", "classify"]).is_err());
        let cli = Cli::try_parse_from(["mindspace", "--json", "classify", "good day", "bad day"])
            .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Classify { texts } => assert_eq!(texts, vec!["good day", "bad day"]),
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_log_directives() {
        let quiet = Cli::try_parse_from(["mindspace", "--quiet", "centroids"]).unwrap();
        assert_eq!(quiet.log_directives(), "error");
        let verbose = Cli::try_parse_from(["mindspace", "-vv", "centroids"]).unwrap();
        assert_eq!(verbose.log_directives(), "trace");
    }

    #[test]
    fn test_tracing_options_from_flags() {
        let cli = Cli::try_parse_from(["mindspace", "--log-json", "--otel", "centroids"]).unwrap();
        let options = cli.tracing_options();
        assert_eq!(options.format, LogFormat::Json);
        assert!(options.otel);
        assert_eq!(options.default_directives, "warn,mindspace=info");
    }
}
