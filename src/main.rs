//! icon-elements CLI - generates one custom element module per SVG icon
//!
//! Usage: icon-elements [OPTIONS]
//!
//! Reads `icon-elements.toml` from the working directory when present,
//! regenerates the output root, and reports progress on stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use icon_elements::application::{GenerateOptions, GenerateUseCase};
use icon_elements::config;
use icon_elements::domain::ports::GenerateEventSink;
use icon_elements::infrastructure::{JsonEventSink, LocalFs, Transforms};
use tracing_subscriber::EnvFilter;

mod ui;

use ui::context::UiContext;
use ui::output::{print_config_warnings, render_error};
use ui::views::generate::PhaseReporter;

/// Generate self-registering custom elements from an SVG icon set
#[derive(Parser, Debug)]
#[command(name = "icon-elements")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: icon-elements.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit NDJSON events on stdout instead of the status stream
    #[arg(long)]
    json: bool,

    /// Only report failures
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How a run ended once it got past configuration
enum Outcome {
    Generated,
    /// The failure was already reported through the event sink
    Failed,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.quiet, cli.verbose);

    init_tracing(cli.verbose);

    match run(&cli, &ui) {
        Ok(Outcome::Generated) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::FAILURE,
        Err(error) => {
            if ui.json {
                let event = serde_json::json!({
                    "event": "error",
                    "message": format!("{:#}", error),
                });
                println!("{}", event);
            } else {
                eprint!("{}", render_error(&error, ui.color, ui.unicode));
            }
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` enables info, `-vv` debug, `-vvv` trace
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("icon_elements={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, ui: &UiContext) -> Result<Outcome> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;

    let loaded = config::resolve(cli.config.as_deref(), &cwd)?;
    if let Some(file) = &loaded.file {
        tracing::info!(config = %file.display(), "loaded configuration");
    }
    print_config_warnings(ui, &loaded.warnings);

    let options = GenerateOptions::from_config(&loaded.config);
    let transforms = Transforms::from_config(&loaded.config.transforms);
    let use_case = GenerateUseCase::new(LocalFs::new(), transforms);

    let sink: Arc<dyn GenerateEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(PhaseReporter::stderr(*ui))
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("cannot start async runtime")?;

    match runtime.block_on(use_case.execute_with_events(&options, sink)) {
        Ok(result) => {
            tracing::info!(
                artifacts = result.artifact_count(),
                output = %result.output.display(),
                "generate finished"
            );
            Ok(Outcome::Generated)
        }
        Err(error) => {
            tracing::debug!(%error, "generate failed");
            Ok(Outcome::Failed)
        }
    }
}
