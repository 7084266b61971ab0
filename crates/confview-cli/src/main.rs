mod output;

use anyhow::{Context, Result};
use clap::Parser;
use confview_core::{project, select_slice, ConfigurationState};
use output::OutputFormat;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "confview")]
#[command(about = "Display a configuration snapshot as sorted key/value pairs", long_about = None)]
struct Cli {
    /// JSON snapshot to read (`-` or omitted reads stdin)
    file: Option<PathBuf>,

    /// JSON pointer to the configuration slice (e.g. /configuration)
    #[arg(short, long, default_value = "")]
    slice: String,

    /// Output format (table, json, csv) [env: CONFVIEW_OUTPUT]
    #[arg(short, long)]
    output: Option<OutputFormat>,
}

/// Output format from `CONFVIEW_OUTPUT`, or table when unset or unrecognised
fn get_default_output(env_value: Option<&str>) -> OutputFormat {
    match env_value.map(str::parse::<OutputFormat>) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            warn!("Ignoring CONFVIEW_OUTPUT: {}; using table", e);
            OutputFormat::default()
        }
        None => OutputFormat::default(),
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("confview=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let env_output = std::env::var("CONFVIEW_OUTPUT").ok();

    run(cli, env_output.as_deref(), io::stdin().lock(), io::stdout().lock())
}

fn run(cli: Cli, env_output: Option<&str>, stdin: impl Read, mut out: impl Write) -> Result<()> {
    let format = cli
        .output
        .unwrap_or_else(|| get_default_output(env_output));

    let input = read_input(cli.file.as_ref(), stdin)?;
    let document: serde_json::Value =
        serde_json::from_str(&input).context("snapshot is not valid JSON")?;

    let slice = select_slice(&document, &cli.slice)?;
    let state = ConfigurationState::from_json_value(slice)?;
    info!(entries = state.len(), slice = %cli.slice, "Loaded configuration snapshot");

    let pairs = project(&state);
    debug!(?format, "Rendering configuration view");

    let rendered = output::render(&pairs, format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    Ok(())
}

fn read_input(path: Option<&PathBuf>, mut stdin: impl Read) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read snapshot from {}", p.display())),
        _ => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read snapshot from stdin")?;
            Ok(buf)
        }
    }
}
