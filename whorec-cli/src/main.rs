use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use whorec_core::colors::PaletteExt;
use whorec_core::output::{HumanFormatter, JsonFormatter, OutputFormat, OutputFormatter};
use whorec_core::whois::{strategy_for, supported_suffixes};
use whorec_core::Response;

#[derive(Parser)]
#[command(name = "whorec")]
#[command(about = "Extract registration facts from raw WHOIS responses")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (human or json)
    #[arg(short, long, global = true, default_value = "human")]
    format: String,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Single-line JSON output
    #[arg(long, global = true)]
    compact: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a captured registry response
    Parse {
        /// Domain the response was requested for
        domain: String,
        /// File holding the raw response (stdin when omitted or "-")
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List registered suffixes and their parser
    Suffixes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let output_format: OutputFormat = cli.format.parse().unwrap_or_default();
    let formatter = build_formatter(output_format, cli.no_color, cli.compact);

    match cli.command {
        Commands::Parse { domain, file } => {
            let bytes = read_input(file.as_ref())?;
            debug!(domain = %domain, bytes = bytes.len(), "Read response");

            let response = Response::from_bytes(domain, &bytes);
            match response.parse() {
                Ok(Some(record)) => println!("{}", formatter.format_record(&record)),
                Ok(None) => println!("{}", formatter.format_absent(response.query())),
                Err(e) => {
                    eprintln!("{} {}", "Error:".failure(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Suffixes => {
            let entries: Vec<(&str, &str)> = supported_suffixes()
                .into_iter()
                .filter_map(|suffix| strategy_for(suffix).map(|p| (suffix, p.name())))
                .collect();

            match output_format {
                OutputFormat::Json => {
                    let map: serde_json::Map<String, serde_json::Value> = entries
                        .iter()
                        .map(|(suffix, name)| (suffix.to_string(), (*name).into()))
                        .collect();
                    let json = if cli.compact {
                        serde_json::to_string(&map)?
                    } else {
                        serde_json::to_string_pretty(&map)?
                    };
                    println!("{}", json);
                }
                OutputFormat::Human => {
                    for (suffix, name) in entries {
                        println!("{:<8} {}", suffix, name);
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_formatter(format: OutputFormat, no_color: bool, compact: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Human if no_color => Box::new(HumanFormatter::new().without_colors()),
        OutputFormat::Json if compact => Box::new(JsonFormatter::new().compact()),
        other => whorec_core::output::get_formatter(other),
    }
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read(path)?),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
