use clap::{Parser, ValueEnum};
use code_json::shell::{self, Mode};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Decode JSON documents, encode everything else
    Convert,
    /// Always encode text into a JSON document
    Encode,
    /// Always decode a JSON document back into text
    Decode,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Convert => Mode::Convert,
            ModeArg::Encode => Mode::Encode,
            ModeArg::Decode => Mode::Decode,
        }
    }
}

/// Convert source code to a line-by-line JSON document and back.
#[derive(Debug, Parser)]
#[command(name = "code-json", version)]
struct Cli {
    /// Conversion direction
    #[arg(short, long, value_enum, default_value = "convert")]
    mode: ModeArg,

    /// Input file, `-` or absent reads stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file, `-` or absent writes stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = log_file.and_then(|path| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("cannot open log file {}: {}", path.display(), e))
            .ok()
    });

    match file {
        Some(f) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(f))
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref());

    tracing::debug!(?cli, "code-json starting");

    if let Err(e) = shell::run(cli.mode.into(), cli.input.as_deref(), cli.output.as_deref()) {
        tracing::error!(error = %e, "conversion aborted");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
