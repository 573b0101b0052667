//! CLI for verse-tools - Annotate meeting outlines with the text of cited verses.

use std::env;
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verse_tools::{annotate, HttpLookup, LookupError, OfflineLookup, DEFAULT_ENDPOINT};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Annotate a meeting-outline transcript with the text of cited scripture verses
#[derive(Parser)]
#[command(name = "verse-tools")]
#[command(version)]
#[command(after_help = "\
Examples:
  verse-tools outline.txt > annotated.txt
  verse-tools outline.txt -o annotated.txt
  verse-tools --offline outline.txt
  cat outline.txt | verse-tools -

Citation forms: 'Scripture Reading: John 3:16; v. 18',
'... the word of God. - John 1:1', '... among us (John 1:14; vv. 16-17).'

Environment: LSM_API_URL overrides the lookup endpoint;
LSM_APP_ID and LSM_TOKEN supply Basic-auth credentials.")]
struct Cli {
    /// Input transcript file (use '-' for stdin)
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip verse lookups; emit comma-joined reference lists instead
    #[arg(long)]
    offline: bool,

    /// Increase diagnostic verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — input file not found / unreadable
    InputFile(String),
    /// Exit 11 — verse lookup transport failure
    Lookup(String),
    /// Exit 12 — cannot write output
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::Lookup(_) => 11,
            AppError::OutputFile(_) => 12,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::Lookup(msg) => {
                write!(
                    f,
                    "{}\n  hint: check network connectivity and the LSM_APP_ID/LSM_TOKEN credentials, or rerun with --offline",
                    msg
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 1. Read the transcript (support '-' for stdin)
    let input = read_input(&cli.input)?;

    // 2. Annotate, resolving citations through the configured lookup
    let lines = if cli.offline {
        annotate(&input, &OfflineLookup)
    } else {
        let lookup = http_lookup_from_env().map_err(|e| AppError::Lookup(e.to_string()))?;
        annotate(&input, &lookup)
    }
    .map_err(|e| AppError::Lookup(e.to_string()))?;

    // 3. Write to file or stdout
    write_output(cli.output.as_deref(), &lines)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Diagnostics go to stderr; RUST_LOG overrides the -v flags when set.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_input(input: &Path) -> Result<String, AppError> {
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::InputFile(format!("failed to read from stdin: {}", e)))?;
        Ok(buf)
    } else {
        fs::read_to_string(input)
            .map_err(|e| AppError::InputFile(format!("'{}': {}", input.display(), e)))
    }
}

fn write_output(output: Option<&Path>, lines: &[String]) -> Result<(), AppError> {
    let document = lines.join("\n");
    if let Some(output_path) = output {
        fs::write(output_path, document + "\n")
            .map_err(|e| AppError::OutputFile(format!("'{}': {}", output_path.display(), e)))?;
        eprintln!("wrote {}", output_path.display());
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", document)
            .map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
    }
    Ok(())
}

/// Builds the HTTP lookup from the environment: endpoint from LSM_API_URL
/// (falling back to the public endpoint), Basic-auth credentials from
/// LSM_APP_ID/LSM_TOKEN when both are present.
fn http_lookup_from_env() -> Result<HttpLookup, LookupError> {
    let endpoint = env::var("LSM_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let credentials = match (env::var("LSM_APP_ID"), env::var("LSM_TOKEN")) {
        (Ok(app_id), Ok(token)) => Some((app_id, token)),
        _ => None,
    };
    HttpLookup::new(endpoint, credentials)
}
