use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use password_policy_lib::{
    config::{Settings, DEFAULT_CONFIG_FILE},
    PasswordValidator, WordListDictionary,
};
use serde_json::{json, Value};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

/// Exit status when the validator itself could not finish
const EXIT_INFRASTRUCTURE: u8 = 2;
const EXIT_REJECTED: u8 = 1;
const EXIT_VALID: u8 = 0;

#[derive(Parser, Debug)]
#[command(name = "password-policy", version, about = "Check passwords against a complexity policy")]
struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the password on the first line of stdin
    Check {
        /// Previous passwords, newest first, one per line
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Print the effective policy as JSON
    Policy,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_INFRASTRUCTURE)
        },
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = Settings::load_from(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;

    // Initialize tracing
    init_tracing(&settings.log_level);

    match cli.command {
        Command::Policy => {
            println!("{}", serde_json::to_string_pretty(&settings.policy)?);
            Ok(ExitCode::SUCCESS)
        },
        Command::Check { history } => {
            let (report, code) = check(&settings, history.as_deref(), io::stdin().lock())?;
            println!("{report}");
            Ok(ExitCode::from(code))
        },
    }
}

fn init_tracing(level: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Validate the candidate read from `input`; returns the JSON verdict and
/// the process exit status
fn check(
    settings: &Settings,
    history_path: Option<&Path>,
    input: impl BufRead,
) -> Result<(Value, u8)> {
    let dictionary = Arc::new(WordListDictionary::new(&settings.dictionary.path));
    let validator = PasswordValidator::new(settings.policy.clone(), dictionary)?;

    let history = history_path.map(read_history).transpose()?;
    let candidate = read_candidate(input)?;

    let outcome = match validator.validate(
        Some(candidate.as_str()),
        history.as_ref().map(|entries| entries.as_slice()),
    ) {
        Ok(()) => (json!({ "valid": true }), EXIT_VALID),
        Err(failure) => {
            let code = if failure.is_policy_violation() {
                EXIT_REJECTED
            } else {
                EXIT_INFRASTRUCTURE
            };
            (json!({ "valid": false, "error": failure.to_report() }), code)
        },
    };
    Ok(outcome)
}

/// Read one line, without its terminator; the buffer is wiped on drop
fn read_candidate(mut input: impl BufRead) -> Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    input
        .read_line(&mut line)
        .context("reading password from stdin")?;
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(line)
}

fn read_history(path: &Path) -> Result<Zeroizing<Vec<String>>> {
    let contents = Zeroizing::new(
        fs::read_to_string(path)
            .with_context(|| format!("reading history from {}", path.display()))?,
    );
    let entries = contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Ok(Zeroizing::new(entries))
}
