#![allow(clippy::result_large_err)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use holey::StoragePolicy;
use miette::NamedSource;
use owo_colors::OwoColorize;

mod error;
mod repl;
mod script;
mod session;

use error::CliError;
use session::Session;

#[derive(Parser)]
#[command(name = "holey", about = "Run array commands against sparse, hole-preserving arrays")]
struct Cli {
    /// Path to a command script to execute
    file: Option<PathBuf>,
    /// Execute inline commands
    #[arg(long)]
    eval: Option<String>,
    /// Storage policy JSON file
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
    /// Log storage decisions to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "holey".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    setup_tracing(cli.verbose);

    let policy = match load_policy(cli.policy.as_deref()) {
        Ok(policy) => policy,
        Err(err) => fail(err, None),
    };

    if cli.file.is_none() && cli.eval.is_none() {
        if let Err(err) = repl::run(policy, cli.json) {
            fail(err, None);
        }
        return;
    }

    let (source, name) = match (cli.eval, cli.file) {
        (Some(code), _) => (code, "<eval>".to_string()),
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(source) => (source, path.display().to_string()),
            Err(source) => fail(CliError::Io { path, source }, None),
        },
        (None, None) => return,
    };

    let mut session = Session::new(policy);
    let json = cli.json;
    let result = session.run_source(&source, |outcome| {
        println!("{}", outcome.render(json)?);
        Ok(())
    });
    if let Err(err) = result {
        fail(err, Some((name, source)));
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("HOLEY_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("holey=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

fn load_policy(path: Option<&Path>) -> Result<StoragePolicy, CliError> {
    let Some(path) = path else {
        return Ok(StoragePolicy::default());
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let policy: StoragePolicy = serde_json::from_str(&text).map_err(|err| CliError::Config {
        message: format!("{}: {err}", path.display()),
    })?;
    policy.validate()?;
    tracing::debug!(?policy, "loaded storage policy");
    Ok(policy)
}

/// Print `err` through miette, with the script attached when there is one,
/// and exit.
fn fail(err: CliError, source: Option<(String, String)>) -> ! {
    let report = miette::Report::new(err);
    let report = match source {
        Some((name, source)) => report.with_source_code(NamedSource::new(name, source)),
        None => report,
    };
    eprintln!("{} {report:?}", "error:".red().bold());
    process::exit(1);
}
