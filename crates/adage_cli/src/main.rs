//! Command-line front end for `adage_core`.
//!
//! # Responsibility
//! - Parse flags and dispatch to the adage service.
//! - Map repository errors to exit codes and stderr messages.

use adage_core::{
    default_log_level, init_logging, open_db, AdageService, LogConfig, NewAdage, PooledCodec,
    RedbAdageRepository, RepoError,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "adage", version, about = "Store adages and draw one at random")]
struct Cli {
    /// Database file; created when missing.
    #[arg(long, global = true, default_value = "adages.redb")]
    db: PathBuf,

    /// Directory for rotated log files. File logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Level for file logging; only valid together with `--log-dir`.
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Store a new adage and print its id.
    Add {
        body: String,
        /// Repeat to attach several tags.
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        source: String,
    },
    /// Print one stored adage chosen at random.
    Random,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(&LogConfig::new(level, log_dir)) {
            eprintln!("adage: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RepoError::NotFound) => {
            eprintln!("adage: no adages stored yet");
            ExitCode::FAILURE
        }
        Err(err) => {
            // No-op unless `--log-dir` started the file logger.
            log::error!("event=cli_command module=cli status=error error={err}");
            eprintln!("adage: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RepoError> {
    let db = open_db(&cli.db)?;
    let codec = PooledCodec::new();
    let service = AdageService::new(RedbAdageRepository::new(&db, &codec));

    match cli.command {
        Command::Add {
            body,
            tags,
            author,
            source,
        } => {
            let id = service.add_adage(NewAdage {
                body,
                tags,
                author,
                source,
                ..NewAdage::default()
            })?;
            println!("{id}");
        }
        Command::Random => {
            let adage = service.random_adage()?;
            println!("{}", adage.body);
            let attribution = [adage.author.as_str(), adage.source.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if !attribution.is_empty() {
                println!("  -- {attribution}");
            }
            if !adage.tags.is_empty() {
                println!("  [{}]", adage.tags.join(", "));
            }
        }
    }

    Ok(())
}
