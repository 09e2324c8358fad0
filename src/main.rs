use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rhuff::{compress_file, decompress_file, Config, HuffError};
use tracing::{error, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, subcommand_negates_reqs = true)]
struct Args {
    // Command to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log more, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Files to compress when no command is given
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Compress every file to `<file>.<extension>`
    Compress {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Expand every `<file>.<extension>` back to `<file>`
    Decompress {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

impl Args {
    /// The command to run, compressing the bare file list by default.
    fn command(&self) -> Commands {
        match &self.command {
            Some(command) => command.clone(),
            None => Commands::Compress {
                files: self.files.clone(),
            },
        }
    }
}

fn max_level(config: &Config, verbose: u8) -> anyhow::Result<Level> {
    let configured = config.level()?;
    Ok(match verbose {
        0 => configured,
        1 => configured.max(Level::DEBUG),
        _ => Level::TRACE,
    })
}

fn report(path: &Path, e: &HuffError) {
    if e.is_skipped_input() {
        warn!(file = %path.display(), "skipping: {}", e);
    } else {
        error!(file = %path.display(), "{}", e);
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::new(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };

    tracing_subscriber::fmt()
        .with_max_level(max_level(&config, args.verbose)?)
        .with_writer(std::io::stderr)
        .init();

    let command = args.command();
    let files = match &command {
        Commands::Compress { files } | Commands::Decompress { files } => files,
    };

    let mut failed = 0;
    for path in files {
        let result = match &command {
            Commands::Compress { .. } => compress_file(path, &config),
            Commands::Decompress { .. } => decompress_file(path, &config),
        };
        if let Err(e) = result {
            report(path, &e);
            failed += 1;
        }
    }

    if failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
