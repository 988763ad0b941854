//! Command-line front end: load config, apply overrides, write one line.

use crate::config::Config;
use crate::internal;
use crate::level::{LOG_TEST, Level};
use crate::logger::{Log, Logger};
use clap::Parser;
use std::fmt::Display;
use std::path::PathBuf;

/// simplelog - Write one leveled log line.
#[derive(Debug, Parser)]
#[command(name = "simplelog", version, about = "Write one leveled log line")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum level, overriding the config file
    #[arg(short = 'l', long = "level", value_name = "LEVEL")]
    pub min_level: Option<String>,

    /// Sink for non-error lines: "stdout", "stderr" or a file path
    #[arg(long, value_name = "SINK")]
    pub out: Option<String>,

    /// Sink for error lines: "stdout", "stderr" or a file path
    #[arg(long, value_name = "SINK")]
    pub err: Option<String>,

    /// Print simplelog's own diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Message level: error, warning, info, debug or test
    pub level: String,

    /// Message, with printf-style verbs when ARGS are given
    pub message: String,

    /// Values substituted into MESSAGE; everything after MESSAGE is taken verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Folds the command-line overrides into `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(level) = &self.min_level {
            config.general.level.clone_from(level);
        }
        if let Some(out) = &self.out {
            config.output.stdout.clone_from(out);
        }
        if let Some(err) = &self.err {
            config.output.stderr.clone_from(err);
        }
    }
}

/// # Errors
/// Config loading or sink opening failures.
pub fn run(cli: &Cli) -> Result<(), crate::Error> {
    if cli.verbose {
        internal::init(LOG_TEST);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);

    if cli.level.parse::<Level>().is_err() {
        internal::warning(&format!(
            "Unknown level '{}', filtered as debug",
            cli.level
        ));
    }

    let logger = Logger::from_config(&config)?;
    let args: Vec<&dyn Display> = cli.args.iter().map(|a| a as &dyn Display).collect();
    logger.write(&cli.level, &cli.message, &args);
    logger.flush()
}
