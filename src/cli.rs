use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// calctui - A desk calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "calctui")]
#[command(about = "A keyboard and mouse driven desk calculator for the terminal")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write log output to this file.
    ///
    /// The interactive calculator owns the terminal, so without this flag its
    /// logs are discarded. Headless commands log to stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive calculator (default)
    Run,
    /// Evaluate a key script without a terminal UI
    ///
    /// Characters are keys as typed (e.g. "5+3*2="); control keys are
    /// written in braces: {bs}, {c}, {ce}, {enter}.
    Eval {
        /// The key script to feed to the calculator
        keys: String,

        /// Print the display after every key
        #[arg(long)]
        trace: bool,

        /// Print the final calculator state as JSON
        #[arg(long, conflicts_with = "trace")]
        json: bool,
    },
    /// Validate a settings file
    Validate {
        /// Path to settings file to validate
        config: PathBuf,
    },
    /// Write the default settings to a file
    InitConfig {
        /// Destination path
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
