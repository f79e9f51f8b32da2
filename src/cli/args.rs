use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for encoding text
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Scheme to encode with (see `decoder config list`)
    pub scheme: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Caesar shift, 1 through 25
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub shift: Option<i32>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding text
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Scheme to decode from
    pub scheme: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Caesar shift, 1 through 25
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub shift: Option<i32>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for converting a whole file line by line
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Scheme to apply to every line
    pub scheme: String,

    /// File to convert; CRLF line endings are read as LF
    pub file: PathBuf,

    /// Decode instead of encode
    #[arg(short = 'd', long)]
    pub decode: bool,

    /// Caesar shift, 1 through 25
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub shift: Option<i32>,

    /// Directory for the converted file (defaults to the input's directory)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for an interactive session over stdin
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Scheme to apply to every line
    pub scheme: String,

    /// Decode instead of encode
    #[arg(short = 'd', long)]
    pub decode: bool,

    /// Caesar shift, 1 through 25
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub shift: Option<i32>,

    /// Write the history report to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Export the history as JSON
    #[arg(long, requires = "export")]
    pub json: bool,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List available schemes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific scheme
    Show {
        /// Scheme name
        scheme: String,
    },

    /// Print the effective settings after all config layers are merged
    Settings {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
