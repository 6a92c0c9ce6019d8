use std::path::PathBuf;

use clap::{Parser, Subcommand};
use swatch_common::ContrastMode;

/// Swatch: encode, decode and convert design-tool color names.
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Commands that take names, values or lines read them from stdin (one per
/// line) when none are given on the command line.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode color names and print each record as JSON.
    Decode { names: Vec<String> },

    /// Encode JSON records as color names.
    Encode {
        records: Vec<String>,
        /// Write full key names instead of the short codes.
        #[arg(long)]
        long_keys: bool,
    },

    /// Parse color values and print their normalized form.
    ParseColor { values: Vec<String> },

    /// Print `black` or `white`: the text color to use over each value.
    Contrast {
        values: Vec<String>,
        /// How gradients are reduced (pointwise, average).
        #[arg(long)]
        mode: Option<ContrastMode>,
        /// Sample position for pointwise mode, 0.0-1.0.
        #[arg(long)]
        position: Option<f64>,
    },

    /// Sort lines by their leading color code.
    Sort { lines: Vec<String> },

    /// Export color names as a JSON object keyed by code.
    Export {
        names: Vec<String>,
        /// Keep input order instead of natural code order.
        #[arg(long)]
        unsorted: bool,
        /// Write a dated export file into this directory instead of stdout.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Export color names as a naturally sorted JSON array.
    ExportNames {
        names: Vec<String>,
        #[arg(long)]
        long_keys: bool,
    },

    /// Import a JSON export (object or names array) and print the names.
    Import {
        /// JSON file; stdin when omitted.
        file: Option<PathBuf>,
        #[arg(long)]
        long_keys: bool,
    },

    /// Rewrite legacy `A01號色 <colors> - <description>` names.
    Migrate {
        names: Vec<String>,
        /// Gradient stop positions, e.g. `0,1`, used for multi-color names.
        #[arg(long, value_delimiter = ',')]
        stops: Option<Vec<f64>>,
        #[arg(long)]
        long_keys: bool,
    },

    /// Print a theme colors snippet.
    Snippet {
        names: Vec<String>,
        /// Also copy the snippet to the clipboard.
        #[arg(long)]
        copy: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
