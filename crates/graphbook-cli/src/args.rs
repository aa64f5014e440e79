//! Command-line argument definitions for the Graphbook CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global arguments control configuration file selection and
//! logging verbosity; each [`Command`] selects what to do with the catalog.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Graphbook diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the Graphbook CLI
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered diagram names
    List {
        /// Only list diagrams in this collection (tensorflow-intro, rnn, custom)
        #[arg(long)]
        collection: Option<String>,
    },

    /// Print the DOT source a name (or literal DOT) resolves to
    Show {
        /// Diagram name, or DOT text
        input: String,
    },

    /// Render a diagram through Graphviz
    Render {
        /// Diagram name, or DOT text
        input: String,

        /// Output path; the format's extension is added when missing
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (svg, png, pdf, jpeg, json, plain, dot)
        #[arg(short, long)]
        format: Option<String>,

        /// Layout engine (dot, neato, fdp, sfdp, circo, twopi)
        #[arg(short, long)]
        engine: Option<String>,
    },

    /// Parse one diagram, or every registered diagram, and report syntax errors
    Check {
        /// Diagram name, or DOT text; checks the whole registry when omitted
        input: Option<String>,
    },
}
