//! Command-line interface definitions.

use crate::utils::path::UrlStyle;
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Path canonicalization for static site publishing
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Turn text into a path-safe slug
    Slug {
        /// Text to sanitize (e.g. a page title)
        text: String,

        /// Lower-case the result
        #[arg(short, long)]
        lower: bool,
    },

    /// Turn a slug back into a title
    Title {
        slug: String,
    },

    /// Split a path into file name and extension
    Split {
        path: String,
    },

    /// Print the file name of a path, without extension
    Filename {
        path: String,
    },

    /// Replace the extension of a path (keeps only the file name)
    Ext {
        path: String,

        /// New extension, without the dot
        new_ext: String,
    },

    /// Guess the content section from a path
    Section {
        path: String,
    },

    /// Rewrite a content path into its publish path
    #[command(visible_alias = "p")]
    Prep {
        path: String,

        /// Output shape (default: `url.style` from config)
        #[arg(short, long, value_enum)]
        style: Option<UrlStyle>,
    },

    /// Resolve a path against the configured working directory
    Abs {
        path: String,
    },

    /// Apply one operation to every line of stdin
    #[command(visible_alias = "b")]
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },

    /// Highlight code with the external `highlight` tool
    Highlight {
        #[command(flatten)]
        args: HighlightArgs,
    },
}

/// Operations available in batch mode.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOp {
    Slug,
    Title,
    Split,
    Filename,
    Ext,
    Section,
    Prep,
    Abs,
}

/// Batch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BatchArgs {
    /// Operation to apply
    #[arg(value_enum)]
    pub op: BatchOp,

    /// Lower-case slugs (`slug` only)
    #[arg(short, long)]
    pub lower: bool,

    /// Output shape (`prep` only, default: `url.style` from config)
    #[arg(short, long, value_enum)]
    pub style: Option<UrlStyle>,

    /// New extension (`ext` only)
    #[arg(short = 'e', long = "new-ext", required_if_eq("op", "ext"))]
    pub new_ext: Option<String>,
}

/// Highlight command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct HighlightArgs {
    /// Source file. Reads stdin when omitted or `-`.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Source language (default: `highlight.lexer` from config)
    #[arg(short, long)]
    pub lexer: Option<String>,

    /// Color theme (default: `highlight.style` from config)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Prefix lines with numbers
    #[arg(short = 'n', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub line_numbers: Option<bool>,
}
