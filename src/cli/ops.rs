//! Single path operations and their printable results.

use super::args::{BatchArgs, BatchOp, Commands};
use crate::{
    config::SiteConfig,
    utils::path::{self, FileAndExt, UrlStyle, fs::abs_pathify},
};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// One operation with its parameters resolved against the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Slug { lower: bool },
    Title,
    Split,
    Filename,
    ReplaceExt(String),
    Section,
    Prep(UrlStyle),
    Abs { working_dir: String },
}

/// Result of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Text(String),
    Split(FileAndExt),
}

impl Outcome {
    /// Plain-text form: the string itself, or `name<TAB>ext`.
    pub fn to_plain(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Split(split) => format!("{}\t{}", split.name, split.ext),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

impl Op {
    /// Resolve a single-input subcommand into an operation and its input.
    ///
    /// Returns `None` for commands that are not path operations.
    pub fn from_command<'a>(command: &'a Commands, config: &SiteConfig) -> Option<(Self, &'a str)> {
        let resolved = match command {
            Commands::Slug { text, lower } => (Self::Slug { lower: *lower }, text),
            Commands::Title { slug } => (Self::Title, slug),
            Commands::Split { path } => (Self::Split, path),
            Commands::Filename { path } => (Self::Filename, path),
            Commands::Ext { path, new_ext } => (Self::ReplaceExt(new_ext.clone()), path),
            Commands::Section { path } => (Self::Section, path),
            Commands::Prep { path, style } => {
                (Self::Prep(style.unwrap_or(config.url.style)), path)
            }
            Commands::Abs { path } => (
                Self::Abs {
                    working_dir: config.working_dir(),
                },
                path,
            ),
            Commands::Batch { .. } | Commands::Highlight { .. } => return None,
        };
        Some((resolved.0, resolved.1.as_str()))
    }

    /// Resolve batch arguments into an operation.
    pub fn from_batch(args: &BatchArgs, config: &SiteConfig) -> Self {
        match args.op {
            BatchOp::Slug => Self::Slug { lower: args.lower },
            BatchOp::Title => Self::Title,
            BatchOp::Split => Self::Split,
            BatchOp::Filename => Self::Filename,
            BatchOp::Ext => Self::ReplaceExt(args.new_ext.clone().unwrap_or_default()),
            BatchOp::Section => Self::Section,
            BatchOp::Prep => Self::Prep(args.style.unwrap_or(config.url.style)),
            BatchOp::Abs => Self::Abs {
                working_dir: config.working_dir(),
            },
        }
    }

    pub fn apply(&self, input: &str) -> Outcome {
        let text = match self {
            Self::Slug { lower: false } => path::make_path(input),
            Self::Slug { lower: true } => path::make_path_to_lower(input),
            Self::Title => path::make_title(input),
            Self::Split => return Outcome::Split(path::file_and_ext(input)),
            Self::Filename => path::filename(input),
            Self::ReplaceExt(ext) => path::replace_extension(input, ext),
            Self::Section => path::guess_section(input),
            Self::Prep(style) => path::path_prep(*style, input),
            Self::Abs { working_dir } => abs_pathify(input, working_dir),
        };
        Outcome::Text(text)
    }
}
