//! CLI support for member-selector
//!
//! Provides programmatic access to the `selector` commands so they can be
//! embedded in other tools and tested without spawning a process.

mod check;
mod docs;

pub use check::{CheckOptions, CheckResult, MatchedSubject, execute_check};
pub use docs::{get_doc_entry, get_docs_overview};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Evaluation error on {subject}: {source}")]
    Eval {
        subject: String,
        #[source]
        source: crate::EvalError,
    },

    #[error("Invalid model: {0}")]
    Model(#[from] crate::ModelError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe a JSON model to stdin.")]
    NoInput,

    #[error("Unknown name: '{0}'\nRun 'selector docs' to see the vocabulary.")]
    UnknownName(String),
}
