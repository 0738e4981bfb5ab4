//! Run a selector over every subject of a JSON model

use serde::Serialize;
use tracing::{debug, warn};

use super::CliError;
use crate::{
    CompiledSelector,
    model::{Model, Subject, SubjectKind},
    signature,
};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The selector expression
    pub expression: String,
    /// JSON model
    pub input: Option<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
    /// Skip subjects that raise a kind mismatch instead of failing
    pub skip_mismatch: bool,
}

/// A subject the selector matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedSubject {
    pub kind: SubjectKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl MatchedSubject {
    fn new(subject: Subject<'_>) -> Self {
        let signature = match subject {
            Subject::Method(method) => Some(signature::method_signature(method)),
            Subject::Field(field) => Some(signature::field_signature(field)),
            Subject::Type(_) | Subject::Null => None,
        };
        MatchedSubject {
            kind: subject.kind(),
            name: subject.qualified_name(),
            signature,
        }
    }
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Syntax validation passed; holds the normalised expression
    SyntaxValid(String),
    /// Matching subjects in enumeration order
    Matches(Vec<MatchedSubject>),
}

/// Execute a selector check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let selector = CompiledSelector::compile(&options.expression)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid(selector.root().to_string()));
    }

    let json = options.input.as_deref().ok_or(CliError::NoInput)?;
    let model = Model::from_json(json)?;

    let mut matches = Vec::new();
    let mut skipped = 0usize;
    for subject in model.subjects() {
        match selector.matches(subject) {
            Ok(true) => matches.push(MatchedSubject::new(subject)),
            Ok(false) => {}
            Err(error) if options.skip_mismatch => {
                warn!(subject = %subject.qualified_name(), %error, "skipping subject");
                skipped += 1;
            }
            Err(source) => {
                return Err(CliError::Eval {
                    subject: subject.qualified_name(),
                    source,
                });
            }
        }
    }

    debug!(matched = matches.len(), skipped, "check finished");
    Ok(CheckResult::Matches(matches))
}
