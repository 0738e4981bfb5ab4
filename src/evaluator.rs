use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    ast::Node,
    lexer::Lexer,
    model::{Subject, SubjectKind},
    parser::{ParseError, Parser},
    registry::Table,
};

/// Errors that can occur while matching a subject.
///
/// A null subject never produces one of these; only a subject of a kind the
/// named function does not accept does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("{table} '{name}' cannot be applied to a {kind}")]
    KindMismatch {
        table: Table,
        name: &'static str,
        kind: SubjectKind,
    },
}

/// Evaluate `node` against `subject`.
///
/// `And` and `Or` evaluate their children in source order and stop at the
/// first child that decides the result, so a kind mismatch in a later child
/// is only reported when that child is reached. A converter with several
/// targets stops at the first target the converted expression holds for.
pub fn eval(node: &Node, subject: Subject<'_>) -> Result<bool, EvalError> {
    match node {
        Node::Or(children) => {
            for child in children {
                if eval(child, subject)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Node::And(children) => {
            for child in children {
                if !eval(child, subject)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Node::Not(child) => Ok(!eval(child, subject)?),
        Node::Converted { converter, child } => {
            for converted in converter.convert(subject)? {
                trace!(
                    converter = converter.name,
                    from = %subject.qualified_name(),
                    to = %converted.qualified_name(),
                    "converted subject"
                );
                if eval(child, converted)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Node::Terminal(predicate) => predicate.test(subject),
        Node::Regex { extractor, pattern } => Ok(extractor
            .extract(subject)?
            .is_some_and(|text| pattern.is_match(&text))),
    }
}

/// An expression compiled once and matched against any number of subjects.
///
/// # Examples
///
/// ```
/// use member_selector::{CompiledSelector, model::{Model, Subject}};
///
/// let model = Model::from_json(r#"{
///     "types": [{
///         "name": "a.Sut",
///         "fields": [
///             { "name": "i", "type": "int", "modifiers": ["private", "final"] },
///             { "name": "j", "type": "int", "modifiers": ["private"] }
///         ]
///     }]
/// }"#).unwrap();
///
/// let selector = CompiledSelector::compile("private & final").unwrap();
/// assert!(selector.matches(model.field("a.Sut", "i").unwrap()).unwrap());
/// assert!(!selector.matches(model.field("a.Sut", "j").unwrap()).unwrap());
/// assert!(!selector.matches(Subject::Null).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSelector {
    expression: String,
    root: Node,
}

impl CompiledSelector {
    pub fn compile(expression: &str) -> Result<Self, ParseError> {
        let root = Parser::new(Lexer::new(expression)).parse()?;
        debug!(expression, nodes = root.node_count(), "compiled selector");
        Ok(CompiledSelector {
            expression: expression.to_string(),
            root,
        })
    }

    /// Match a subject; anything convertible into a [`Subject`] is accepted,
    /// including `Option`s of handles where `None` is the null subject.
    pub fn matches<'m>(&self, subject: impl Into<Subject<'m>>) -> Result<bool, EvalError> {
        eval(&self.root, subject.into())
    }

    /// The source text this selector was compiled from.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}
