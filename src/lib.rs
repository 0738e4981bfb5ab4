pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod registry;
pub mod signature;

pub use ast::{Lexeme, LexemeKind, Node};
pub use evaluator::{CompiledSelector, EvalError, eval};
pub use lexer::{LexError, Lexer};
pub use model::{Model, ModelError, Subject, SubjectKind};
pub use parser::{ParseError, Parser};

/// Compile `expression` into a reusable selector.
pub fn compile(expression: &str) -> Result<CompiledSelector, ParseError> {
    CompiledSelector::compile(expression)
}
