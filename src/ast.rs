//! # Selector Language - Syntax
//!
//! Lexemes produced by the [lexer](crate::lexer) and the compiled tree
//! produced by the [parser](crate::parser).
//!
//! - **[tokens]** - lexical elements (`Lexeme`, `LexemeKind`)
//! - **[nodes]** - compiled selector tree (`Node`)
//!
//! ## Quick Start
//!
//! ```text
//! private & !final & declaringClass -> !(simpleName ~ /Test/)
//! ```
//!
//! Selects private, mutable members whose declaring type is not named like a
//! test.
//!
//! ## Operators
//!
//! From tightest to loosest binding:
//!
//! | Operator | Meaning |
//! |---|---|
//! | `!x` | negation |
//! | `x & y` | conjunction |
//! | `x \| y` | disjunction |
//! | `name -> x` | evaluate `x` against the converted subject |
//!
//! `name ~ /regex/` is a leaf that searches the text extracted by `name`.
//! Parentheses group, and `\/` writes a literal slash inside a regex.

pub mod nodes;
pub mod tokens;

pub use nodes::Node;
pub use tokens::{Lexeme, LexemeKind};
