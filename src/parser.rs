use regex::Regex;
use thiserror::Error;

use crate::{
    ast::{Lexeme, LexemeKind, Node},
    lexer::{LexError, Lexer},
    registry,
};

/// Errors raised while compiling an expression. No partial tree is ever
/// returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expression is empty")]
    Empty,

    #[error("expected {expected}, found {found} at '{rest}'")]
    Unexpected {
        found: String,
        expected: &'static str,
        rest: String,
    },

    #[error("no such predicate: '{0}'")]
    UnknownPredicate(String),

    #[error("no such converter: '{0}'")]
    UnknownConverter(String),

    #[error("no such extractor: '{0}'")]
    UnknownExtractor(String),

    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("invalid regular expression /{pattern}/: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Deepest nesting of parentheses, `!` and converter right-hand sides the
/// parser accepts. Evaluation recurses once per level, so this also bounds
/// the evaluator's stack use.
pub const MAX_DEPTH: usize = 128;

/// Recursive-descent parser for selector expressions.
///
/// ```text
/// expression := or
/// or         := and ('|' and)*
/// and        := unary ('&' unary)*
/// unary      := '!' unary | primary
/// primary    := '(' expression ')' | word
/// word       := NAME '~' REGEX
///             | NAME '-' '>' expression
///             | NAME
/// ```
pub struct Parser {
    lexer: Lexer,
    depth: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer, depth: 0 }
    }

    /// Parse the whole input into a single tree.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        if self.lexer.peek()?.is_end() {
            return Err(ParseError::Empty);
        }
        let node = self.parse_expression()?;
        if !self.lexer.peek()?.is_end() {
            return Err(self.unexpected("an operator or end of input"));
        }
        Ok(node)
    }

    fn advance(&mut self) -> Result<Lexeme, ParseError> {
        Ok(self.lexer.next_lexeme()?)
    }

    fn check(&mut self, symbol: char) -> Result<bool, ParseError> {
        Ok(self.lexer.peek()?.is_symbol(symbol))
    }

    fn expect(&mut self, symbol: char, expected: &'static str) -> Result<(), ParseError> {
        if !self.check(symbol)? {
            return Err(self.unexpected(expected));
        }
        self.advance()?;
        Ok(())
    }

    /// Describe the peeked lexeme as an error.
    fn unexpected(&mut self, expected: &'static str) -> ParseError {
        let found = match self.lexer.peek() {
            Ok(lexeme) => lexeme.to_string(),
            Err(err) => return err.into(),
        };
        ParseError::Unexpected {
            found,
            expected,
            rest: self.lexer.remaining(),
        }
    }

    /// Run `parse` one nesting level deeper.
    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<Node, ParseError>,
    ) -> Result<Node, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        let node = parse(self);
        self.depth -= 1;
        node
    }

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.nested(Self::parse_or)
    }

    fn parse_or(&mut self) -> Result<Node, ParseError> {
        let mut operands = vec![self.parse_and()?];
        while self.check('|')? {
            self.advance()?;
            operands.push(self.parse_and()?);
        }
        Ok(Node::or(operands))
    }

    fn parse_and(&mut self) -> Result<Node, ParseError> {
        let mut operands = vec![self.parse_unary()?];
        while self.check('&')? {
            self.advance()?;
            operands.push(self.parse_unary()?);
        }
        Ok(Node::and(operands))
    }

    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        if self.check('!')? {
            self.advance()?;
            return Ok(Node::not(self.nested(Self::parse_unary)?));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        if self.check('(')? {
            self.advance()?;
            let node = self.parse_expression()?;
            self.expect(')', "')'")?;
            return Ok(node);
        }
        if self.lexer.peek()?.kind != LexemeKind::Word {
            return Err(self.unexpected("a name, '!' or '('"));
        }
        let word = self.advance()?;
        self.parse_word(word.text)
    }

    fn parse_word(&mut self, name: String) -> Result<Node, ParseError> {
        if self.check('~')? {
            self.advance()?;
            let extractor =
                registry::extractor(&name).ok_or(ParseError::UnknownExtractor(name))?;
            if self.lexer.peek()?.kind != LexemeKind::Regex {
                return Err(self.unexpected("a regular expression literal"));
            }
            let pattern = self.advance()?.text;
            let pattern = Regex::new(&pattern)
                .map_err(|source| ParseError::InvalidRegex { pattern, source })?;
            return Ok(Node::Regex { extractor, pattern });
        }

        if self.check('-')? {
            self.advance()?;
            self.expect('>', "'>' completing '->'")?;
            let converter =
                registry::converter(&name).ok_or(ParseError::UnknownConverter(name))?;
            let child = self.parse_expression()?;
            return Ok(Node::converted(converter, child));
        }

        let predicate = registry::predicate(&name).ok_or(ParseError::UnknownPredicate(name))?;
        Ok(Node::Terminal(predicate))
    }
}
