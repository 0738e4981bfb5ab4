use thiserror::Error;

use crate::ast::Lexeme;

/// Errors raised while splitting an expression into lexemes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("regular expression starting at position {position} is not terminated with a closing '/'")]
    UnterminatedRegex { position: usize },
}

/// Lexical analyzer for selector expressions.
///
/// Whitespace only separates lexemes: `private | public` and
/// `private|public` produce the same sequence. Once the input is exhausted
/// every call returns the end lexeme.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    /// Buffered lexeme and the position it started at
    lookahead: Option<(Lexeme, usize)>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            lookahead: None,
        }
    }

    /// Consume and return the next lexeme.
    pub fn next_lexeme(&mut self) -> Result<Lexeme, LexError> {
        match self.lookahead.take() {
            Some((lexeme, _)) => Ok(lexeme),
            None => self.read_lexeme(),
        }
    }

    /// Return the next lexeme without consuming it.
    pub fn peek(&mut self) -> Result<&Lexeme, LexError> {
        let (lexeme, _) = match self.lookahead.take() {
            Some(buffered) => self.lookahead.insert(buffered),
            None => {
                self.skip_whitespace();
                let start = self.position;
                let lexeme = self.read_lexeme()?;
                self.lookahead.insert((lexeme, start))
            }
        };
        Ok(&*lexeme)
    }

    /// The input not consumed yet, including a peeked lexeme.
    pub fn remaining(&self) -> String {
        let start = match &self.lookahead {
            Some((_, start)) => *start,
            None => self.position,
        };
        self.input[start..].iter().collect()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_identifier_part(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_regex(&mut self) -> Result<String, LexError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // opening '/'

        while let Some(ch) = self.current_char() {
            match ch {
                '/' => {
                    self.advance();
                    return Ok(result);
                }
                '\\' if self.peek_char(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    result.push('/');
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedRegex { position: start })
    }

    fn read_lexeme(&mut self) -> Result<Lexeme, LexError> {
        self.skip_whitespace();

        match self.current_char() {
            None => Ok(Lexeme::end()),
            Some(ch) if is_identifier_start(ch) => Ok(Lexeme::word(self.read_identifier())),
            Some('/') => self.read_regex().map(Lexeme::regex),
            Some(ch) => {
                self.advance();
                Ok(Lexeme::symbol(ch))
            }
        }
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_identifier_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

#[test]
fn test_symbols_and_words() {
    let mut lexer = Lexer::new("!final&private");
    assert_eq!(lexer.next_lexeme().unwrap(), Lexeme::symbol('!'));
    assert_eq!(lexer.next_lexeme().unwrap(), Lexeme::word("final"));
    assert_eq!(lexer.next_lexeme().unwrap(), Lexeme::symbol('&'));
    assert_eq!(lexer.next_lexeme().unwrap(), Lexeme::word("private"));
    assert!(lexer.next_lexeme().unwrap().is_end());
}

#[test]
fn test_remaining_includes_peeked() {
    let mut lexer = Lexer::new("a |  b");
    lexer.next_lexeme().unwrap();
    assert_eq!(lexer.remaining(), " |  b");
    lexer.peek().unwrap();
    assert_eq!(lexer.remaining(), "|  b");
    lexer.next_lexeme().unwrap();
    assert_eq!(lexer.remaining(), "  b");
}
