use std::fmt;

/// Classification of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    /// Identifier-like word
    ///
    /// Starts with a letter, `_` or `$`, continues with letters, digits, `_` or `$`.
    ///
    /// # Examples
    /// ```text
    /// private
    /// declaringClass
    /// simpleName
    /// ```
    Word,

    /// Any single character that does not start a word or a regex literal
    ///
    /// # Examples
    /// ```text
    /// !  &  |  (  )  ~  -  >
    /// ```
    Symbol,

    /// Regular expression literal enclosed in `/`
    ///
    /// The delimiters are stripped and `\/` is unescaped to `/`.
    ///
    /// # Examples
    /// ```text
    /// /^Test/
    /// /java\.lang\.Object/
    /// /a\/b/
    /// ```
    Regex,

    /// End of input
    End,
}

/// A single lexical element of a selector expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub text: String,
    pub kind: LexemeKind,
}

impl Lexeme {
    pub fn word(text: impl Into<String>) -> Self {
        Lexeme {
            text: text.into(),
            kind: LexemeKind::Word,
        }
    }

    pub fn symbol(ch: char) -> Self {
        Lexeme {
            text: ch.to_string(),
            kind: LexemeKind::Symbol,
        }
    }

    pub fn regex(text: impl Into<String>) -> Self {
        Lexeme {
            text: text.into(),
            kind: LexemeKind::Regex,
        }
    }

    pub fn end() -> Self {
        Lexeme {
            text: String::new(),
            kind: LexemeKind::End,
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == LexemeKind::End
    }

    /// True if this is the symbol lexeme for `ch`.
    pub fn is_symbol(&self, ch: char) -> bool {
        self.kind == LexemeKind::Symbol && self.text.chars().eq(std::iter::once(ch))
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexemeKind::Word => write!(f, "word '{}'", self.text),
            LexemeKind::Symbol => write!(f, "symbol '{}'", self.text),
            LexemeKind::Regex => write!(f, "regex /{}/", self.text),
            LexemeKind::End => write!(f, "end of input"),
        }
    }
}
