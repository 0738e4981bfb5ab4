// tests/lexer_tests.rs

use member_selector::ast::{Lexeme, LexemeKind};
use member_selector::lexer::{LexError, Lexer};
use pretty_assertions::assert_eq;

fn lex_all(input: &str) -> Vec<Lexeme> {
    let mut lexer = Lexer::new(input);
    let mut lexemes = Vec::new();
    loop {
        let lexeme = lexer.next_lexeme().unwrap();
        if lexeme.is_end() {
            return lexemes;
        }
        lexemes.push(lexeme);
    }
}

// ============================================================================
// End of input
// ============================================================================

#[test]
fn test_empty_input_is_end() {
    let mut lexer = Lexer::new("");
    assert!(lexer.next_lexeme().unwrap().is_end());
}

#[test]
fn test_end_is_repeated() {
    let mut lexer = Lexer::new("  ");
    for _ in 0..3 {
        assert_eq!(lexer.next_lexeme().unwrap(), Lexeme::end());
    }
    assert!(lexer.peek().unwrap().is_end());
}

// ============================================================================
// Symbols
// ============================================================================

#[test]
fn test_single_char_symbols() {
    let mut lexer = Lexer::new("|+*?");
    for expected in ['|', '+', '*', '?'] {
        let lexeme = lexer.next_lexeme().unwrap();
        assert_eq!(lexeme.kind, LexemeKind::Symbol);
        assert_eq!(lexeme.text, expected.to_string());
    }
}

#[test]
fn test_arrow_is_two_symbols() {
    assert_eq!(
        lex_all("returnType->void"),
        vec![
            Lexeme::word("returnType"),
            Lexeme::symbol('-'),
            Lexeme::symbol('>'),
            Lexeme::word("void"),
        ]
    );
}

// ============================================================================
// Words
// ============================================================================

#[test]
fn test_words() {
    assert_eq!(
        lex_all("declaringClass _x $y a1"),
        vec![
            Lexeme::word("declaringClass"),
            Lexeme::word("_x"),
            Lexeme::word("$y"),
            Lexeme::word("a1"),
        ]
    );
}

#[test]
fn test_digit_does_not_start_a_word() {
    assert_eq!(lex_all("1a"), vec![Lexeme::symbol('1'), Lexeme::word("a")]);
}

// ============================================================================
// Regular expressions
// ============================================================================

#[test]
fn test_regex_with_escaped_slash() {
    let mut lexer = Lexer::new(r"/\s*\/[a-zA-Z]/");
    let lexeme = lexer.next_lexeme().unwrap();
    assert_eq!(lexeme.kind, LexemeKind::Regex);
    assert_eq!(lexeme.text, r"\s*/[a-zA-Z]");
    assert!(lexer.next_lexeme().unwrap().is_end());
}

#[test]
fn test_regex_keeps_other_escapes() {
    assert_eq!(lex_all(r"/java\.lang\.Object/"), vec![Lexeme::regex(r"java\.lang\.Object")]);
}

#[test]
fn test_skip_space_after_regex() {
    assert_eq!(
        lex_all(r"/\s*\/[a-zA-Z]/ a |"),
        vec![
            Lexeme::regex(r"\s*/[a-zA-Z]"),
            Lexeme::word("a"),
            Lexeme::symbol('|'),
        ]
    );
}

#[test]
fn test_empty_regex() {
    assert_eq!(lex_all("//"), vec![Lexeme::regex("")]);
}

#[test]
fn test_unterminated_regex() {
    let mut lexer = Lexer::new("simpleName ~ /abc");
    lexer.next_lexeme().unwrap();
    lexer.next_lexeme().unwrap();
    assert_eq!(
        lexer.next_lexeme(),
        Err(LexError::UnterminatedRegex { position: 13 })
    );
}

#[test]
fn test_escaped_final_slash_is_unterminated() {
    let mut lexer = Lexer::new(r"/abc\/");
    assert!(matches!(
        lexer.next_lexeme(),
        Err(LexError::UnterminatedRegex { position: 0 })
    ));
}

// ============================================================================
// Look-ahead
// ============================================================================

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = Lexer::new("private & final");
    assert_eq!(lexer.peek().unwrap(), &Lexeme::word("private"));
    assert_eq!(lexer.peek().unwrap(), &Lexeme::word("private"));
    assert_eq!(lexer.next_lexeme().unwrap(), Lexeme::word("private"));
    assert!(lexer.peek().unwrap().is_symbol('&'));
}

#[test]
fn test_remaining() {
    let mut lexer = Lexer::new("private & final");
    assert_eq!(lexer.remaining(), "private & final");
    lexer.next_lexeme().unwrap();
    lexer.next_lexeme().unwrap();
    assert_eq!(lexer.remaining(), " final");
}

#[test]
fn test_whitespace_is_only_a_separator() {
    assert_eq!(lex_all("private|public"), lex_all("  private \t|\n public  "));
}
