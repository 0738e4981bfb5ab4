// tests/parser_tests.rs

use member_selector::ast::Node;
use member_selector::lexer::{LexError, Lexer};
use member_selector::parser::{MAX_DEPTH, ParseError, Parser};
use member_selector::{Subject, compile};
use pretty_assertions::assert_eq;

fn parse(input: &str) -> Result<Node, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}

fn name(node: &Node) -> &'static str {
    match node {
        Node::Terminal(predicate) => predicate.name,
        other => panic!("expected a terminal, got {other:?}"),
    }
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_terminal() {
    let node = parse("private").unwrap();
    assert_eq!(name(&node), "private");
}

#[test]
fn test_literals_are_terminals() {
    for literal in ["true", "false", "null"] {
        assert_eq!(name(&parse(literal).unwrap()), literal);
    }
}

#[test]
fn test_regex_leaf() {
    match parse(r"simpleName ~ /^Test\/x/").unwrap() {
        Node::Regex { extractor, pattern } => {
            assert_eq!(extractor.name, "simpleName");
            assert_eq!(pattern.as_str(), "^Test/x");
        }
        other => panic!("expected regex leaf, got {other:?}"),
    }
}

#[test]
fn test_shared_name_picks_table_from_syntax() {
    assert!(matches!(parse("implements").unwrap(), Node::Terminal(_)));
    assert!(matches!(parse("implements ~ /Function/").unwrap(), Node::Regex { .. }));
    assert!(matches!(parse("null").unwrap(), Node::Terminal(_)));
    assert!(matches!(parse("null -> true").unwrap(), Node::Converted { .. }));
}

// ============================================================================
// Operators and precedence
// ============================================================================

#[test]
fn test_and_is_flattened() {
    match parse("public & static & final").unwrap() {
        Node::And(children) => {
            let names: Vec<_> = children.iter().map(name).collect();
            assert_eq!(names, vec!["public", "static", "final"]);
        }
        other => panic!("expected And, got {other:?}"),
    }
}

#[test]
fn test_or_is_flattened() {
    match parse("public | protected | private").unwrap() {
        Node::Or(children) => assert_eq!(children.len(), 3),
        other => panic!("expected Or, got {other:?}"),
    }
}

#[test]
fn test_and_binds_tighter_than_or() {
    // true | (false & false)
    match parse("true | false & false").unwrap() {
        Node::Or(children) => {
            assert_eq!(name(&children[0]), "true");
            assert!(matches!(&children[1], Node::And(inner) if inner.len() == 2));
        }
        other => panic!("expected Or, got {other:?}"),
    }
}

#[test]
fn test_parentheses_override_precedence() {
    match parse("(true | false) & false").unwrap() {
        Node::And(children) => {
            assert!(matches!(&children[0], Node::Or(_)));
            assert_eq!(name(&children[1]), "false");
        }
        other => panic!("expected And, got {other:?}"),
    }
}

#[test]
fn test_parenthesized_group_is_not_merged() {
    match parse("(public | private) | static").unwrap() {
        Node::Or(children) => {
            assert_eq!(children.len(), 2);
            assert!(matches!(&children[0], Node::Or(inner) if inner.len() == 2));
        }
        other => panic!("expected Or, got {other:?}"),
    }
}

#[test]
fn test_not_binds_tightest() {
    match parse("!final & private").unwrap() {
        Node::And(children) => {
            assert!(matches!(&children[0], Node::Not(_)));
            assert_eq!(name(&children[1]), "private");
        }
        other => panic!("expected And, got {other:?}"),
    }
}

#[test]
fn test_double_negation() {
    match parse("!!final").unwrap() {
        Node::Not(inner) => assert!(matches!(*inner, Node::Not(_))),
        other => panic!("expected Not, got {other:?}"),
    }
}

#[test]
fn test_converter_takes_full_expression() {
    // declaringClass -> (interface | abstract)
    match parse("declaringClass -> interface | abstract").unwrap() {
        Node::Converted { converter, child } => {
            assert_eq!(converter.name, "declaringClass");
            assert!(matches!(*child, Node::Or(_)));
        }
        other => panic!("expected Converted, got {other:?}"),
    }
}

#[test]
fn test_converter_inside_conjunction() {
    match parse("private & declaringClass -> final").unwrap() {
        Node::And(children) => {
            assert_eq!(name(&children[0]), "private");
            assert!(matches!(&children[1], Node::Converted { .. }));
        }
        other => panic!("expected And, got {other:?}"),
    }
}

#[test]
fn test_arrow_with_space() {
    assert_eq!(parse("returnType - > void").unwrap(), parse("returnType->void").unwrap());
}

#[test]
fn test_duplicates_collapse() {
    assert_eq!(parse("final & final").unwrap(), parse("final").unwrap());
    match parse("final | static | final").unwrap() {
        Node::Or(children) => assert_eq!(children.len(), 2),
        other => panic!("expected Or, got {other:?}"),
    }
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(
        parse("private&!final").unwrap(),
        parse("  private   &  ! final  ").unwrap()
    );
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_round_trips() {
    for input in [
        "private & final",
        "true | false & false",
        "(true | false) & false",
        "!(final | private)",
        "!final & !private",
        "declaringClass -> simpleName ~ /^Test/",
        "(returnType -> simpleName ~ /boolean/ | simpleName ~ /int/) & declaringClass -> !simpleName ~ /Object/",
        r"signature ~ /a\/b/",
        "!(nestHost -> null) | static",
    ] {
        let node = parse(input).unwrap();
        let rendered = node.to_string();
        assert_eq!(parse(&rendered).unwrap(), node, "{input} rendered as {rendered}");
    }
}

#[test]
fn test_display_normalises() {
    assert_eq!(parse("(private)&(final)").unwrap().to_string(), "private & final");
    assert_eq!(
        parse("!(declaringClass->interface)").unwrap().to_string(),
        "!(declaringClass -> interface)"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(parse(""), Err(ParseError::Empty));
    assert_eq!(parse("   "), Err(ParseError::Empty));
}

#[test]
fn test_unknown_names() {
    assert_eq!(parse("blabla"), Err(ParseError::UnknownPredicate("blabla".into())));
    assert_eq!(
        parse("blabla -> true"),
        Err(ParseError::UnknownConverter("blabla".into()))
    );
    assert_eq!(
        parse("blabla ~ /x/"),
        Err(ParseError::UnknownExtractor("blabla".into()))
    );
    // a predicate name is not a converter
    assert_eq!(
        parse("private -> true"),
        Err(ParseError::UnknownConverter("private".into()))
    );
}

#[test]
fn test_unterminated_regex() {
    assert_eq!(
        parse(r"signature ~ /equals\(Object\s+arg1\)"),
        Err(ParseError::Lex(LexError::UnterminatedRegex { position: 12 }))
    );
}

#[test]
fn test_invalid_regex() {
    assert!(matches!(
        parse("simpleName ~ /(/"),
        Err(ParseError::InvalidRegex { ref pattern, .. }) if pattern == "("
    ));
}

#[test]
fn test_syntax_errors() {
    for input in [
        "private &",
        "| private",
        "!",
        "(private",
        "private)",
        "private final",
        "simpleName ~ private",
        "declaringClass - private",
        "private # final",
        "()",
    ] {
        assert!(
            matches!(parse(input), Err(ParseError::Unexpected { .. })),
            "{input} should be a syntax error"
        );
    }
}

#[test]
fn test_unexpected_reports_rest() {
    match parse("private final") {
        Err(ParseError::Unexpected { found, rest, .. }) => {
            assert_eq!(found, "word 'final'");
            assert_eq!(rest, "final");
        }
        other => panic!("expected Unexpected, got {other:?}"),
    }
}

// ============================================================================
// Nesting limit
// ============================================================================

#[test]
fn test_nesting_up_to_the_limit_parses() {
    let depth = MAX_DEPTH - 1;
    let parenthesized = format!("{}true{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&parenthesized).unwrap(), parse("true").unwrap());

    let negated = format!("{}true", "!".repeat(depth));
    assert!(!compile(&negated).unwrap().matches(Subject::Null).unwrap());

    let chained = format!("{}null", "superClass -> ".repeat(depth));
    assert!(compile(&chained).unwrap().matches(Subject::Null).unwrap());
}

#[test]
fn test_nesting_past_the_limit_is_rejected() {
    let too_deep = Err(ParseError::TooDeep { limit: MAX_DEPTH });
    let parenthesized = format!("{}true{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert_eq!(parse(&parenthesized), too_deep);
    assert_eq!(parse(&format!("{}true", "!".repeat(MAX_DEPTH))), too_deep);
    assert_eq!(parse(&format!("{}null", "nestHost -> ".repeat(MAX_DEPTH))), too_deep);
}

#[test]
fn test_hostile_nesting_does_not_overflow() {
    let too_deep = Err(ParseError::TooDeep { limit: MAX_DEPTH });
    assert_eq!(parse(&format!("{}true", "!".repeat(1_000_000))), too_deep);
    assert_eq!(parse(&"(".repeat(1_000_000)), too_deep);
    assert_eq!(
        parse(&"(".repeat(100_000)).unwrap_err().to_string(),
        format!("expression nests deeper than {MAX_DEPTH} levels")
    );
}
