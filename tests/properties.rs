//! Property-based tests for the tokeniser and parser.

use minilisp_ll1::{AstNode, BigUint, Error, ParseErrorKind, parse};
use proptest::prelude::*;

/// Lower-case names, plus names spelled like the reserved tags.
fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z]{1,6}",
        1 => prop::sample::select(vec![
            "PLUS",
            "MINUS",
            "MULT",
            "EQUALS",
            "CONDITIONAL",
            "LAMBDA",
            "LET",
        ])
        .prop_map(String::from),
    ]
}

fn binary_operator() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '−', '×', '='])
}

/// Well-formed source text, built from the grammar.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof!["[0-9]{1,6}", identifier()];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (binary_operator(), inner.clone(), inner.clone())
                .prop_map(|(op, first, second)| format!("({op} {first} {second})")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(test, yes, no)| format!("(? {test} {yes} {no})")),
            (identifier(), inner.clone()).prop_map(|(name, body)| format!("(λ {name} {body})")),
            (identifier(), inner.clone(), inner.clone())
                .prop_map(|(name, value, body)| format!("(≜ {name} {value} {body})")),
            prop::collection::vec(inner, 1..4)
                .prop_map(|items| format!("({})", items.join(" "))),
        ]
    })
}

fn parse_kind(text: &str) -> Option<ParseErrorKind> {
    match parse(text) {
        Err(Error::Parse(err)) => Some(err.kind),
        _ => None,
    }
}

proptest! {
    #[test]
    fn generated_expressions_are_accepted(source in expression()) {
        prop_assert!(parse(&source).is_ok(), "{source}");
    }

    #[test]
    fn printed_tree_parses_to_the_same_tree(source in expression()) {
        let tree = parse(&source).unwrap();
        let printed = tree.to_string();
        prop_assert_eq!(parse(&printed).unwrap(), tree, "{} printed as {}", source, printed);
    }

    #[test]
    fn numeric_literals_are_base_ten(digits in "[0-9]{1,60}") {
        let expected = digits.parse::<BigUint>().unwrap();
        let tree = parse(&digits).unwrap();
        prop_assert_eq!(&tree, &AstNode::IntLiteral(expected));
        let canonical = digits.trim_start_matches('0');
        let canonical = if canonical.is_empty() { "0" } else { canonical };
        prop_assert_eq!(serde_json::to_string(&tree).unwrap(), canonical);
    }

    #[test]
    fn reserved_tag_heads_print_back_to_the_same_tree(
        tag in prop::sample::select(vec!["PLUS", "CONDITIONAL", "LAMBDA", "LET"]),
        args in prop::collection::vec(expression(), 1..5),
    ) {
        let source = format!("({tag} {})", args.join(" "));
        let tree = parse(&source).unwrap();
        prop_assert_eq!(parse(&tree.to_string()).unwrap(), tree, "{}", source);
    }

    #[test]
    fn binary_forms_need_exactly_two_arguments(
        op in binary_operator(),
        args in prop::collection::vec(expression(), 0..5),
    ) {
        let source = format!("({op} {})", args.join(" "));
        if args.len() == 2 {
            prop_assert!(parse(&source).is_ok(), "{source}");
        } else {
            prop_assert_eq!(parse_kind(&source), Some(ParseErrorKind::WrongArity), "{}", source);
        }
    }

    #[test]
    fn surplus_close_is_unmatched(source in expression()) {
        let source = format!("{source} )");
        prop_assert_eq!(parse_kind(&source), Some(ParseErrorKind::UnmatchedParen), "{}", source);
    }

    #[test]
    fn unclosed_group_is_missing_close(source in expression()) {
        let source = format!("({source}");
        prop_assert_eq!(parse_kind(&source), Some(ParseErrorKind::MissingClosingParen), "{}", source);
    }

    #[test]
    fn empty_group_is_rejected_anywhere(source in expression()) {
        let source = format!("({source} ())");
        prop_assert_eq!(parse_kind(&source), Some(ParseErrorKind::WrongArity), "{}", source);
    }
}
