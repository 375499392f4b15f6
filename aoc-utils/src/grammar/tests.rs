//! Tests for the grammar engine module.

use super::*;
use crate::error::{CalcError, ParseError, TreeError};

fn sym(s: &str) -> ParseSymbol<String> {
    ParseSymbol::Symbol(s.to_string())
}

fn leaf(s: &str) -> Structured<ParseSymbol<String>> {
    Structured::Leaf(sym(s))
}

fn branch(
    s: &str,
    children: Vec<Structured<ParseSymbol<String>>>,
) -> Structured<ParseSymbol<String>> {
    Structured::Branch(sym(s), children)
}

fn empty() -> Structured<ParseSymbol<String>> {
    Structured::Leaf(ParseSymbol::Empty)
}

/// Symbols of all non-ε leaves, left to right.
fn frontier(tree: &ParseTree<ParseSymbol<String>>) -> String {
    tree.leaves()
        .filter_map(|id| tree.value(id).and_then(ParseSymbol::as_symbol))
        .cloned()
        .collect()
}

#[test]
fn test_tree_single_root() {
    let mut tree = ParseTree::new();
    let root = tree.add_node(1, None).unwrap();
    assert_eq!(tree.root(), Some(root));
    assert_eq!(tree.parent(root), None);
    assert_eq!(tree.add_node(2, None), Err(TreeError::RootAlreadySet));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_tree_rejects_unknown_parent() {
    let mut other = ParseTree::new();
    other.add_node('x', None).unwrap();
    let far = other.add_node('y', other.root()).unwrap();

    let mut tree = ParseTree::new();
    tree.add_node('r', None).unwrap();
    assert_eq!(tree.add_node('z', Some(far)), Err(TreeError::UnknownNode(far)));
}

#[test]
fn test_tree_parent_child_links() {
    let mut tree = ParseTree::new();
    let root = tree.add_node("root", None).unwrap();
    let a = tree.add_node("a", Some(root)).unwrap();
    let b = tree.add_node("b", Some(root)).unwrap();
    let a1 = tree.add_node("a1", Some(a)).unwrap();

    assert_eq!(tree.children(root), Some(&[a, b][..]));
    assert_eq!(tree.children(a), Some(&[a1][..]));
    assert_eq!(tree.parent(a1), Some(a));
    assert_eq!(tree.value(b), Some(&"b"));
    assert!(a1.index() > a.index());
}

#[test]
fn test_tree_next_sibling_ascends() {
    let mut tree = ParseTree::new();
    let root = tree.add_node("root", None).unwrap();
    let a = tree.add_node("a", Some(root)).unwrap();
    let b = tree.add_node("b", Some(root)).unwrap();
    let a1 = tree.add_node("a1", Some(a)).unwrap();
    let a2 = tree.add_node("a2", Some(a)).unwrap();
    let b1 = tree.add_node("b1", Some(b)).unwrap();

    assert_eq!(tree.get_next_sibling(a1), Some(a2));
    assert_eq!(tree.get_next_sibling(a2), Some(b));
    assert_eq!(tree.get_next_sibling(b1), None);
    assert_eq!(tree.get_next_sibling(root), None);
}

#[test]
fn test_tree_preorder_and_leaves() {
    let mut tree = ParseTree::new();
    let root = tree.add_node('r', None).unwrap();
    let a = tree.add_node('a', Some(root)).unwrap();
    tree.add_node('c', Some(root)).unwrap();
    tree.add_node('b', Some(a)).unwrap();

    let order: String = tree.preorder().filter_map(|id| tree.value(id)).collect();
    assert_eq!(order, "rabc");
    let leaves: String = tree.leaves().filter_map(|id| tree.value(id)).collect();
    assert_eq!(leaves, "bc");
    assert_eq!(tree.to_string(), "r\n  a\n    b\n  c\n");
}

#[test]
fn test_tree_structured_empty() {
    let tree: ParseTree<u8> = ParseTree::new();
    assert_eq!(tree.to_structured(), None);
    assert!(tree.is_empty());
    assert_eq!(tree.preorder().count(), 0);
}

#[test]
fn test_terminal_promoted_by_production() {
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.add_production("S", ["A", "b"]);
    assert!(grammar.is_terminal(&"A".to_string()));
    grammar.add_production("A", ["a"]);
    assert!(!grammar.is_terminal(&"A".to_string()));
    assert!(grammar.is_terminal(&"a".to_string()));
    assert!(grammar.is_terminal(&"b".to_string()));
    assert!(!grammar.is_terminal(&"S".to_string()));

    let terminals: Vec<&String> = grammar.terminals().collect();
    assert_eq!(terminals, vec!["b", "a"]);
    let heads: Vec<&String> = grammar.non_terminals().collect();
    assert_eq!(heads, vec!["S", "A"]);
    assert_eq!(grammar.productions(&"A".to_string()), &[vec!["a".to_string()]]);
    assert!(grammar.productions(&"b".to_string()).is_empty());
}

#[test]
fn test_first_sets_simple() {
    let mut grammar: Grammar<&str> = Grammar::new();
    grammar.add_production("S", ["A", "x"]);
    grammar.add_production("S", ["y"]);
    grammar.add_production("A", ["a"]);
    grammar.add_production("A", ["b", "A"]);

    let firsts = grammar.first_sets();
    let terminals = |head: &'static str, idx: usize| -> Vec<FirstSymbol<&'static str>> {
        firsts[&head][idx].iter().cloned().collect()
    };
    assert_eq!(
        terminals("S", 0),
        vec![FirstSymbol::Terminal("a"), FirstSymbol::Terminal("b")]
    );
    assert_eq!(terminals("S", 1), vec![FirstSymbol::Terminal("y")]);
    assert_eq!(terminals("A", 1), vec![FirstSymbol::Terminal("b")]);
}

#[test]
fn test_first_sets_propagate_through_nullable() {
    let mut grammar: Grammar<&str> = Grammar::new();
    grammar.add_production("S", ["A", "B", "c"]);
    grammar.add_production("A", ["a"]);
    grammar.add_epsilon("A");
    grammar.add_production("B", ["b"]);
    grammar.add_epsilon("B");
    grammar.add_production("T", ["A", "B"]);

    let firsts = grammar.first_sets();
    let s = &firsts[&"S"][0];
    assert!(s.contains(&FirstSymbol::Terminal("a")));
    assert!(s.contains(&FirstSymbol::Terminal("b")));
    assert!(s.contains(&FirstSymbol::Terminal("c")));
    assert!(!s.contains(&FirstSymbol::Epsilon));

    assert!(firsts[&"T"][0].contains(&FirstSymbol::Epsilon));
    assert!(grammar.nullable(&"T"));
    assert!(!grammar.nullable(&"S"));
    assert_eq!(grammar.first_of(&[]).len(), 1);
}

#[test]
fn test_first_sets_terminate_on_left_recursion() {
    let mut grammar: Grammar<&str> = Grammar::new();
    grammar.add_production("E", ["E", "+", "n"]);
    grammar.add_production("E", ["n"]);
    let firsts = grammar.first_sets();
    assert!(firsts[&"E"][0].contains(&FirstSymbol::Terminal("n")));
    assert_eq!(firsts[&"E"][0].len(), 1);
}

#[test]
fn test_parse_two_terminals() {
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.set_root("S");
    grammar.add_production("S", ["a", "b"]);

    let tree = grammar.parse(&char_tokens("ab")).unwrap();
    let root = tree.root().unwrap();
    assert_eq!(tree.value(root), Some(&sym("S")));
    let children: Vec<_> = tree
        .children(root)
        .unwrap()
        .iter()
        .map(|&c| tree.value(c).cloned())
        .collect();
    assert_eq!(children, vec![Some(sym("a")), Some(sym("b"))]);
    assert_eq!(
        tree.to_structured(),
        Some(branch("S", vec![leaf("a"), leaf("b")]))
    );
}

#[test]
fn test_number_grammar_single_digit() {
    let tree = number_grammar().parse(&char_tokens("0")).unwrap();
    assert_eq!(
        tree.to_structured(),
        Some(branch(
            "number",
            vec![branch("digit", vec![leaf("0")]), branch("number1", vec![empty()])]
        ))
    );
}

#[test]
fn test_number_grammar_many_digits() {
    let tree = number_grammar().parse(&char_tokens("90210")).unwrap();
    assert_eq!(frontier(&tree), "90210");
    let empties = tree
        .preorder()
        .filter(|&id| tree.value(id).is_some_and(ParseSymbol::is_empty))
        .count();
    assert_eq!(empties, 1);
}

#[test]
fn test_number_grammar_rejects_empty_input() {
    let err = number_grammar().parse(&[]).unwrap_err();
    assert!(matches!(err, ParseError::NoProduction { position: 0, .. }), "{err:?}");
}

#[test]
fn test_parse_extra_tokens() {
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.set_root("S");
    grammar.add_production("S", ["a"]);
    let err = grammar.parse(&char_tokens("aab")).unwrap_err();
    assert_eq!(err, ParseError::ExtraTokens { position: 1, remaining: 2 });
}

#[test]
fn test_parse_no_production_for_unfinished_frontier() {
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.set_root("S");
    grammar.add_production("S", ["a", "B"]);
    grammar.add_production("B", ["b"]);
    let err = grammar.parse(&char_tokens("a")).unwrap_err();
    assert_eq!(
        err,
        ParseError::NoProduction {
            symbol: "\"B\"".to_string(),
            lookahead: "end of input".to_string(),
            position: 1,
        }
    );

    let err = grammar.parse(&char_tokens("ac")).unwrap_err();
    assert!(matches!(err, ParseError::NoProduction { position: 1, .. }));
}

#[test]
fn test_parse_terminal_mismatch() {
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.set_root("S");
    grammar.add_production("S", ["a", "b"]);
    let err = grammar.parse(&char_tokens("aa")).unwrap_err();
    assert_eq!(
        err,
        ParseError::NoProduction {
            symbol: "\"b\"".to_string(),
            lookahead: "\"a\"".to_string(),
            position: 1,
        }
    );
}

#[test]
fn test_parse_ambiguous() {
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.set_root("S");
    grammar.add_production("S", ["a", "b"]);
    grammar.add_production("S", ["a", "c"]);
    let err = grammar.parse(&char_tokens("ab")).unwrap_err();
    assert!(matches!(err, ParseError::Ambiguous { count: 2, position: 0, .. }), "{err:?}");
}

#[test]
fn test_parse_ambiguous_between_nullable_bodies() {
    // S -> A | ε ; A -> a | ε : at end of input both bodies of S derive ε
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.set_root("S");
    grammar.add_production("S", ["A"]);
    grammar.add_epsilon("S");
    grammar.add_production("A", ["a"]);
    grammar.add_epsilon("A");

    let err = grammar.parse(&[]).unwrap_err();
    assert_eq!(
        err,
        ParseError::Ambiguous {
            head: "\"S\"".to_string(),
            lookahead: "end of input".to_string(),
            position: 0,
            count: 2,
        }
    );
    assert!(grammar.parse(&char_tokens("a")).is_ok());

    // R -> S x ; S -> A | B : neither body starts with x, both are nullable
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.set_root("R");
    grammar.add_production("R", ["S", "x"]);
    grammar.add_production("S", ["A"]);
    grammar.add_production("S", ["B"]);
    grammar.add_production("A", ["a"]);
    grammar.add_epsilon("A");
    grammar.add_production("B", ["b"]);
    grammar.add_epsilon("B");

    let err = grammar.parse(&char_tokens("x")).unwrap_err();
    assert!(
        matches!(err, ParseError::Ambiguous { count: 2, position: 0, ref lookahead, .. } if lookahead == "\"x\""),
        "{err:?}"
    );
    assert_eq!(frontier(&grammar.parse(&char_tokens("bx")).unwrap()), "bx");
}

#[test]
fn test_parse_missing_root() {
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.add_production("S", ["a"]);
    assert!(matches!(
        grammar.parse(&char_tokens("a")),
        Err(ParseError::MissingRoot)
    ));
}

#[test]
fn test_parse_nullable_prefix() {
    // S -> A c ; A -> a | ε : FIRST(S) must see through A to reach c
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.set_root("S");
    grammar.add_production("S", ["A", "c"]);
    grammar.add_production("A", ["a"]);
    grammar.add_epsilon("A");

    let tree = grammar.parse(&char_tokens("c")).unwrap();
    assert_eq!(
        tree.to_structured(),
        Some(branch("S", vec![branch("A", vec![empty()]), leaf("c")]))
    );
    assert_eq!(frontier(&grammar.parse(&char_tokens("ac")).unwrap()), "ac");
}

#[test]
fn test_parse_selects_nullable_non_empty_body() {
    // S -> A B ; A -> a | ε ; B -> b | ε : S is nullable without an ε body
    let mut grammar: Grammar<String> = Grammar::new();
    grammar.set_root("R");
    grammar.add_production("R", ["S", "x"]);
    grammar.add_production("S", ["A", "B"]);
    grammar.add_production("A", ["a"]);
    grammar.add_epsilon("A");
    grammar.add_production("B", ["b"]);
    grammar.add_epsilon("B");

    for input in ["x", "ax", "bx", "abx"] {
        let tree = grammar.parse(&char_tokens(input)).unwrap();
        assert_eq!(frontier(&tree), input);
    }
}

#[test]
fn test_calculator_grammar_evaluates() {
    let calc = calculator_grammar();
    let eval = |input: &str| evaluate(&calc.parse(&char_tokens(input)).unwrap());

    assert_eq!(eval("1+2*3"), Ok(7));
    assert_eq!(eval("(1+2)*3"), Ok(9));
    assert_eq!(eval("10-4-3"), Ok(3));
    assert_eq!(eval("100/7/2"), Ok(7));
    assert_eq!(eval("((42))"), Ok(42));
    assert_eq!(eval("8/(3-3)"), Err(CalcError::DivisionByZero));
    assert_eq!(eval("9999999999*9999999999"), Err(CalcError::Overflow));
}

#[test]
fn test_calculator_grammar_rejects_bad_input() {
    let calc = calculator_grammar();
    assert!(matches!(
        calc.parse(&char_tokens("1+")),
        Err(ParseError::NoProduction { .. })
    ));
    assert!(matches!(
        calc.parse(&char_tokens("(1")),
        Err(ParseError::NoProduction { .. })
    ));
    assert!(matches!(
        calc.parse(&char_tokens("1)")),
        Err(ParseError::ExtraTokens { position: 1, remaining: 1 })
    ));
}

#[test]
fn test_evaluate_rejects_foreign_tree() {
    let tree = number_grammar().parse(&char_tokens("12")).unwrap();
    assert!(matches!(evaluate(&tree), Err(CalcError::Malformed(_))));
    let empty_tree = ParseTree::new();
    assert!(matches!(evaluate(&empty_tree), Err(CalcError::Malformed(_))));
}
