//! Ready-made grammars over single-character tokens.

use super::cfg::Grammar;

/// Splits `input` into one token per character, dropping ASCII whitespace.
pub fn char_tokens(input: &str) -> Vec<String> {
    input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(String::from)
        .collect()
}

/// Grammar of non-empty decimal digit strings, rooted at `number`.
///
/// ```text
/// number  -> digit number1
/// number1 -> digit number1 | ε
/// digit   -> "0" | "1" | ... | "9"
/// ```
///
/// Extend it with further productions (and a new root) to build calculators,
/// as [`calculator_grammar`] does.
pub fn number_grammar() -> Grammar<String> {
    let mut grammar = Grammar::new();
    grammar.set_root("number");
    grammar.add_production("number", ["digit", "number1"]);
    grammar.add_production("number1", ["digit", "number1"]);
    grammar.add_epsilon("number1");
    for digit in '0'..='9' {
        grammar.add_production("digit", [digit.to_string()]);
    }
    grammar
}

/// Integer arithmetic with `+ - * /` and parentheses, rooted at `expr`.
///
/// ```text
/// expr   -> term expr1
/// expr1  -> "+" term expr1 | "-" term expr1 | ε
/// term   -> factor term1
/// term1  -> "*" factor term1 | "/" factor term1 | ε
/// factor -> number | "(" expr ")"
/// ```
///
/// ```rust
/// use aoc_utils::grammar::{calculator_grammar, char_tokens, evaluate};
///
/// let tree = calculator_grammar().parse(&char_tokens("2 * (3 + 4) - 10 / 3")).unwrap();
/// assert_eq!(evaluate(&tree), Ok(11));
/// ```
pub fn calculator_grammar() -> Grammar<String> {
    let mut grammar = number_grammar();
    grammar.set_root("expr");
    grammar.add_production("expr", ["term", "expr1"]);
    grammar.add_production("expr1", ["+", "term", "expr1"]);
    grammar.add_production("expr1", ["-", "term", "expr1"]);
    grammar.add_epsilon("expr1");
    grammar.add_production("term", ["factor", "term1"]);
    grammar.add_production("term1", ["*", "factor", "term1"]);
    grammar.add_production("term1", ["/", "factor", "term1"]);
    grammar.add_epsilon("term1");
    grammar.add_production("factor", ["number"]);
    grammar.add_production("factor", ["(", "expr", ")"]);
    grammar
}
