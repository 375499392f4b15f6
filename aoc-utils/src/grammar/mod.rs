//! Context-Free Grammar Engine
//!
//! This module builds concrete parse trees from token sequences with a
//! FIRST-set driven predictive (LL(1)-style) top-down parser.
//!
//! # Components
//!
//! - [`ParseTree`]: arena of nodes addressed by [`NodeId`], with a
//!   non-recursive sibling walk ([`ParseTree::get_next_sibling`])
//! - [`Grammar`]: root symbol, terminals and productions, with
//!   [`Grammar::first_sets`] and [`Grammar::parse`]
//! - Presets: [`number_grammar`] and [`calculator_grammar`], plus
//!   [`evaluate`] for calculator trees
//!
//! # Requirements on Grammars
//!
//! The parser looks one token ahead and never backtracks. For each
//! non-terminal, at most one production may have the next token in its FIRST
//! set, otherwise parsing fails with [`ParseError::Ambiguous`]. Left-recursive
//! grammars must be right-factored first (`expr -> term expr1`,
//! `expr1 -> "+" term expr1 | ε`).
//!
//! # Example
//!
//! ```rust
//! use aoc_utils::grammar::{Grammar, ParseSymbol, Structured};
//!
//! let mut grammar: Grammar<&str> = Grammar::new();
//! grammar.set_root("S");
//! grammar.add_production("S", ["a", "b"]);
//!
//! let tree = grammar.parse(&["a", "b"]).unwrap();
//! let sym = |s| ParseSymbol::Symbol(s);
//! assert_eq!(
//!     tree.to_structured(),
//!     Some(Structured::Branch(sym("S"), vec![Structured::Leaf(sym("a")), Structured::Leaf(sym("b"))]))
//! );
//! ```
//!
//! [`ParseError::Ambiguous`]: crate::ParseError::Ambiguous

mod calculator;
mod cfg;
mod parser;
mod presets;
mod tree;

pub use calculator::evaluate;
pub use cfg::{FirstSets, FirstSymbol, Grammar};
pub use parser::ParseSymbol;
pub use presets::{calculator_grammar, char_tokens, number_grammar};
pub use tree::{NodeId, ParseTree, Preorder, Structured};

#[cfg(test)]
mod tests;
