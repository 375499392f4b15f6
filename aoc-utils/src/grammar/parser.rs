//! Predictive top-down parsing driven by FIRST sets.

use std::fmt;
use std::hash::Hash;

use tracing::{debug, instrument, trace};

use super::cfg::{FirstSymbol, Grammar};
use super::tree::{NodeId, ParseTree};
use crate::error::ParseError;

/// The value stored in each parse tree node: a grammar symbol, or the marker
/// left where a non-terminal derived ε.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseSymbol<S> {
    Symbol(S),
    Empty,
}

impl<S> ParseSymbol<S> {
    pub fn as_symbol(&self) -> Option<&S> {
        match self {
            ParseSymbol::Symbol(symbol) => Some(symbol),
            ParseSymbol::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParseSymbol::Empty)
    }
}

impl<S: fmt::Display> fmt::Display for ParseSymbol<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSymbol::Symbol(symbol) => symbol.fmt(f),
            ParseSymbol::Empty => f.write_str("ε"),
        }
    }
}

fn describe<S: fmt::Debug>(lookahead: Option<&S>) -> String {
    lookahead.map_or_else(|| "end of input".to_string(), |token| format!("{token:?}"))
}

impl<S: Clone + Eq + Hash + fmt::Debug> Grammar<S> {
    /// Parses `tokens` into a concrete parse tree rooted at the grammar's root.
    ///
    /// The frontier is walked left to right. A terminal must match the next
    /// token. A non-terminal expands the single production whose FIRST set
    /// contains the next token (ε at end of input); when none does, its
    /// unique nullable production is used instead, and an ε-production
    /// leaves one [`ParseSymbol::Empty`] child.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Ambiguous`] if several productions fit the lookahead
    /// - [`ParseError::NoProduction`] if the frontier cannot derive the lookahead
    /// - [`ParseError::ExtraTokens`] if tokens remain once the frontier is exhausted
    /// - [`ParseError::MissingRoot`] if no root symbol was set
    #[instrument(skip_all, name = "grammar_parse", fields(tokens = tokens.len()))]
    pub fn parse(&self, tokens: &[S]) -> Result<ParseTree<ParseSymbol<S>>, ParseError> {
        let root = self.root().ok_or(ParseError::MissingRoot)?;
        let first_sets = self.first_sets();

        let mut tree = ParseTree::new();
        let mut frontier = Some(tree.add_node(ParseSymbol::Symbol(root.clone()), None)?);
        let mut position = 0;

        loop {
            let Some((node, symbol)) = next_symbol(&tree, frontier) else {
                if position < tokens.len() {
                    return Err(ParseError::ExtraTokens {
                        position,
                        remaining: tokens.len() - position,
                    });
                }
                debug!(nodes = tree.len(), "parse complete");
                return Ok(tree);
            };
            let lookahead = tokens.get(position);
            trace!(?symbol, ?lookahead, position, "step");

            if !self.has_productions(&symbol) {
                if lookahead != Some(&symbol) {
                    return Err(ParseError::NoProduction {
                        symbol: format!("{symbol:?}"),
                        lookahead: describe(lookahead),
                        position,
                    });
                }
                position += 1;
                frontier = tree.get_next_sibling(node);
                continue;
            }

            let bodies = self.productions(&symbol);
            let firsts = first_sets.get(&symbol).map(Vec::as_slice).unwrap_or(&[]);
            let wanted = lookahead.map_or(FirstSymbol::Epsilon, |token| {
                FirstSymbol::Terminal(token.clone())
            });

            let mut candidates: Vec<usize> = matching(firsts, &wanted);
            if candidates.is_empty() {
                candidates = matching(firsts, &FirstSymbol::Epsilon);
            }
            let chosen = match candidates.as_slice() {
                [only] => *only,
                [] => {
                    return Err(ParseError::NoProduction {
                        symbol: format!("{symbol:?}"),
                        lookahead: describe(lookahead),
                        position,
                    });
                }
                _ => {
                    return Err(ParseError::Ambiguous {
                        head: format!("{symbol:?}"),
                        lookahead: describe(lookahead),
                        position,
                        count: candidates.len(),
                    });
                }
            };

            let body = &bodies[chosen];
            trace!(?symbol, production = chosen, "expand");
            if body.is_empty() {
                frontier = Some(tree.add_node(ParseSymbol::Empty, Some(node))?);
                continue;
            }
            let mut first_child = None;
            for child in body {
                let id = tree.add_node(ParseSymbol::Symbol(child.clone()), Some(node))?;
                first_child.get_or_insert(id);
            }
            frontier = first_child;
        }
    }
}

/// Indices of the bodies whose FIRST set contains `wanted`.
fn matching<S: Eq + Hash>(
    firsts: &[indexmap::IndexSet<FirstSymbol<S>>],
    wanted: &FirstSymbol<S>,
) -> Vec<usize> {
    firsts
        .iter()
        .enumerate()
        .filter(|(_, first)| first.contains(wanted))
        .map(|(idx, _)| idx)
        .collect()
}

/// Skips ε markers starting at `frontier` and returns the next symbol node.
fn next_symbol<S: Clone>(
    tree: &ParseTree<ParseSymbol<S>>,
    mut frontier: Option<NodeId>,
) -> Option<(NodeId, S)> {
    while let Some(node) = frontier {
        match tree.value(node) {
            Some(ParseSymbol::Symbol(symbol)) => return Some((node, symbol.clone())),
            _ => frontier = tree.get_next_sibling(node),
        }
    }
    None
}
