//! Context-free grammars and FIRST sets.

use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

/// A member of a FIRST set: a terminal, or ε when the whole body can derive
/// the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FirstSymbol<S> {
    Terminal(S),
    Epsilon,
}

/// FIRST set of every production body, keyed by head in insertion order.
/// `first_sets()[head][i]` belongs to the `i`-th body added for `head`.
pub type FirstSets<S> = IndexMap<S, Vec<IndexSet<FirstSymbol<S>>>>;

/// A context-free grammar with a designated root symbol.
///
/// A symbol is a terminal iff it appears in some body and has no productions
/// of its own. Adding a production for a former terminal promotes it to a
/// non-terminal.
///
/// # Example
///
/// ```rust
/// use aoc_utils::grammar::{FirstSymbol, Grammar};
///
/// let mut grammar: Grammar<&str> = Grammar::new();
/// grammar.set_root("list");
/// grammar.add_production("list", ["item", "rest"]);
/// grammar.add_production("rest", [",", "item", "rest"]);
/// grammar.add_epsilon("rest");
/// grammar.add_production("item", ["x"]);
///
/// assert!(grammar.is_terminal(&","));
/// assert!(!grammar.is_terminal(&"item"));
/// assert!(grammar.nullable(&"rest"));
///
/// let firsts = grammar.first_sets();
/// assert!(firsts[&"rest"][1].contains(&FirstSymbol::Epsilon));
/// ```
#[derive(Debug, Clone)]
pub struct Grammar<S> {
    root: Option<S>,
    terminals: IndexSet<S>,
    productions: IndexMap<S, Vec<Vec<S>>>,
}

impl<S> Default for Grammar<S> {
    fn default() -> Self {
        Self {
            root: None,
            terminals: IndexSet::new(),
            productions: IndexMap::new(),
        }
    }
}

impl<S: Clone + Eq + Hash + fmt::Debug> Grammar<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the symbol every parse derives from.
    pub fn set_root(&mut self, symbol: impl Into<S>) {
        self.root = Some(symbol.into());
    }

    pub fn root(&self) -> Option<&S> {
        self.root.as_ref()
    }

    /// Adds `head -> body`. An empty body is an ε-production.
    pub fn add_production<B>(&mut self, head: impl Into<S>, body: B)
    where
        B: IntoIterator,
        B::Item: Into<S>,
    {
        let head = head.into();
        let body: Vec<S> = body.into_iter().map(Into::into).collect();

        self.terminals.shift_remove(&head);
        for symbol in &body {
            if !self.productions.contains_key(symbol) && *symbol != head {
                self.terminals.insert(symbol.clone());
            }
        }
        self.productions.entry(head).or_default().push(body);
    }

    /// Adds `head -> ε`.
    pub fn add_epsilon(&mut self, head: impl Into<S>) {
        self.add_production(head, std::iter::empty::<S>());
    }

    pub fn is_terminal(&self, symbol: &S) -> bool {
        self.terminals.contains(symbol)
    }

    pub fn terminals(&self) -> impl Iterator<Item = &S> {
        self.terminals.iter()
    }

    pub fn non_terminals(&self) -> impl Iterator<Item = &S> {
        self.productions.keys()
    }

    /// Bodies of `head` in insertion order; empty for terminals.
    pub fn productions(&self, head: &S) -> &[Vec<S>] {
        self.productions.get(head).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(super) fn has_productions(&self, symbol: &S) -> bool {
        self.productions.contains_key(symbol)
    }

    /// True if `symbol` can derive the empty string.
    pub fn nullable(&self, symbol: &S) -> bool {
        FirstTable::build(self).nullable.contains(symbol)
    }

    /// FIRST set of every production body.
    ///
    /// FIRST propagates through nullable leading symbols, and contains
    /// [`FirstSymbol::Epsilon`] only when every symbol of the body is
    /// nullable. Left-recursive grammars are handled; their FIRST sets are
    /// still correct even though the predictive parser cannot use them.
    pub fn first_sets(&self) -> FirstSets<S> {
        let table = FirstTable::build(self);
        self.productions
            .iter()
            .map(|(head, bodies)| {
                let firsts = bodies.iter().map(|body| table.first_of(body)).collect();
                (head.clone(), firsts)
            })
            .collect()
    }

    /// FIRST set of an arbitrary symbol sequence.
    pub fn first_of(&self, symbols: &[S]) -> IndexSet<FirstSymbol<S>> {
        FirstTable::build(self).first_of(symbols)
    }
}

/// Nullable set and per-non-terminal FIRST sets, computed to a fixed point.
struct FirstTable<'g, S> {
    grammar: &'g Grammar<S>,
    nullable: IndexSet<S>,
    firsts: IndexMap<S, IndexSet<S>>,
}

impl<'g, S: Clone + Eq + Hash + fmt::Debug> FirstTable<'g, S> {
    fn build(grammar: &'g Grammar<S>) -> Self {
        let mut table = Self {
            grammar,
            nullable: IndexSet::new(),
            firsts: grammar
                .productions
                .keys()
                .map(|head| (head.clone(), IndexSet::new()))
                .collect(),
        };

        let mut changed = true;
        while changed {
            changed = false;
            for (head, bodies) in &grammar.productions {
                for body in bodies {
                    let (terminals, body_nullable) = table.scan(body);
                    if body_nullable && table.nullable.insert(head.clone()) {
                        changed = true;
                    }
                    if let Some(set) = table.firsts.get_mut(head) {
                        for terminal in terminals {
                            changed |= set.insert(terminal);
                        }
                    }
                }
            }
        }
        table
    }

    /// Terminals that can start `symbols`, and whether all of `symbols` is nullable.
    fn scan(&self, symbols: &[S]) -> (Vec<S>, bool) {
        let mut terminals = Vec::new();
        for symbol in symbols {
            if !self.grammar.has_productions(symbol) {
                terminals.push(symbol.clone());
                return (terminals, false);
            }
            if let Some(set) = self.firsts.get(symbol) {
                terminals.extend(set.iter().cloned());
            }
            if !self.nullable.contains(symbol) {
                return (terminals, false);
            }
        }
        (terminals, true)
    }

    fn first_of(&self, symbols: &[S]) -> IndexSet<FirstSymbol<S>> {
        let (terminals, nullable) = self.scan(symbols);
        let mut first: IndexSet<FirstSymbol<S>> =
            terminals.into_iter().map(FirstSymbol::Terminal).collect();
        if nullable {
            first.insert(FirstSymbol::Epsilon);
        }
        first
    }
}
