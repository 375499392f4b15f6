//! Error types for the primitives library

use thiserror::Error;

use crate::grammar::NodeId;

/// Error type for linked list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// Attempted to pop from an empty list
    #[error("List underflow: pop from an empty list")]
    Underflow,
    /// The handle was not issued by this list, or its node was already removed
    #[error("Invalid handle: node does not belong to this list")]
    InvalidHandle,
}

/// Error type for parse tree construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A second parentless node was added to a tree that already has a root
    #[error("Tree already has a root")]
    RootAlreadySet,
    /// The node id does not address a node of this tree
    #[error("Unknown node {0:?}")]
    UnknownNode(NodeId),
}

/// Error type for predictive parsing.
///
/// Symbols are carried in their `Debug` rendering so the error stays
/// independent of the grammar's symbol type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grammar has no start symbol to derive from
    #[error("Grammar has no root symbol")]
    MissingRoot,
    /// More than one production of `head` matches the lookahead
    #[error("Ambiguous grammar: {count} productions of {head} match {lookahead} at token {position}")]
    Ambiguous {
        head: String,
        lookahead: String,
        position: usize,
        count: usize,
    },
    /// Nothing on the frontier can derive the lookahead
    #[error("No production of {symbol} matches {lookahead} at token {position}")]
    NoProduction {
        symbol: String,
        lookahead: String,
        position: usize,
    },
    /// The derivation completed before the input was consumed
    #[error("Extra tokens: {remaining} token(s) left unparsed from position {position}")]
    ExtraTokens { position: usize, remaining: usize },
    /// Tree construction failed while expanding a production
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
}

/// Error type for register machines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// No handler is registered for the opcode
    #[error("Invalid opcode: {0}")]
    InvalidOpcode(String),
    /// An operand could not be interpreted by its handler
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),
    /// The configured step limit was reached before the machine halted
    #[error("Step limit of {0} exceeded")]
    StepLimitExceeded(u64),
    /// A textual program description could not be loaded
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Error type for evaluating calculator parse trees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Right-hand side of a division evaluated to zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Intermediate result does not fit in an `i64`
    #[error("Arithmetic overflow")]
    Overflow,
    /// The tree does not have the shape the calculator grammar produces
    #[error("Malformed calculator tree: {0}")]
    Malformed(String),
}

/// Error type covering every component of the library
#[derive(Debug, Error)]
pub enum Error {
    /// Linked list error
    #[error("List error: {0}")]
    List(#[from] ListError),
    /// Parse tree error
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
    /// Grammar parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Register machine error
    #[error("VM error: {0}")]
    Vm(#[from] VmError),
    /// Calculator evaluation error
    #[error("Calculator error: {0}")]
    Calc(#[from] CalcError),
}
