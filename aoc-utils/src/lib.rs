//! Puzzle Primitives Library
//!
//! Reusable building blocks for Advent of Code style puzzles.
//!
//! # Overview
//!
//! This library provides:
//! - [`span`]: closed integer intervals and canonical interval sets with
//!   union, intersection and subtraction
//! - [`linked_list`]: singly and doubly linked lists addressed by stable,
//!   checked handles
//! - [`grammar`]: context-free grammars, FIRST sets, a predictive parser
//!   producing arena-backed parse trees, and a calculator preset
//! - [`vm`]: register machines, either table-driven or the three-register
//!   3-bit dialect with combo operands
//!
//! # Quick Example
//!
//! ```
//! use aoc_utils::grammar::{calculator_grammar, char_tokens, evaluate};
//! use aoc_utils::span::SpanSet;
//! use aoc_utils::vm::{Processor, ThreeBitComputer};
//!
//! let ranges = SpanSet::from_pairs([(1, 3), (2, 4), (9, 9), (10, 10)]);
//! assert_eq!(ranges.total(), Some(6));
//!
//! let tree = calculator_grammar().parse(&char_tokens("(1 + 2) * 3")).unwrap();
//! assert_eq!(evaluate(&tree), Ok(9));
//!
//! let mut computer = ThreeBitComputer::with_registers(0, 0, 9);
//! computer.load([2, 6, 5, 5]);
//! computer.run().unwrap();
//! assert_eq!(computer.output_string(), "1");
//! ```
//!
//! # Errors
//!
//! Each component has its own error enum ([`ListError`], [`TreeError`],
//! [`ParseError`], [`VmError`], [`CalcError`]); [`Error`] wraps them all for
//! callers that mix components. Errors are returned immediately and never
//! leave a structure half-modified.
//!
//! # Logging
//!
//! Parsing and machine runs emit [`tracing`] events (`debug` per run, `trace`
//! per step). Install a subscriber to see them.

mod error;

pub mod grammar;
pub mod linked_list;
pub mod span;
pub mod vm;

pub use error::{CalcError, Error, ListError, ParseError, TreeError, VmError};
