//! Evaluation of trees produced by [`calculator_grammar`].
//!
//! [`calculator_grammar`]: super::calculator_grammar

use super::parser::ParseSymbol;
use super::tree::{NodeId, ParseTree};
use crate::error::CalcError;

type CalcTree = ParseTree<ParseSymbol<String>>;

/// Evaluates a calculator parse tree with `i64` arithmetic.
///
/// Operators of equal precedence associate to the left and division
/// truncates toward zero.
pub fn evaluate(tree: &CalcTree) -> Result<i64, CalcError> {
    let root = tree
        .root()
        .ok_or_else(|| CalcError::Malformed("empty tree".to_string()))?;
    expr(tree, root)
}

fn name(tree: &CalcTree, id: NodeId) -> Result<&str, CalcError> {
    match tree.value(id) {
        Some(ParseSymbol::Symbol(symbol)) => Ok(symbol.as_str()),
        Some(ParseSymbol::Empty) => Ok(""),
        None => Err(CalcError::Malformed(format!("unknown node {id:?}"))),
    }
}

fn children(tree: &CalcTree, id: NodeId) -> Result<&[NodeId], CalcError> {
    tree.children(id)
        .ok_or_else(|| CalcError::Malformed(format!("unknown node {id:?}")))
}

fn expect(tree: &CalcTree, id: NodeId, wanted: &str) -> Result<(), CalcError> {
    let found = name(tree, id)?;
    if found == wanted {
        Ok(())
    } else {
        Err(CalcError::Malformed(format!("expected {wanted}, found {found:?}")))
    }
}

fn apply(op: &str, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
    let result = match op {
        "+" => lhs.checked_add(rhs),
        "-" => lhs.checked_sub(rhs),
        "*" => lhs.checked_mul(rhs),
        "/" if rhs == 0 => return Err(CalcError::DivisionByZero),
        "/" => lhs.checked_div(rhs),
        other => return Err(CalcError::Malformed(format!("unknown operator {other:?}"))),
    };
    result.ok_or(CalcError::Overflow)
}

/// `expr -> term expr1` and `term -> factor term1` share one shape: an
/// operand followed by a tail of `op operand tail` or ε.
fn chain(
    tree: &CalcTree,
    id: NodeId,
    operand: fn(&CalcTree, NodeId) -> Result<i64, CalcError>,
) -> Result<i64, CalcError> {
    let [first, tail] = children(tree, id)? else {
        return Err(CalcError::Malformed(format!("{} needs two children", name(tree, id)?)));
    };
    let mut acc = operand(tree, *first)?;
    let mut tail = *tail;
    loop {
        match children(tree, tail)? {
            [op, rhs, rest] => {
                acc = apply(name(tree, *op)?, acc, operand(tree, *rhs)?)?;
                tail = *rest;
            }
            [empty] if name(tree, *empty)?.is_empty() => return Ok(acc),
            _ => return Err(CalcError::Malformed(format!("bad tail at {tail:?}"))),
        }
    }
}

fn expr(tree: &CalcTree, id: NodeId) -> Result<i64, CalcError> {
    expect(tree, id, "expr")?;
    chain(tree, id, term)
}

fn term(tree: &CalcTree, id: NodeId) -> Result<i64, CalcError> {
    expect(tree, id, "term")?;
    chain(tree, id, factor)
}

fn factor(tree: &CalcTree, id: NodeId) -> Result<i64, CalcError> {
    expect(tree, id, "factor")?;
    match children(tree, id)? {
        [number_node] => number(tree, *number_node),
        [_, inner, _] => expr(tree, *inner),
        _ => Err(CalcError::Malformed(format!("bad factor at {id:?}"))),
    }
}

/// Folds `number -> digit number1` down the right spine.
fn number(tree: &CalcTree, id: NodeId) -> Result<i64, CalcError> {
    expect(tree, id, "number")?;
    let mut value: i64 = 0;
    let mut current = id;
    loop {
        match children(tree, current)? {
            [digit, rest] => {
                let [terminal] = children(tree, *digit)? else {
                    return Err(CalcError::Malformed(format!("bad digit at {digit:?}")));
                };
                let d = name(tree, *terminal)?
                    .parse::<i64>()
                    .map_err(|e| CalcError::Malformed(e.to_string()))?;
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(d))
                    .ok_or(CalcError::Overflow)?;
                current = *rest;
            }
            [empty] if name(tree, *empty)?.is_empty() => return Ok(value),
            _ => return Err(CalcError::Malformed(format!("bad number at {current:?}"))),
        }
    }
}
