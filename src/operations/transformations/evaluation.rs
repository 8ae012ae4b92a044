use std::error::Error;
use std::fmt;

use crate::datastructures::Assignment;
use crate::formulas::{Atom, BinaryOp, Formula};

/// Evaluates `formula` under `assignment` and returns the residual formula.
///
/// Every atom bound by the assignment is replaced by its constant, and
/// constants are folded away during the recursion: a dominating operand
/// (`false` in a conjunction, `true` in a disjunction) short-circuits without
/// evaluating the other side, identity operands disappear, and the constant
/// cases of `=>`, `<=>`, and `^` reduce to the other operand or its negation.
/// Unbound atoms evaluate to themselves, so a partial assignment yields a
/// residual formula over the unbound atoms, while a total assignment always
/// yields a [`Formula::Constant`].
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::datastructures::Assignment;
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::transformations::evaluate;
/// let formula = Formula::parse("(a | b) & c").unwrap();
///
/// let total = Assignment::from_pairs([("a", true), ("b", false), ("c", true)]).unwrap();
/// let partial = Assignment::from_pairs([("b", false)]).unwrap();
///
/// assert_eq!(evaluate(&formula, &total), Formula::constant(true));
/// assert_eq!(evaluate(&formula, &partial), Formula::parse("a & c").unwrap());
/// ```
pub fn evaluate(formula: &Formula, assignment: &Assignment) -> Formula {
    match formula {
        Formula::Constant(_) => formula.clone(),
        Formula::Atom(atom) => assignment.get(atom).map_or_else(|| formula.clone(), Formula::constant),
        Formula::Not(operand) => negate_folded(evaluate(operand, assignment)),
        Formula::Binary(op, left, right) => evaluate_binary(*op, left, right, assignment),
    }
}

fn evaluate_binary(op: BinaryOp, left: &Formula, right: &Formula, assignment: &Assignment) -> Formula {
    let left = evaluate(left, assignment);
    // A constant on the left either decides the result before the right
    // operand is ever visited, or reduces to the right operand (possibly
    // negated).
    match (op, left.as_constant()) {
        (BinaryOp::And, Some(false)) => Formula::falsum(),
        (BinaryOp::Or, Some(true)) | (BinaryOp::Impl, Some(false)) => Formula::verum(),
        (BinaryOp::And | BinaryOp::Impl | BinaryOp::Equiv, Some(true)) | (BinaryOp::Or | BinaryOp::Xor, Some(false)) => {
            evaluate(right, assignment)
        }
        (BinaryOp::Equiv, Some(false)) | (BinaryOp::Xor, Some(true)) => negate_folded(evaluate(right, assignment)),
        (_, None) => {
            let right = evaluate(right, assignment);
            match (op, right.as_constant()) {
                (BinaryOp::And, Some(false)) => Formula::falsum(),
                (BinaryOp::Or | BinaryOp::Impl, Some(true)) => Formula::verum(),
                (BinaryOp::And | BinaryOp::Equiv, Some(true)) | (BinaryOp::Or | BinaryOp::Xor, Some(false)) => left,
                (BinaryOp::Impl | BinaryOp::Equiv, Some(false)) | (BinaryOp::Xor, Some(true)) => negate_folded(left),
                (_, None) => Formula::Binary(op, left.into(), right.into()),
            }
        }
    }
}

fn negate_folded(formula: Formula) -> Formula {
    formula.as_constant().map_or_else(|| formula.negate(), |value| Formula::constant(!value))
}

/// Evaluates `formula` under `assignment` down to a primitive boolean.
///
/// This is the caller-side unwrap of [`evaluate`]: if the assignment does not
/// bind every atom of the formula, the residual is not a constant and the
/// function fails with [`UnboundAtom`] naming the first unbound atom.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::datastructures::Assignment;
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::transformations::evaluate_to_bool;
/// let formula = Formula::parse("a & b").unwrap();
///
/// let total = Assignment::from_pairs([("a", true), ("b", true)]).unwrap();
/// let partial = Assignment::from_pairs([("a", true)]).unwrap();
///
/// assert_eq!(evaluate_to_bool(&formula, &total), Ok(true));
/// assert_eq!(evaluate_to_bool(&formula, &partial).unwrap_err().atom.name(), "b");
/// ```
pub fn evaluate_to_bool(formula: &Formula, assignment: &Assignment) -> Result<bool, UnboundAtom> {
    let residual = evaluate(formula, assignment);
    match residual.as_constant() {
        Some(value) => Ok(value),
        None => {
            let mut atoms = residual.atoms();
            Err(UnboundAtom { atom: atoms.swap_remove(0) })
        }
    }
}

/// Error returned by [`evaluate_to_bool`] when the assignment leaves an atom
/// of the formula unbound.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UnboundAtom {
    /// The first unbound atom encountered.
    pub atom: Atom,
}

impl Error for UnboundAtom {}

impl fmt::Display for UnboundAtom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "atom {} is not bound by the assignment", self.atom)
    }
}
