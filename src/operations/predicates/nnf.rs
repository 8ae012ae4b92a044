use crate::formulas::{BinaryOp, Formula};

/// NNF predicate. Indicates whether a formula is in negation normal form,
/// i.e. built from literals, conjunctions, and disjunctions only.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::is_nnf;
/// assert!(is_nnf(&Formula::parse("a & ~b").unwrap()));
/// assert!(is_nnf(&Formula::parse("(a & (~b | c) & ~c) | d").unwrap()));
/// assert!(!is_nnf(&Formula::parse("a => b").unwrap()));
/// assert!(!is_nnf(&Formula::parse("~(a | b)").unwrap()));
/// ```
pub fn is_nnf(formula: &Formula) -> bool {
    match formula {
        Formula::Constant(_) | Formula::Atom(_) => true,
        Formula::Not(operand) => operand.is_atom(),
        Formula::Binary(BinaryOp::And | BinaryOp::Or, left, right) => is_nnf(left) && is_nnf(right),
        Formula::Binary(..) => false,
    }
}
