use crate::formulas::{BinaryOp, Formula};

use super::is_minterm;

/// DNF predicate. Indicates whether a formula is in disjunctive normal form,
/// i.e. a disjunction of minterms.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::is_dnf;
/// assert!(is_dnf(&Formula::parse("a").unwrap()));
/// assert!(is_dnf(&Formula::parse("a & c | b & c").unwrap()));
/// assert!(!is_dnf(&Formula::parse("(a | b) & c").unwrap()));
/// ```
pub fn is_dnf(formula: &Formula) -> bool {
    match formula {
        Formula::Binary(BinaryOp::Or, left, right) => is_dnf(left) && is_dnf(right),
        _ => is_minterm(formula),
    }
}
