use crate::datastructures::Assignment;
use crate::formulas::Formula;
use crate::operations::transformations::evaluate_to_bool;

/// A predicate indicating whether a formula is a tautology, that is, holds
/// under every assignment. An example of a tautology is `(a & b) | (~a & b) |
/// (a & ~b) | (~a & ~b)`.
///
/// The check enumerates all `2^n` total assignments over the formula's `n`
/// distinct atoms and stops at the first counterexample. A formula without
/// atoms is a tautology exactly if it evaluates to `true`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::is_tautology;
/// assert!(is_tautology(&Formula::parse("p | ~p").unwrap()));
/// assert!(is_tautology(&Formula::parse("(p & q) => p").unwrap()));
/// assert!(!is_tautology(&Formula::parse("p & q").unwrap()));
/// ```
pub fn is_tautology(formula: &Formula) -> bool {
    let atoms = formula.atoms();
    let result = Assignment::enumerate(&atoms).all(|assignment| {
        evaluate_to_bool(formula, &assignment).expect("enumerated assignments bind every atom of the formula")
    });
    result
}

/// A predicate indicating whether a formula is a contradiction, that is,
/// fails under every assignment — equivalently, whether its negation is a
/// tautology.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::is_contradiction;
/// assert!(is_contradiction(&Formula::parse("p & ~p").unwrap()));
/// assert!(!is_contradiction(&Formula::parse("p | q").unwrap()));
/// ```
pub fn is_contradiction(formula: &Formula) -> bool {
    is_tautology(&formula.negate())
}

/// A predicate indicating whether a formula is satisfiable, that is, holds
/// under at least one assignment.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::is_satisfiable;
/// assert!(is_satisfiable(&Formula::parse("a & b | c").unwrap()));
/// assert!(!is_satisfiable(&Formula::parse("a & ~a").unwrap()));
/// ```
pub fn is_satisfiable(formula: &Formula) -> bool {
    !is_contradiction(formula)
}

/// A predicate indicating whether a formula is falsifiable, that is, fails
/// under at least one assignment.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::is_falsifiable;
/// assert!(is_falsifiable(&Formula::parse("a & b").unwrap()));
/// assert!(!is_falsifiable(&Formula::parse("a | ~a").unwrap()));
/// ```
pub fn is_falsifiable(formula: &Formula) -> bool {
    !is_tautology(formula)
}

/// A predicate indicating whether two formulas are semantically equivalent:
/// their equivalence must be a tautology over the union of both formulas'
/// atoms.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::is_equivalent;
/// let de_morgan = Formula::parse("~(a & b)").unwrap();
/// let expanded = Formula::parse("~a | ~b").unwrap();
///
/// assert!(is_equivalent(&de_morgan, &expanded));
/// assert!(!is_equivalent(&de_morgan, &Formula::parse("~a & ~b").unwrap()));
/// ```
pub fn is_equivalent(formula: &Formula, other: &Formula) -> bool {
    is_tautology(&formula.equivalence(other))
}
