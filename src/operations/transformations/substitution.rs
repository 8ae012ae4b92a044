use std::collections::HashMap;

use crate::formulas::{Atom, Formula};

/// A `Substitution` maps atoms to formulas.
pub type Substitution = HashMap<Atom, Formula>;

/// Replaces atoms of the given formula with the formulas they map to.
///
/// All replacements happen simultaneously: a replacement formula is inserted
/// as-is and never re-visited, so a substitution like `{a ↦ b, b ↦ a}` swaps
/// the two atoms instead of collapsing them. Unmapped atoms stay unchanged.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::{Atom, Formula};
/// # use proplogic::operations::transformations::{substitute, Substitution};
/// let formula = Formula::parse("a & b").unwrap();
///
/// let mut substitution = Substitution::new();
/// substitution.insert(Atom::new("a").unwrap(), Formula::parse("c => d").unwrap());
///
/// assert_eq!(substitute(&formula, &substitution), Formula::parse("(c => d) & b").unwrap());
/// ```
pub fn substitute(formula: &Formula, substitution: &Substitution) -> Formula {
    match formula {
        Formula::Constant(_) => formula.clone(),
        Formula::Atom(atom) => substitution.get(atom).unwrap_or(formula).clone(),
        Formula::Not(operand) => substitute(operand, substitution).negate(),
        Formula::Binary(op, left, right) => {
            Formula::Binary(*op, substitute(left, substitution).into(), substitute(right, substitution).into())
        }
    }
}
