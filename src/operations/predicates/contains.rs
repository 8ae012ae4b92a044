use crate::formulas::{Atom, Formula};

/// Returns `true` if the given atom occurs somewhere in this formula.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::{Atom, Formula};
/// # use proplogic::operations::predicates::contains_atom;
/// let formula = Formula::parse("a => (b & c)").unwrap();
///
/// assert!(contains_atom(&formula, &Atom::new("b").unwrap()));
/// assert!(!contains_atom(&formula, &Atom::new("d").unwrap()));
/// ```
pub fn contains_atom(formula: &Formula, atom: &Atom) -> bool {
    match formula {
        Formula::Constant(_) => false,
        Formula::Atom(this) => this == atom,
        Formula::Not(operand) => contains_atom(operand, atom),
        Formula::Binary(_, left, right) => contains_atom(left, atom) || contains_atom(right, atom),
    }
}

/// Returns `true` if `needle` occurs as a sub-formula of `formula`, i.e.
/// equals the node at some tree position (including the root).
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::contains_sub_formula;
/// let formula = Formula::parse("a => (b & c)").unwrap();
///
/// assert!(contains_sub_formula(&formula, &Formula::parse("b & c").unwrap()));
/// assert!(!contains_sub_formula(&formula, &Formula::parse("a => b").unwrap()));
/// ```
pub fn contains_sub_formula(formula: &Formula, needle: &Formula) -> bool {
    formula == needle
        || match formula {
            Formula::Constant(_) | Formula::Atom(_) => false,
            Formula::Not(operand) => contains_sub_formula(operand, needle),
            Formula::Binary(_, left, right) => contains_sub_formula(left, needle) || contains_sub_formula(right, needle),
        }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::F;

    fn atom(name: &str) -> Atom {
        Atom::new(name).unwrap()
    }

    #[test]
    fn test_contains_atom() {
        let f = F::new();
        assert!(!contains_atom(&Formula::verum(), &atom("a")));
        assert!(contains_atom(&f.a, &atom("a")));
        assert!(contains_atom(&f.na, &atom("a")));
        assert!(contains_atom(&f.imp4, &atom("x")));
        assert!(!contains_atom(&f.imp4, &atom("c")));
        assert!(!contains_atom(&f.and1, &atom("A")));
    }

    #[test]
    fn test_contains_sub_formula() {
        let f = F::new();
        assert!(contains_sub_formula(&f.and1, &f.and1));
        assert!(contains_sub_formula(&f.not1, &f.and1));
        assert!(contains_sub_formula(&f.imp4, &f.eq1));
        assert!(contains_sub_formula(&f.or3, &f.na));
        assert!(!contains_sub_formula(&f.and1, &f.not1));
        assert!(!contains_sub_formula(&f.imp1, &f.imp2));
    }
}
