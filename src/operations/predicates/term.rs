use crate::formulas::{BinaryOp, Formula};

/// Term predicate. Indicates whether a formula is a clause ( = maxterm =
/// disjunction of literals).
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::is_clause;
/// assert!(is_clause(&Formula::parse("a").unwrap()));
/// assert!(is_clause(&Formula::parse("a | ~b").unwrap()));
/// assert!(!is_clause(&Formula::parse("a & b").unwrap()));
/// assert!(!is_clause(&Formula::parse("a | ~b => b & c").unwrap()));
/// ```
pub fn is_clause(formula: &Formula) -> bool {
    is_maxterm(formula)
}

/// Term predicate. Indicates whether a formula is a maxterm (disjunction of
/// literals).
pub fn is_maxterm(formula: &Formula) -> bool {
    match formula {
        Formula::Constant(_) => true,
        Formula::Binary(BinaryOp::Or, left, right) => literals_under(BinaryOp::Or, left) && literals_under(BinaryOp::Or, right),
        _ => formula.is_literal(),
    }
}

/// Term predicate. Indicates whether a formula is a minterm (conjunction of
/// literals).
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::predicates::is_minterm;
/// assert!(is_minterm(&Formula::parse("a").unwrap()));
/// assert!(is_minterm(&Formula::parse("a & ~b").unwrap()));
/// assert!(!is_minterm(&Formula::parse("a | ~b").unwrap()));
/// ```
pub fn is_minterm(formula: &Formula) -> bool {
    match formula {
        Formula::Constant(_) => true,
        Formula::Binary(BinaryOp::And, left, right) => literals_under(BinaryOp::And, left) && literals_under(BinaryOp::And, right),
        _ => formula.is_literal(),
    }
}

/// A (possibly nested) `op`-chain whose leaves are all literals.
fn literals_under(op: BinaryOp, formula: &Formula) -> bool {
    match formula {
        Formula::Binary(inner, left, right) if *inner == op => literals_under(op, left) && literals_under(op, right),
        _ => formula.is_literal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::F;

    #[test]
    fn test_minterm() {
        let f = F::new();
        assert!(is_minterm(&Formula::verum()));
        assert!(is_minterm(&Formula::falsum()));
        assert!(is_minterm(&f.a));
        assert!(is_minterm(&f.na));
        assert!(is_minterm(&f.and1));
        assert!(is_minterm(&f.and2));
        assert!(is_minterm(&f.and1.and(&f.c).and(&f.nx)));
        assert!(!is_minterm(&f.or1));
        assert!(!is_minterm(&f.or3));
        assert!(!is_minterm(&f.and3));
        assert!(!is_minterm(&f.imp1));
        assert!(!is_minterm(&f.eq1));
        assert!(!is_minterm(&f.not1));
    }

    #[test]
    fn test_maxterm() {
        let f = F::new();
        assert!(is_maxterm(&Formula::verum()));
        assert!(is_maxterm(&Formula::falsum()));
        assert!(is_maxterm(&f.a));
        assert!(is_maxterm(&f.na));
        assert!(is_maxterm(&f.or1));
        assert!(is_maxterm(&f.or2));
        assert!(is_maxterm(&f.or1.or(&f.na).or(&f.c)));
        assert!(!is_maxterm(&f.and1));
        assert!(!is_maxterm(&f.or3));
        assert!(!is_maxterm(&f.and3));
        assert!(!is_maxterm(&f.imp1));
        assert!(!is_maxterm(&f.not1));
    }

    #[test]
    fn test_clause_is_maxterm() {
        let f = F::new();
        assert!(is_clause(&f.or2));
        assert!(!is_clause(&f.and3));
    }
}
