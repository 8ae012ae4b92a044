use num_bigint::BigUint;

use crate::datastructures::Assignment;
use crate::formulas::Formula;
use crate::operations::functions::atoms;
use crate::operations::transformations::evaluate_to_bool;

/// Computes the model count of `formula`: the number of total assignments
/// over its atoms under which it evaluates to `true`.
///
/// The count is computed by exhaustive enumeration, so it takes `O(2^n)`
/// evaluations for `n` distinct atoms. A formula without atoms has one model
/// if it is `true` and none if it is `false`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use num_bigint::BigUint;
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::functions::count_models;
/// let formula = Formula::parse("a | b").unwrap();
///
/// assert_eq!(count_models(&formula), BigUint::from(3_usize));
/// ```
pub fn count_models(formula: &Formula) -> BigUint {
    BigUint::from(models(formula, true).len())
}

/// Returns every assignment under which `formula` evaluates to `true`, in
/// binary counting order over the sorted atoms.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::{Atom, Formula};
/// # use proplogic::operations::functions::satisfying_assignments;
/// let formula = Formula::parse("a => ~a").unwrap();
/// let models = satisfying_assignments(&formula);
///
/// assert_eq!(models.len(), 1);
/// assert_eq!(models[0].get(&Atom::new("a").unwrap()), Some(false));
/// ```
pub fn satisfying_assignments(formula: &Formula) -> Vec<Assignment> {
    models(formula, true)
}

/// Returns every assignment under which `formula` evaluates to `false`, in
/// binary counting order over the sorted atoms.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::functions::falsifying_assignments;
/// let formula = Formula::parse("a | ~a").unwrap();
///
/// assert!(falsifying_assignments(&formula).is_empty());
/// ```
pub fn falsifying_assignments(formula: &Formula) -> Vec<Assignment> {
    models(formula, false)
}

fn models(formula: &Formula, wanted: bool) -> Vec<Assignment> {
    let mut atoms = atoms(formula);
    atoms.sort();
    Assignment::enumerate(&atoms)
        .filter(|assignment| {
            evaluate_to_bool(formula, assignment).expect("enumerated assignments bind every atom of the formula")
                == wanted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::F;

    fn count(input: &str) -> BigUint {
        count_models(&Formula::parse(input).unwrap())
    }

    fn value_rows(assignments: &[Assignment], names: &[&str]) -> Vec<Vec<bool>> {
        assignments
            .iter()
            .map(|assignment| {
                names.iter().map(|name| assignment.get(&crate::formulas::Atom::new(name).unwrap()) == Some(true)).collect()
            })
            .collect()
    }

    #[test]
    fn test_constant_formulas() {
        assert_eq!(count("true"), BigUint::from(1_usize));
        assert_eq!(count("false"), BigUint::from(0_usize));
    }

    #[test]
    fn test_counts() {
        assert_eq!(count("a"), BigUint::from(1_usize));
        assert_eq!(count("a & b"), BigUint::from(1_usize));
        assert_eq!(count("a | b"), BigUint::from(3_usize));
        assert_eq!(count("a => b"), BigUint::from(3_usize));
        assert_eq!(count("a <=> b"), BigUint::from(2_usize));
        assert_eq!(count("a | ~a"), BigUint::from(2_usize));
        assert_eq!(count("a & ~a"), BigUint::from(0_usize));
    }

    #[test]
    fn test_satisfying_assignments() {
        let f = F::new();
        let models = satisfying_assignments(&f.and1);
        assert_eq!(value_rows(&models, &["a", "b"]), vec![vec![true, true]]);

        let models = satisfying_assignments(&f.imp1);
        assert_eq!(value_rows(&models, &["a", "b"]), vec![vec![false, false], vec![false, true], vec![true, true]]);
    }

    #[test]
    fn test_falsifying_assignments() {
        let f = F::new();
        let falsifying = falsifying_assignments(&f.imp1);
        assert_eq!(value_rows(&falsifying, &["a", "b"]), vec![vec![true, false]]);
        assert!(falsifying_assignments(&f.a.or(&f.na)).is_empty());
    }

    #[test]
    fn test_partition_covers_all_assignments() {
        let f = F::new();
        let formula = &f.eq3;
        let total = satisfying_assignments(formula).len() + falsifying_assignments(formula).len();
        assert_eq!(total, 1 << formula.atoms().len());
    }
}
