use crate::formulas::{Atom, Formula};

/// Returns the distinct atoms of `formula` in first-occurrence pre-order.
///
/// The order is stable for display purposes; callers that need a canonical
/// order (like the truth table) sort the result themselves.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::functions::atoms;
/// let formula = Formula::parse("(b => a) & c & ~a").unwrap();
///
/// let formula_atoms = atoms(&formula);
/// let names: Vec<&str> = formula_atoms.iter().map(|a| a.name()).collect();
/// assert_eq!(names, vec!["b", "a", "c"]);
/// ```
pub fn atoms(formula: &Formula) -> Vec<Atom> {
    let mut result = Vec::new();
    collect(formula, &mut result);
    result
}

fn collect(formula: &Formula, result: &mut Vec<Atom>) {
    match formula {
        Formula::Constant(_) => {}
        Formula::Atom(atom) => {
            if !result.contains(atom) {
                result.push(atom.clone());
            }
        }
        Formula::Not(operand) => collect(operand, result),
        Formula::Binary(_, left, right) => {
            collect(left, result);
            collect(right, result);
        }
    }
}
