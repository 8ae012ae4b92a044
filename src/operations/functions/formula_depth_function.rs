use crate::formulas::Formula;

/// A function that returns the depth of a formula's tree. The depth indicates
/// how many levels of nested sub-formulas a formula has: atoms and constants
/// have depth zero, every operator adds one level on top of its deepest
/// operand.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::functions::formula_depth;
/// assert_eq!(formula_depth(&Formula::parse("a").unwrap()), 0);
/// assert_eq!(formula_depth(&Formula::parse("a & b").unwrap()), 1);
/// assert_eq!(formula_depth(&Formula::parse("(a & b) | c").unwrap()), 2);
/// assert_eq!(formula_depth(&Formula::parse("~(a & b) | c").unwrap()), 3);
/// ```
pub fn formula_depth(formula: &Formula) -> u64 {
    match formula {
        Formula::Constant(_) | Formula::Atom(_) => 0,
        Formula::Not(operand) => 1 + formula_depth(operand),
        Formula::Binary(_, left, right) => 1 + formula_depth(left).max(formula_depth(right)),
    }
}
