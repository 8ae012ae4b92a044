use crate::formulas::Formula;

/// Returns every node of `formula` in pre-order: the formula itself first,
/// then the nodes of each operand.
///
/// The result holds **one entry per tree position**, so a sub-structure that
/// occurs at two positions appears twice. Deduplicating structurally equal
/// sub-formulas would silently change the contract; callers wanting a set can
/// collect the result into one.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::functions::sub_formulas;
/// let formula = Formula::parse("a & b | c").unwrap();
///
/// let subs: Vec<String> = sub_formulas(&formula).iter().map(|s| s.to_string()).collect();
/// assert_eq!(subs, vec!["a & b | c", "a & b", "a", "b", "c"]);
/// ```
pub fn sub_formulas(formula: &Formula) -> Vec<Formula> {
    let mut result = Vec::new();
    collect(formula, &mut result);
    result
}

fn collect(formula: &Formula, result: &mut Vec<Formula>) {
    result.push(formula.clone());
    match formula {
        Formula::Constant(_) | Formula::Atom(_) => {}
        Formula::Not(operand) => collect(operand, result),
        Formula::Binary(_, left, right) => {
            collect(left, result);
            collect(right, result);
        }
    }
}

/// Returns the number of tree nodes of `formula`, counting every position.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::functions::number_of_nodes;
/// assert_eq!(number_of_nodes(&Formula::parse("true").unwrap()), 1);
/// assert_eq!(number_of_nodes(&Formula::parse("a => b").unwrap()), 3);
/// assert_eq!(number_of_nodes(&Formula::parse("~(a & b)").unwrap()), 4);
/// ```
pub fn number_of_nodes(formula: &Formula) -> u64 {
    match formula {
        Formula::Constant(_) | Formula::Atom(_) => 1,
        Formula::Not(operand) => 1 + number_of_nodes(operand),
        Formula::Binary(_, left, right) => 1 + number_of_nodes(left) + number_of_nodes(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::F;

    #[test]
    fn test_atomic_formulas() {
        let f = F::new();
        assert_eq!(sub_formulas(&f.a), vec![f.a.clone()]);
        assert_eq!(sub_formulas(&Formula::verum()), vec![Formula::verum()]);
        assert_eq!(number_of_nodes(&f.a), 1);
    }

    #[test]
    fn test_pre_order() {
        let f = F::new();
        // ~(a & b): the node itself, the conjunction, then its operands.
        assert_eq!(sub_formulas(&f.not1), vec![f.not1.clone(), f.and1.clone(), f.a.clone(), f.b.clone()]);
        assert_eq!(number_of_nodes(&f.not1), 4);
    }

    #[test]
    fn test_one_entry_per_position() {
        // `a` occurs at three positions, `a & b` at two.
        let f = F::new();
        let formula = f.and1.or(&f.and1.and(&f.a));
        let subs = sub_formulas(&formula);
        assert_eq!(subs.len(), 9);
        assert_eq!(subs.iter().filter(|s| **s == f.a).count(), 3);
        assert_eq!(subs.iter().filter(|s| **s == f.and1).count(), 2);
        assert_eq!(number_of_nodes(&formula), 9);
    }
}
