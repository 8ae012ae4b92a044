use log::trace;

use crate::formulas::{BinaryOp, Formula};
use crate::operations::transformations::nnf;

/// Constructs the disjunctive normal form of `formula` by distribution.
///
/// The dual of [`cnf`](super::cnf()): after the negation normal form is built,
/// conjunctions are distributed over disjunctions until the tree is a
/// disjunction of minterms. Like the CNF conversion, the result is not
/// simplified and can be exponentially larger than the input.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::transformations::dnf;
/// let formula = Formula::parse("(a | b) & c").unwrap();
///
/// assert_eq!(dnf(&formula), Formula::parse("a & c | b & c").unwrap());
/// ```
pub fn dnf(formula: &Formula) -> Formula {
    let nnf = nnf(formula);
    trace!("distributing over the NNF of {} nodes", nnf.number_of_nodes());
    dnf_rec(&nnf)
}

fn dnf_rec(formula: &Formula) -> Formula {
    match formula {
        Formula::Constant(_) | Formula::Atom(_) | Formula::Not(_) => formula.clone(),
        Formula::Binary(BinaryOp::Or, left, right) => dnf_rec(left).or(&dnf_rec(right)),
        Formula::Binary(BinaryOp::And, left, right) => distribute(&dnf_rec(left), &dnf_rec(right)),
        // Unreachable on an NNF, but kept total.
        Formula::Binary(..) => dnf_rec(&nnf(formula)),
    }
}

/// Distributes `left & right` over any top-level disjunction of the two
/// operands, bottoming out in a plain minterm.
fn distribute(left: &Formula, right: &Formula) -> Formula {
    if let Formula::Binary(BinaryOp::Or, first, second) = left {
        distribute(first, right).or(&distribute(second, right))
    } else if let Formula::Binary(BinaryOp::Or, first, second) = right {
        distribute(left, first).or(&distribute(left, second))
    } else {
        left.and(right)
    }
}
