use log::trace;

use crate::formulas::{BinaryOp, Formula};
use crate::operations::transformations::nnf;

/// Constructs the conjunctive normal form of `formula` by distribution.
///
/// The formula is first brought into negation normal form (which eliminates
/// `=>`, `<=>`, and `^` and pushes negations to the atoms), then disjunctions
/// are distributed over conjunctions until the tree is a conjunction of
/// clauses. The result is equivalent to the input but **not** simplified —
/// chain [`simplify`](super::simplify()) afterwards if a reduced form is
/// wanted. The distribution can grow the formula exponentially; that cost is
/// inherent to CNF conversion.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::transformations::cnf;
/// let formula = Formula::parse("a & b | c").unwrap();
///
/// assert_eq!(cnf(&formula), Formula::parse("(a | c) & (b | c)").unwrap());
/// ```
pub fn cnf(formula: &Formula) -> Formula {
    let nnf = nnf(formula);
    trace!("distributing over the NNF of {} nodes", nnf.number_of_nodes());
    cnf_rec(&nnf)
}

fn cnf_rec(formula: &Formula) -> Formula {
    match formula {
        Formula::Constant(_) | Formula::Atom(_) | Formula::Not(_) => formula.clone(),
        Formula::Binary(BinaryOp::And, left, right) => cnf_rec(left).and(&cnf_rec(right)),
        Formula::Binary(BinaryOp::Or, left, right) => distribute(&cnf_rec(left), &cnf_rec(right)),
        // Unreachable on an NNF, but kept total.
        Formula::Binary(..) => cnf_rec(&nnf(formula)),
    }
}

/// Distributes `left | right` over any top-level conjunction of the two
/// operands, bottoming out in a plain clause.
fn distribute(left: &Formula, right: &Formula) -> Formula {
    if let Formula::Binary(BinaryOp::And, first, second) = left {
        distribute(first, right).and(&distribute(second, right))
    } else if let Formula::Binary(BinaryOp::And, first, second) = right {
        distribute(left, first).and(&distribute(left, second))
    } else {
        left.or(right)
    }
}
