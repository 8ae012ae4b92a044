use crate::formulas::{BinaryOp, Formula};

/// Constructs the negation normal form of `formula`.
///
/// The result contains only conjunctions, disjunctions, and literals:
/// implications, equivalences, and exclusive disjunctions are eliminated by
/// their and/or/not expansions, and negations are pushed down to the atoms
/// via De Morgan's laws and double-negation elimination. The expansion of an
/// equivalence (and of its negation, an exclusive disjunction) is chosen in
/// clause form so that a subsequent CNF distribution has less work to do.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::transformations::nnf;
/// let formula = Formula::parse("~(a => b)").unwrap();
///
/// assert_eq!(nnf(&formula), Formula::parse("a & ~b").unwrap());
/// ```
pub fn nnf(formula: &Formula) -> Formula {
    nnf_rec(formula, true)
}

fn nnf_rec(formula: &Formula, polarity: bool) -> Formula {
    match formula {
        Formula::Constant(value) => Formula::constant(*value == polarity),
        Formula::Atom(_) => {
            if polarity {
                formula.clone()
            } else {
                formula.negate()
            }
        }
        Formula::Not(operand) => nnf_rec(operand, !polarity),
        Formula::Binary(BinaryOp::And, left, right) => {
            if polarity {
                nnf_rec(left, true).and(&nnf_rec(right, true))
            } else {
                nnf_rec(left, false).or(&nnf_rec(right, false))
            }
        }
        Formula::Binary(BinaryOp::Or, left, right) => {
            if polarity {
                nnf_rec(left, true).or(&nnf_rec(right, true))
            } else {
                nnf_rec(left, false).and(&nnf_rec(right, false))
            }
        }
        Formula::Binary(BinaryOp::Impl, left, right) => {
            if polarity {
                nnf_rec(left, false).or(&nnf_rec(right, true))
            } else {
                nnf_rec(left, true).and(&nnf_rec(right, false))
            }
        }
        Formula::Binary(BinaryOp::Equiv, left, right) => nnf_equiv(left, right, polarity),
        // An exclusive disjunction is the negated equivalence.
        Formula::Binary(BinaryOp::Xor, left, right) => nnf_equiv(left, right, !polarity),
    }
}

fn nnf_equiv(left: &Formula, right: &Formula, polarity: bool) -> Formula {
    let left_true = nnf_rec(left, true);
    let left_false = nnf_rec(left, false);
    let right_true = nnf_rec(right, true);
    let right_false = nnf_rec(right, false);
    if polarity {
        left_false.or(&right_true).and(&left_true.or(&right_false))
    } else {
        left_false.or(&right_false).and(&left_true.or(&right_true))
    }
}
