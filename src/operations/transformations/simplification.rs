use log::debug;

use crate::formulas::{BinaryOp, Formula};

/// Simplifies `formula` by rewriting it bottom-up until no rule fires.
///
/// The rule set shrinks the tree while preserving equivalence:
///
/// - constant folding: `~true`, `~false`, and the constant cases of every
///   binary connective (`a & true → a`, `a & false → false`, `a | false → a`,
///   `a | true → true`, `true => a → a`, `a => false → ~a`, `true <=> a → a`,
///   `false ^ a → a`, …),
/// - double negation: `~~a → a`,
/// - idempotence: `a & a → a`, `a | a → a`,
/// - complement: `a & ~a → false`, `a | ~a → true`,
/// - absorption: `a & (a | b) → a`, `a | (a & b) → a`.
///
/// De Morgan rewrites are deliberately absent: simplification reduces size
/// and never reshapes the tree towards a normal form — that is the job of
/// [`cnf`](super::cnf()) and [`dnf`](super::dnf()).
///
/// The result is a fixpoint: `simplify(simplify(f)) == simplify(f)`. Every
/// rule strictly decreases the node count, so the rewriting terminates.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::transformations::simplify;
/// let formula = Formula::parse("(a & true) | false").unwrap();
/// assert_eq!(simplify(&formula), Formula::parse("a").unwrap());
///
/// let formula = Formula::parse("a & b | ~(a & b)").unwrap();
/// assert_eq!(simplify(&formula), Formula::verum());
/// ```
pub fn simplify(formula: &Formula) -> Formula {
    let mut current = formula.clone();
    let mut passes = 0_u32;
    loop {
        let next = simplify_pass(&current);
        passes += 1;
        if next == current {
            debug!("simplification reached its fixpoint after {passes} passes");
            return next;
        }
        current = next;
    }
}

fn simplify_pass(formula: &Formula) -> Formula {
    match formula {
        Formula::Constant(_) | Formula::Atom(_) => formula.clone(),
        Formula::Not(operand) => simplify_not(simplify_pass(operand)),
        Formula::Binary(op, left, right) => {
            let left = simplify_pass(left);
            let right = simplify_pass(right);
            match op {
                BinaryOp::And => simplify_and(left, right),
                BinaryOp::Or => simplify_or(left, right),
                BinaryOp::Impl => simplify_impl(left, right),
                BinaryOp::Equiv => simplify_equiv(left, right),
                BinaryOp::Xor => simplify_xor(left, right),
            }
        }
    }
}

fn simplify_not(operand: Formula) -> Formula {
    match operand {
        Formula::Constant(value) => Formula::constant(!value),
        Formula::Not(inner) => inner.as_ref().clone(),
        _ => operand.negate(),
    }
}

fn simplify_and(left: Formula, right: Formula) -> Formula {
    if left.is_falsum() || right.is_falsum() {
        return Formula::falsum();
    }
    if left.is_verum() {
        return right;
    }
    if right.is_verum() || left == right {
        return left;
    }
    if complementary(&left, &right) {
        return Formula::falsum();
    }
    if absorbs(&left, BinaryOp::Or, &right) {
        return left;
    }
    if absorbs(&right, BinaryOp::Or, &left) {
        return right;
    }
    left.and(&right)
}

fn simplify_or(left: Formula, right: Formula) -> Formula {
    if left.is_verum() || right.is_verum() {
        return Formula::verum();
    }
    if left.is_falsum() {
        return right;
    }
    if right.is_falsum() || left == right {
        return left;
    }
    if complementary(&left, &right) {
        return Formula::verum();
    }
    if absorbs(&left, BinaryOp::And, &right) {
        return left;
    }
    if absorbs(&right, BinaryOp::And, &left) {
        return right;
    }
    left.or(&right)
}

fn simplify_impl(left: Formula, right: Formula) -> Formula {
    match (left.as_constant(), right.as_constant()) {
        (Some(true), _) => right,
        (Some(false), _) | (_, Some(true)) => Formula::verum(),
        (_, Some(false)) => simplify_not(left),
        (None, None) => left.implication(&right),
    }
}

fn simplify_equiv(left: Formula, right: Formula) -> Formula {
    match (left.as_constant(), right.as_constant()) {
        (Some(true), _) => right,
        (Some(false), _) => simplify_not(right),
        (_, Some(true)) => left,
        (_, Some(false)) => simplify_not(left),
        (None, None) => left.equivalence(&right),
    }
}

fn simplify_xor(left: Formula, right: Formula) -> Formula {
    match (left.as_constant(), right.as_constant()) {
        (Some(false), _) => right,
        (Some(true), _) => simplify_not(right),
        (_, Some(false)) => left,
        (_, Some(true)) => simplify_not(left),
        (None, None) => left.xor(&right),
    }
}

/// One operand is exactly the negation of the other.
fn complementary(left: &Formula, right: &Formula) -> bool {
    right.not_operand() == Some(left) || left.not_operand() == Some(right)
}

/// `keeper` absorbs `Binary(inner_op, x, y)` if it equals one of the operands.
fn absorbs(keeper: &Formula, inner_op: BinaryOp, other: &Formula) -> bool {
    match other {
        Formula::Binary(op, left, right) if *op == inner_op => left.as_ref() == keeper || right.as_ref() == keeper,
        _ => false,
    }
}
