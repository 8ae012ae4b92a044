use crate::formulas::{Atom, BinaryOp, Formula};
use crate::util::test_util::F;

#[test]
fn test_constants() {
    assert_eq!(Formula::verum(), Formula::Constant(true));
    assert_eq!(Formula::falsum(), Formula::Constant(false));
    assert_eq!(Formula::constant(true), Formula::verum());
    assert!(Formula::verum().is_verum());
    assert!(Formula::verum().is_constant());
    assert!(!Formula::verum().is_falsum());
    assert_eq!(Formula::falsum().as_constant(), Some(false));
}

#[test]
fn test_atom_construction() {
    let p = Formula::atom("P").unwrap();
    assert!(p.is_atom());
    assert!(p.is_literal());
    assert_eq!(p.as_atom(), Some(&Atom::new("P").unwrap()));
    assert_eq!(p.as_constant(), None);
    assert!(Formula::atom("not valid").is_err());
}

#[test]
fn test_combinators_build_the_requested_node() {
    let f = F::new();
    assert_eq!(f.and1, Formula::Binary(BinaryOp::And, f.a.clone().into(), f.b.clone().into()));
    assert_eq!(f.na, Formula::Not(f.a.clone().into()));
    assert!(f.and1.is_and());
    assert!(f.or1.is_or());
    assert!(f.imp1.is_impl());
    assert!(f.eq1.is_equiv());
    assert!(f.xor1.is_xor());
    assert!(f.not1.is_not());
    assert!(f.na.is_literal());
    assert!(!f.not1.is_literal());
}

#[test]
fn test_structural_equality() {
    let f = F::new();
    // Two independently built trees of the same shape are equal.
    assert_eq!(f.and1, Formula::atom("a").unwrap().and(&Formula::atom("b").unwrap()));
    assert_ne!(f.and1, f.b.and(&f.a));
    assert_ne!(f.imp1, f.eq1);
    assert_ne!(f.a, f.na);
}

#[test]
fn test_no_simplification_on_construction() {
    let f = F::new();
    let formula = f.a.and(&Formula::verum()).or(&Formula::falsum());
    assert_eq!(formula, Formula::parse("(a & true) | false").unwrap());
    assert_ne!(formula, f.a);
    assert_eq!(f.na.negate(), Formula::parse("~~a").unwrap());
}

#[test]
fn test_operand_accessors() {
    let f = F::new();
    assert_eq!(f.imp1.left(), Some(&f.a));
    assert_eq!(f.imp1.right(), Some(&f.b));
    assert_eq!(f.not1.not_operand(), Some(&f.and1));
    assert_eq!(f.a.left(), None);
    assert_eq!(f.not1.left(), None);
    assert_eq!(f.imp1.not_operand(), None);
    assert_eq!(f.and3.operands(), vec![&f.or1, &f.or2]);
    assert_eq!(f.na.operands(), vec![&f.a]);
    assert!(Formula::verum().operands().is_empty());
}

#[test]
fn test_nary_folds() {
    let f = F::new();
    assert_eq!(Formula::conjunction_of([]), Formula::verum());
    assert_eq!(Formula::disjunction_of([]), Formula::falsum());
    assert_eq!(Formula::conjunction_of([f.a.clone()]), f.a);
    assert_eq!(Formula::conjunction_of([f.a.clone(), f.b.clone(), f.c.clone()]), f.and1.and(&f.c));
    assert_eq!(Formula::disjunction_of([f.x.clone(), f.y.clone(), f.z.clone()]), f.or1.or(&f.z));
}

#[test]
fn test_from_atom() {
    let atom = Atom::new("q").unwrap();
    assert_eq!(Formula::from(atom.clone()), Formula::Atom(atom));
}
