use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use num_bigint::BigUint;

use crate::datastructures::Assignment;
use crate::formulas::{Atom, InvalidAtomName};
use crate::operations::functions::{self, TruthTable};
use crate::operations::predicates;
use crate::operations::transformations::{self, Substitution, UnboundAtom};
use crate::parser::{self, ParseError};

/// The kind of a binary connective.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum BinaryOp {
    /// Conjunction
    And,
    /// Disjunction
    Or,
    /// Implication
    Impl,
    /// Equivalence
    Equiv,
    /// Exclusive disjunction
    Xor,
}

impl BinaryOp {
    /// `a -> b -> c` reads as `a -> (b -> c)`; all other connectives
    /// associate to the left.
    pub(crate) const fn right_associative(self) -> bool {
        matches!(self, Self::Impl)
    }
}

/// A `Formula` represents a propositional formula as an immutable tree.
///
/// The tree is a closed sum type: constants, atoms, negations, and binary
/// connectives. Equality and hashing are structural, so two independently
/// built trees of the same shape compare equal. Sub-formulas are shared via
/// [`Arc`], which makes cloning cheap and keeps `Formula` `Send + Sync`;
/// sharing is an implementation detail and never observable through the API.
///
/// Constructors build exactly the requested node. No simplification happens
/// on construction, so `(P & true) | false` stays as written until
/// [`simplify`](Formula::simplify) is called.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// let p = Formula::atom("P").unwrap();
/// let q = Formula::atom("Q").unwrap();
///
/// let formula = p.and(&q.negate());
///
/// assert_eq!(formula.to_string(), "P & ~Q");
/// assert_eq!(formula, Formula::parse("P & ~Q").unwrap());
/// ```
#[derive(Clone, Hash, Eq, PartialEq, Debug)]
pub enum Formula {
    /// Constant `true` or `false`.
    Constant(bool),
    /// A propositional variable.
    Atom(Atom),
    /// Negation of the operand.
    Not(Arc<Formula>),
    /// A binary connective with its left and right operand.
    Binary(BinaryOp, Arc<Formula>, Arc<Formula>),
}

impl Formula {
    /// Creates the constant `true` or `false`.
    pub const fn constant(value: bool) -> Self {
        Self::Constant(value)
    }

    /// Creates the constant `true`.
    pub const fn verum() -> Self {
        Self::Constant(true)
    }

    /// Creates the constant `false`.
    pub const fn falsum() -> Self {
        Self::Constant(false)
    }

    /// Creates an atomic formula with the given name, or fails with
    /// [`InvalidAtomName`] if the name is not a valid identifier.
    pub fn atom<N: AsRef<str>>(name: N) -> Result<Self, InvalidAtomName> {
        Atom::new(name).map(Self::Atom)
    }

    /// Parses a formula from its textual syntax. See the [`parser`](crate::parser)
    /// module for the grammar.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parser::parse(text)
    }

    /// Creates the negation of this formula.
    pub fn negate(&self) -> Self {
        Self::Not(Arc::new(self.clone()))
    }

    /// Creates the conjunction of this formula and `other`.
    pub fn and(&self, other: &Self) -> Self {
        self.binary(BinaryOp::And, other)
    }

    /// Creates the disjunction of this formula and `other`.
    pub fn or(&self, other: &Self) -> Self {
        self.binary(BinaryOp::Or, other)
    }

    /// Creates the implication from this formula to `other`.
    pub fn implication(&self, other: &Self) -> Self {
        self.binary(BinaryOp::Impl, other)
    }

    /// Creates the equivalence of this formula and `other`.
    pub fn equivalence(&self, other: &Self) -> Self {
        self.binary(BinaryOp::Equiv, other)
    }

    /// Creates the exclusive disjunction of this formula and `other`.
    pub fn xor(&self, other: &Self) -> Self {
        self.binary(BinaryOp::Xor, other)
    }

    fn binary(&self, op: BinaryOp, other: &Self) -> Self {
        Self::Binary(op, Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Creates the left-folded conjunction of `operands`. The empty
    /// conjunction is `true`, a singleton conjunction is the operand itself.
    pub fn conjunction_of<I: IntoIterator<Item = Self>>(operands: I) -> Self {
        Self::fold(BinaryOp::And, operands, Self::verum())
    }

    /// Creates the left-folded disjunction of `operands`. The empty
    /// disjunction is `false`, a singleton disjunction is the operand itself.
    pub fn disjunction_of<I: IntoIterator<Item = Self>>(operands: I) -> Self {
        Self::fold(BinaryOp::Or, operands, Self::falsum())
    }

    fn fold<I: IntoIterator<Item = Self>>(op: BinaryOp, operands: I, empty: Self) -> Self {
        let mut operands = operands.into_iter();
        let Some(first) = operands.next() else {
            return empty;
        };
        operands.fold(first, |acc, operand| Self::Binary(op, Arc::new(acc), Arc::new(operand)))
    }

    /// Returns `true` if this formula is the constant `false`.
    pub const fn is_falsum(&self) -> bool {
        matches!(self, Self::Constant(false))
    }

    /// Returns `true` if this formula is the constant `true`.
    pub const fn is_verum(&self) -> bool {
        matches!(self, Self::Constant(true))
    }

    /// Returns `true` if this formula is a constant.
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns `true` if this formula is an atom.
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    /// Returns `true` if this formula is a literal, i.e. an atom or a negated
    /// atom.
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Atom(_) => true,
            Self::Not(operand) => operand.is_atom(),
            Self::Constant(_) | Self::Binary(..) => false,
        }
    }

    /// Returns `true` if this formula is a negation.
    pub const fn is_not(&self) -> bool {
        matches!(self, Self::Not(_))
    }

    /// Returns `true` if this formula is a conjunction.
    pub const fn is_and(&self) -> bool {
        matches!(self, Self::Binary(BinaryOp::And, _, _))
    }

    /// Returns `true` if this formula is a disjunction.
    pub const fn is_or(&self) -> bool {
        matches!(self, Self::Binary(BinaryOp::Or, _, _))
    }

    /// Returns `true` if this formula is an implication.
    pub const fn is_impl(&self) -> bool {
        matches!(self, Self::Binary(BinaryOp::Impl, _, _))
    }

    /// Returns `true` if this formula is an equivalence.
    pub const fn is_equiv(&self) -> bool {
        matches!(self, Self::Binary(BinaryOp::Equiv, _, _))
    }

    /// Returns `true` if this formula is an exclusive disjunction.
    pub const fn is_xor(&self) -> bool {
        matches!(self, Self::Binary(BinaryOp::Xor, _, _))
    }

    /// Returns the constant value of this formula, or `None` if it is not a
    /// constant.
    pub const fn as_constant(&self) -> Option<bool> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the atom of this formula, or `None` if it is not atomic.
    pub const fn as_atom(&self) -> Option<&Atom> {
        match self {
            Self::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    /// Returns the left operand of a binary connective, or `None` for all
    /// other formulas.
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Binary(_, left, _) => Some(left.as_ref()),
            _ => None,
        }
    }

    /// Returns the right operand of a binary connective, or `None` for all
    /// other formulas.
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Binary(_, _, right) => Some(right.as_ref()),
            _ => None,
        }
    }

    /// Returns the operand of a negation, or `None` for all other formulas.
    pub fn not_operand(&self) -> Option<&Self> {
        match self {
            Self::Not(operand) => Some(operand.as_ref()),
            _ => None,
        }
    }

    /// Returns the direct operands of this formula: both operands of a binary
    /// connective, the single operand of a negation, and nothing for atoms
    /// and constants.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use proplogic::formulas::Formula;
    /// let formula = Formula::parse("a => b").unwrap();
    /// let a = Formula::atom("a").unwrap();
    /// let b = Formula::atom("b").unwrap();
    ///
    /// assert_eq!(formula.operands(), vec![&a, &b]);
    /// assert!(a.operands().is_empty());
    /// ```
    pub fn operands(&self) -> Vec<&Self> {
        match self {
            Self::Constant(_) | Self::Atom(_) => vec![],
            Self::Not(operand) => vec![operand.as_ref()],
            Self::Binary(_, left, right) => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Binding strength used for parenthesization when printing; larger
    /// values bind tighter.
    pub(crate) const fn precedence(&self) -> u8 {
        match self {
            Self::Binary(BinaryOp::Equiv | BinaryOp::Xor, _, _) => 1,
            Self::Binary(BinaryOp::Impl, _, _) => 2,
            Self::Binary(BinaryOp::Or, _, _) => 3,
            Self::Binary(BinaryOp::And, _, _) => 4,
            Self::Not(_) => 5,
            Self::Constant(_) | Self::Atom(_) => 6,
        }
    }

    /// Returns the distinct atoms of this formula in first-occurrence
    /// pre-order. See [`functions::atoms`].
    pub fn atoms(&self) -> Vec<Atom> {
        functions::atoms(self)
    }

    /// Returns every node of this formula in pre-order, one entry per
    /// position. See [`functions::sub_formulas`].
    pub fn sub_formulas(&self) -> Vec<Self> {
        functions::sub_formulas(self)
    }

    /// Returns the depth of this formula's tree. See
    /// [`functions::formula_depth`].
    pub fn depth(&self) -> u64 {
        functions::formula_depth(self)
    }

    /// Returns the number of nodes of this formula's tree. See
    /// [`functions::number_of_nodes`].
    pub fn number_of_nodes(&self) -> u64 {
        functions::number_of_nodes(self)
    }

    /// Evaluates this formula under `assignment`, returning the residual
    /// formula. See [`transformations::evaluate`].
    pub fn evaluate(&self, assignment: &Assignment) -> Self {
        transformations::evaluate(self, assignment)
    }

    /// Evaluates this formula under `assignment` down to a boolean, failing
    /// with [`UnboundAtom`] if the assignment does not bind every atom. See
    /// [`transformations::evaluate_to_bool`].
    pub fn evaluate_to_bool(&self, assignment: &Assignment) -> Result<bool, UnboundAtom> {
        transformations::evaluate_to_bool(self, assignment)
    }

    /// Simplifies this formula to a fixpoint. See
    /// [`transformations::simplify`].
    pub fn simplify(&self) -> Self {
        transformations::simplify(self)
    }

    /// Converts this formula into negation normal form. See
    /// [`transformations::nnf`].
    pub fn nnf(&self) -> Self {
        transformations::nnf(self)
    }

    /// Converts this formula into conjunctive normal form. See
    /// [`transformations::cnf`].
    pub fn cnf(&self) -> Self {
        transformations::cnf(self)
    }

    /// Converts this formula into disjunctive normal form. See
    /// [`transformations::dnf`].
    pub fn dnf(&self) -> Self {
        transformations::dnf(self)
    }

    /// Replaces atoms of this formula by formulas, simultaneously. See
    /// [`transformations::substitute`].
    pub fn substitute(&self, substitution: &Substitution) -> Self {
        transformations::substitute(self, substitution)
    }

    /// Returns `true` if this formula is in negation normal form. See
    /// [`predicates::is_nnf`].
    pub fn is_nnf(&self) -> bool {
        predicates::is_nnf(self)
    }

    /// Returns `true` if this formula is in conjunctive normal form. See
    /// [`predicates::is_cnf`].
    pub fn is_cnf(&self) -> bool {
        predicates::is_cnf(self)
    }

    /// Returns `true` if this formula is in disjunctive normal form. See
    /// [`predicates::is_dnf`].
    pub fn is_dnf(&self) -> bool {
        predicates::is_dnf(self)
    }

    /// Returns `true` if this formula is a clause. See
    /// [`predicates::is_clause`].
    pub fn is_clause(&self) -> bool {
        predicates::is_clause(self)
    }

    /// Returns `true` if this formula is a minterm. See
    /// [`predicates::is_minterm`].
    pub fn is_minterm(&self) -> bool {
        predicates::is_minterm(self)
    }

    /// Returns `true` if this formula is a maxterm. See
    /// [`predicates::is_maxterm`].
    pub fn is_maxterm(&self) -> bool {
        predicates::is_maxterm(self)
    }

    /// Returns `true` if `atom` occurs in this formula. See
    /// [`predicates::contains_atom`].
    pub fn contains_atom(&self, atom: &Atom) -> bool {
        predicates::contains_atom(self, atom)
    }

    /// Returns `true` if `other` occurs as a sub-formula of this formula. See
    /// [`predicates::contains_sub_formula`].
    pub fn contains_sub_formula(&self, other: &Self) -> bool {
        predicates::contains_sub_formula(self, other)
    }

    /// Returns `true` if this formula holds under every assignment. See
    /// [`predicates::is_tautology`].
    pub fn is_tautology(&self) -> bool {
        predicates::is_tautology(self)
    }

    /// Returns `true` if this formula holds under no assignment. See
    /// [`predicates::is_contradiction`].
    pub fn is_contradiction(&self) -> bool {
        predicates::is_contradiction(self)
    }

    /// Returns `true` if this formula holds under at least one assignment.
    /// See [`predicates::is_satisfiable`].
    pub fn is_satisfiable(&self) -> bool {
        predicates::is_satisfiable(self)
    }

    /// Returns `true` if this formula fails under at least one assignment.
    /// See [`predicates::is_falsifiable`].
    pub fn is_falsifiable(&self) -> bool {
        predicates::is_falsifiable(self)
    }

    /// Returns `true` if this formula and `other` agree under every
    /// assignment over their combined atoms. See
    /// [`predicates::is_equivalent`].
    pub fn is_equivalent(&self, other: &Self) -> bool {
        predicates::is_equivalent(self, other)
    }

    /// Computes the truth table of this formula. See
    /// [`functions::truth_table`].
    pub fn truth_table(&self) -> TruthTable {
        functions::truth_table(self)
    }

    /// Counts the satisfying assignments of this formula. See
    /// [`functions::count_models`].
    pub fn count_models(&self) -> BigUint {
        functions::count_models(self)
    }

    /// Returns all satisfying assignments of this formula. See
    /// [`functions::satisfying_assignments`].
    pub fn satisfying_assignments(&self) -> Vec<Assignment> {
        functions::satisfying_assignments(self)
    }

    /// Returns all falsifying assignments of this formula. See
    /// [`functions::falsifying_assignments`].
    pub fn falsifying_assignments(&self) -> Vec<Assignment> {
        functions::falsifying_assignments(self)
    }
}

/// The canonical textual form: `true`/`false`, `~`, `&`, `|`, `=>`, `<=>`,
/// `^`, parenthesized only where precedence and associativity require it.
/// The output parses back to a structurally equal formula.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Constant(true) => f.write_str("true"),
            Self::Constant(false) => f.write_str("false"),
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Not(operand) => {
                f.write_str("~")?;
                write_operand(f, operand, operand.precedence() < self.precedence())
            }
            Self::Binary(op, left, right) => {
                let prec = self.precedence();
                let left_parens =
                    left.precedence() < prec || (left.precedence() == prec && op.right_associative());
                let right_parens =
                    right.precedence() < prec || (right.precedence() == prec && !op.right_associative());
                write_operand(f, left, left_parens)?;
                let symbol = match op {
                    BinaryOp::And => "&",
                    BinaryOp::Or => "|",
                    BinaryOp::Impl => "=>",
                    BinaryOp::Equiv => "<=>",
                    BinaryOp::Xor => "^",
                };
                write!(f, " {symbol} ")?;
                write_operand(f, right, right_parens)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter, operand: &Formula, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Self::Atom(atom)
    }
}
