use std::collections::HashSet;
use std::iter;

use itertools::{Either, Itertools};

use crate::formulas::{Atom, InvalidAtomName};

/// An `Assignment` (or interpretation) maps atoms to truth values.
///
/// Atoms are stored in two [`HashSet`]s, one for the atoms assigned `true`
/// and one for the atoms assigned `false`. An assignment may be partial: an
/// atom in neither set is *unbound*, which is a regular state and not an
/// error — evaluating a formula under a partial assignment yields a residual
/// formula over the unbound atoms.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::datastructures::Assignment;
/// # use proplogic::formulas::Atom;
/// let p = Atom::new("P").unwrap();
/// let q = Atom::new("Q").unwrap();
///
/// let assignment = Assignment::from_pairs([("P", true)]).unwrap();
///
/// assert_eq!(assignment.get(&p), Some(true));
/// assert_eq!(assignment.get(&q), None);
/// ```
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Assignment {
    pos: HashSet<Atom>,
    neg: HashSet<Atom>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assignment binding every atom in `pos` to `true` and every
    /// atom in `neg` to `false`. An atom listed in both slices ends up
    /// negative.
    pub fn from_atoms(pos: &[Atom], neg: &[Atom]) -> Self {
        let mut assignment = Self::new();
        for atom in pos {
            assignment.set(atom.clone(), true);
        }
        for atom in neg {
            assignment.set(atom.clone(), false);
        }
        assignment
    }

    /// Creates an assignment from `(name, value)` pairs, validating each name
    /// as an atom identifier.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use proplogic::datastructures::Assignment;
    /// let assignment = Assignment::from_pairs([("P", true), ("Q", false)]).unwrap();
    /// assert_eq!(assignment.len(), 2);
    ///
    /// assert!(Assignment::from_pairs([("2P", true)]).is_err());
    /// ```
    pub fn from_pairs<'a, I: IntoIterator<Item = (&'a str, bool)>>(pairs: I) -> Result<Self, InvalidAtomName> {
        let mut assignment = Self::new();
        for (name, value) in pairs {
            assignment.set(Atom::new(name)?, value);
        }
        Ok(assignment)
    }

    /// Binds `atom` to `value`. A previous binding of the same atom is
    /// replaced.
    pub fn set(&mut self, atom: Atom, value: bool) {
        if value {
            self.neg.remove(&atom);
            self.pos.insert(atom);
        } else {
            self.pos.remove(&atom);
            self.neg.insert(atom);
        }
    }

    /// Returns the value bound to `atom`, or `None` if the atom is unbound.
    pub fn get(&self, atom: &Atom) -> Option<bool> {
        if self.pos.contains(atom) {
            Some(true)
        } else if self.neg.contains(atom) {
            Some(false)
        } else {
            None
        }
    }

    /// Returns `true` if `atom` is bound by this assignment.
    pub fn bound(&self, atom: &Atom) -> bool {
        self.pos.contains(atom) || self.neg.contains(atom)
    }

    /// Returns the number of bound atoms.
    pub fn len(&self) -> usize {
        self.pos.len() + self.neg.len()
    }

    /// Returns `true` if no atom is bound.
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty() && self.neg.is_empty()
    }

    /// Returns the atoms bound to `true`.
    pub fn pos(&self) -> &HashSet<Atom> {
        &self.pos
    }

    /// Returns the atoms bound to `false`.
    pub fn neg(&self) -> &HashSet<Atom> {
        &self.neg
    }

    /// Enumerates all `2^n` total assignments over `atoms` in binary counting
    /// order with `false` as 0 and `true` as 1: the first atom is the most
    /// significant and varies slowest. An empty atom slice yields the single
    /// empty assignment.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use proplogic::datastructures::Assignment;
    /// # use proplogic::formulas::Atom;
    /// let p = Atom::new("P").unwrap();
    /// let q = Atom::new("Q").unwrap();
    /// let atoms = vec![p.clone(), q.clone()];
    ///
    /// let assignments: Vec<Assignment> = Assignment::enumerate(&atoms).collect();
    ///
    /// assert_eq!(assignments.len(), 4);
    /// assert_eq!(assignments[0].get(&p), Some(false));
    /// assert_eq!(assignments[0].get(&q), Some(false));
    /// assert_eq!(assignments[1].get(&q), Some(true));
    /// assert_eq!(assignments[3].get(&p), Some(true));
    /// ```
    pub fn enumerate(atoms: &[Atom]) -> impl Iterator<Item = Self> + '_ {
        if atoms.is_empty() {
            Either::Left(iter::once(Self::new()))
        } else {
            Either::Right(
                (0..atoms.len())
                    .map(|_| [false, true])
                    .multi_cartesian_product()
                    .map(move |values| atoms.iter().cloned().zip(values).collect()),
            )
        }
    }
}

impl FromIterator<(Atom, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Atom, bool)>>(iter: I) -> Self {
        let mut assignment = Self::new();
        for (atom, value) in iter {
            assignment.set(atom, value);
        }
        assignment
    }
}
