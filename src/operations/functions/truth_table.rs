use std::fmt;

use itertools::Itertools;

use crate::datastructures::Assignment;
use crate::formulas::{Atom, Formula};
use crate::operations::functions::atoms;
use crate::operations::transformations::evaluate_to_bool;

/// The truth table of a formula: one row per total assignment over the
/// formula's atoms, together with the value the formula takes.
///
/// Rows are ordered by binary counting over the **sorted** atom list, with
/// `false` as 0 and `true` as 1 and the first atom as the most significant
/// digit. A formula over `n` distinct atoms has exactly `2^n` rows; a
/// formula without atoms has a single row holding its constant value.
///
/// The [`Display`](fmt::Display) implementation renders an aligned text
/// table.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TruthTable {
    atoms: Vec<Atom>,
    rows: Vec<TruthTableRow>,
}

/// A single row of a [`TruthTable`]: the assignment, as one boolean per
/// (sorted) atom, and the value the formula evaluates to under it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TruthTableRow {
    /// The assigned values, in the order of [`TruthTable::atoms`].
    pub values: Vec<bool>,
    /// The value of the formula under this row's assignment.
    pub result: bool,
}

impl TruthTable {
    /// Returns the atoms of the table, sorted by name. Every row assigns its
    /// values in this order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Returns all rows in binary counting order.
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Returns the number of rows, which is `2^n` for `n` atoms.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the result column in row order.
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// Reconstructs the assignment of the row at `index`.
    pub fn assignment(&self, index: usize) -> Assignment {
        self.atoms.iter().cloned().zip(self.rows[index].values.iter().copied()).collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let widths: Vec<usize> = self.atoms.iter().map(|atom| atom.name().len().max(5)).collect();
        let header = self.atoms.iter().zip(&widths).map(|(atom, &width)| format!("{:>width$}", atom.name())).join(" | ");
        if header.is_empty() {
            writeln!(f, "result")?;
        } else {
            writeln!(f, "{header} | result")?;
        }
        for row in &self.rows {
            let values = row.values.iter().zip(&widths).map(|(value, &width)| format!("{value:>width$}")).join(" | ");
            if values.is_empty() {
                writeln!(f, "{:>6}", row.result)?;
            } else {
                writeln!(f, "{values} | {:>6}", row.result)?;
            }
        }
        Ok(())
    }
}

/// Computes the truth table of `formula` by evaluating it under every total
/// assignment over its atoms.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::operations::functions::truth_table;
/// let formula = Formula::parse("P | ~P").unwrap();
/// let table = truth_table(&formula);
///
/// assert_eq!(table.row_count(), 2);
/// assert!(table.results().all(|result| result));
/// ```
pub fn truth_table(formula: &Formula) -> TruthTable {
    let mut atoms = atoms(formula);
    atoms.sort();
    let rows = Assignment::enumerate(&atoms)
        .map(|assignment| {
            let values = atoms.iter().map(|atom| assignment.get(atom) == Some(true)).collect();
            let result =
                evaluate_to_bool(formula, &assignment).expect("enumerated assignments bind every atom of the formula");
            TruthTableRow { values, result }
        })
        .collect();
    TruthTable { atoms, rows }
}
