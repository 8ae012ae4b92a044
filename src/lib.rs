#![doc = include_str!("../README.md")]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// Various datastructures.
pub mod datastructures;
/// Types to represent and manage formulas.
pub mod formulas;
/// Functions for writing formulas to files and rendering them for display.
pub mod io;
/// Functions, Predicates, and Transformations for formulas.
pub mod operations;
/// Parsing of propositional formulas from their textual syntax.
pub mod parser;
mod util;
