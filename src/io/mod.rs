mod writers;

pub use writers::formula_writer::*;
