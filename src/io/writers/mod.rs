pub mod formula_writer;
