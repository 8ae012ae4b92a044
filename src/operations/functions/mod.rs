mod atoms;
mod formula_depth_function;
mod models;
mod sub_formula_function;
mod truth_table;

pub use atoms::*;
pub use formula_depth_function::*;
pub use models::*;
pub use sub_formula_function::*;
pub use truth_table::*;
