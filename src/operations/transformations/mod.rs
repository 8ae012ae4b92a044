mod cnf;
mod dnf;
mod evaluation;
mod nnf;
mod simplification;
mod substitution;

pub use cnf::*;
pub use dnf::*;
pub use evaluation::*;
pub use nnf::*;
pub use simplification::*;
pub use substitution::*;
