mod cnf;
mod contains;
mod dnf;
mod nnf;
mod sat;
mod term;

pub use cnf::*;
pub use contains::*;
pub use dnf::*;
pub use nnf::*;
pub use sat::*;
pub use term::*;
