mod atom;
mod formula;
mod symbols;

/// We deviate from the convention of putting unit tests in the source file in
/// this case, s.t. the files don't become too large
#[cfg(test)]
mod tests;

pub use atom::*;
pub use formula::*;
pub use symbols::*;
