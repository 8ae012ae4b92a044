//! Parser for the textual formula syntax.
//!
//! The grammar uses the usual precedence climbing: negation binds tightest,
//! then conjunction, disjunction, implication, and finally equivalence and
//! exclusive disjunction. Implication is right-associative, everything else
//! folds to the left, and parentheses override precedence. Each connective
//! accepts its common alternative spellings (`~`/`!`/`¬`/`NOT`, `&`/`∧`/`AND`,
//! `|`/`∨`/`OR`, `->`/`=>`/`→`, `<->`/`<=>`/`↔`, `^`/`⊕`/`XOR`), and the
//! constants are written `true`/`false` (or `$true`/`$false`).

mod propositional_parser;

pub use propositional_parser::*;
