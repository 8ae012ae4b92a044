use std::collections::HashMap;

use crate::formulas::{Atom, BinaryOp};

/// A display-only mapping from connectives (and optionally single atoms) to
/// the strings an external renderer should print for them.
///
/// The symbol table has no effect on semantics, parsing, or evaluation; the
/// core never reads it. It exists so that external collaborators (typesetting
/// backends, visualizers) can be handed one explicit value instead of relying
/// on process-wide state. [`crate::io::render`] consumes it.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::{Formula, SymbolTable};
/// # use proplogic::io::render;
/// let formula = Formula::parse("~(P & Q)").unwrap();
///
/// assert_eq!(render(&formula, &SymbolTable::unicode()), "¬(P ∧ Q)");
/// assert_eq!(render(&formula, &SymbolTable::latex()), "\\lnot (P \\land Q)");
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SymbolTable {
    /// Symbol for negation.
    pub not: String,
    /// Symbol for conjunction.
    pub and: String,
    /// Symbol for disjunction.
    pub or: String,
    /// Symbol for implication.
    pub implication: String,
    /// Symbol for equivalence.
    pub equivalence: String,
    /// Symbol for exclusive disjunction.
    pub xor: String,
    /// Symbol for the constant `true`.
    pub verum: String,
    /// Symbol for the constant `false`.
    pub falsum: String,
    atom_symbols: HashMap<Atom, String>,
}

impl SymbolTable {
    /// The parse-compatible ASCII symbols. This is the [`Default`] table.
    pub fn ascii() -> Self {
        Self::preset("~", "&", "|", "=>", "<=>", "^", "true", "false")
    }

    /// Unicode connective symbols.
    pub fn unicode() -> Self {
        Self::preset("¬", "∧", "∨", "→", "↔", "⊕", "⊤", "⊥")
    }

    /// LaTeX commands for the connectives.
    pub fn latex() -> Self {
        Self::preset("\\lnot ", "\\land", "\\lor", "\\rightarrow", "\\leftrightarrow", "\\oplus", "\\top", "\\bot")
    }

    #[allow(clippy::too_many_arguments)]
    fn preset(not: &str, and: &str, or: &str, implication: &str, equivalence: &str, xor: &str, verum: &str, falsum: &str) -> Self {
        Self {
            not: not.to_string(),
            and: and.to_string(),
            or: or.to_string(),
            implication: implication.to_string(),
            equivalence: equivalence.to_string(),
            xor: xor.to_string(),
            verum: verum.to_string(),
            falsum: falsum.to_string(),
            atom_symbols: HashMap::new(),
        }
    }

    /// Adds a display override for a single atom, e.g. mapping the atom `phi`
    /// to `φ` or to `\varphi`.
    #[must_use]
    pub fn with_atom_symbol<S: Into<String>>(mut self, atom: Atom, symbol: S) -> Self {
        self.atom_symbols.insert(atom, symbol.into());
        self
    }

    /// Returns the display string for `atom`: the registered override, or the
    /// atom's name.
    pub fn atom_symbol<'a>(&'a self, atom: &'a Atom) -> &'a str {
        self.atom_symbols.get(atom).map_or_else(|| atom.name(), String::as_str)
    }

    /// Returns the display string for the binary connective `op`.
    pub fn binary_symbol(&self, op: BinaryOp) -> &str {
        match op {
            BinaryOp::And => &self.and,
            BinaryOp::Or => &self.or,
            BinaryOp::Impl => &self.implication,
            BinaryOp::Equiv => &self.equivalence,
            BinaryOp::Xor => &self.xor,
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_override() {
        let phi = Atom::new("phi").unwrap();
        let psi = Atom::new("psi").unwrap();
        let symbols = SymbolTable::unicode().with_atom_symbol(phi.clone(), "φ");
        assert_eq!(symbols.atom_symbol(&phi), "φ");
        assert_eq!(symbols.atom_symbol(&psi), "psi");
    }

    #[test]
    fn test_default_is_ascii() {
        assert_eq!(SymbolTable::default(), SymbolTable::ascii());
    }
}
