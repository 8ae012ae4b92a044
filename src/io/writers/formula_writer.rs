use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};

use crate::formulas::{BinaryOp, Formula, SymbolTable};

/// Writes a `Formula` to a file. If the file already exists, its contents
/// will be overridden.
///
/// If the formula is a conjunction, each of its operands will be written in a
/// separate line.
///
/// If any error occurs when creating or writing the file, a respective
/// [`io::Error`] is returned.
///
/// # Examples
///
/// If you run the following code:
///
/// ```no_run
/// # use proplogic::formulas::Formula;
/// # use proplogic::io::write_formula;
/// let my_formula = Formula::parse("(A | B) & ~(C => A) & E").unwrap();
/// write_formula("path/to/my-formula.txt", &my_formula).expect("Something went wrong");
/// ```
///
/// the contents of the file `path/to/my-formula.txt` will be as follows:
///
/// ```text
/// A | B
/// ~(C => A)
/// E
/// ```
pub fn write_formula(file_path: &str, formula: &Formula) -> io::Result<()> {
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    for conjunct in conjuncts(formula) {
        writer.write_all(conjunct.to_string().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

fn conjuncts(formula: &Formula) -> Vec<&Formula> {
    match formula {
        Formula::Binary(BinaryOp::And, left, right) => {
            let mut result = conjuncts(left);
            result.extend(conjuncts(right));
            result
        }
        _ => vec![formula],
    }
}

/// Renders `formula` with the symbols of the given [`SymbolTable`], for
/// consumption by external display collaborators.
///
/// Bracketing follows the same precedence rules as the [`Display`]
/// implementation of [`Formula`]; only the printed symbols differ, so the
/// output is generally *not* parseable — use `Display` for a round-trippable
/// form.
///
/// [`Display`]: std::fmt::Display
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::{Formula, SymbolTable};
/// # use proplogic::io::render;
/// let formula = Formula::parse("p & (q => ~p)").unwrap();
///
/// assert_eq!(render(&formula, &SymbolTable::unicode()), "p ∧ (q → ¬p)");
/// ```
pub fn render(formula: &Formula, symbols: &SymbolTable) -> String {
    match formula {
        Formula::Constant(true) => symbols.verum.clone(),
        Formula::Constant(false) => symbols.falsum.clone(),
        Formula::Atom(atom) => symbols.atom_symbol(atom).to_string(),
        Formula::Not(operand) => {
            let rendered = render_operand(operand, operand.precedence() < formula.precedence(), symbols);
            format!("{}{rendered}", symbols.not)
        }
        Formula::Binary(op, left, right) => {
            let prec = formula.precedence();
            let left_parens = left.precedence() < prec || (left.precedence() == prec && op.right_associative());
            let right_parens = right.precedence() < prec || (right.precedence() == prec && !op.right_associative());
            format!(
                "{} {} {}",
                render_operand(left, left_parens, symbols),
                symbols.binary_symbol(*op),
                render_operand(right, right_parens, symbols)
            )
        }
    }
}

fn render_operand(operand: &Formula, parens: bool, symbols: &SymbolTable) -> String {
    if parens {
        format!("({})", render(operand, symbols))
    } else {
        render(operand, symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::Atom;

    fn parsed(input: &str) -> Formula {
        Formula::parse(input).unwrap()
    }

    #[test]
    fn test_render_ascii_matches_display() {
        for input in ["true", "~a", "a & (b | c)", "a => b => c", "~(a <=> b) ^ c"] {
            let formula = parsed(input);
            assert_eq!(render(&formula, &SymbolTable::ascii()), formula.to_string());
        }
    }

    #[test]
    fn test_render_unicode() {
        assert_eq!(render(&parsed("~(P & Q)"), &SymbolTable::unicode()), "¬(P ∧ Q)");
        assert_eq!(render(&parsed("P => Q | R"), &SymbolTable::unicode()), "P → Q ∨ R");
        assert_eq!(render(&parsed("true | false"), &SymbolTable::unicode()), "⊤ ∨ ⊥");
    }

    #[test]
    fn test_render_latex() {
        assert_eq!(render(&parsed("~P"), &SymbolTable::latex()), "\\lnot P");
        assert_eq!(render(&parsed("P & Q"), &SymbolTable::latex()), "P \\land Q");
    }

    #[test]
    fn test_render_atom_override() {
        let symbols = SymbolTable::latex().with_atom_symbol(Atom::new("phi").unwrap(), "\\varphi");
        assert_eq!(render(&parsed("phi & psi"), &symbols), "\\varphi \\land psi");
    }
}
