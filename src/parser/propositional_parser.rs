use std::error::Error;
use std::fmt;

use pest::error::InputLocation;
use pest::iterators::Pair;
use pest::Parser;

use crate::formulas::{Atom, Formula};

#[derive(Parser)]
#[grammar = "parser/propositional_parser.pest"]
struct PropositionalParser;

/// Parses a propositional formula from its textual syntax.
///
/// Parsing is all-or-nothing: unbalanced parentheses, unknown tokens, missing
/// operands, and trailing input each fail with a [`ParseError`] carrying the
/// byte offset of the offending position.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use proplogic::formulas::Formula;
/// # use proplogic::parser::parse;
/// let p = Formula::atom("P").unwrap();
/// let q = Formula::atom("Q").unwrap();
///
/// assert_eq!(parse("P & Q").unwrap(), p.and(&q));
/// assert_eq!(parse("P ∧ Q").unwrap(), p.and(&q));
///
/// assert!(parse("P & (Q").is_err());
/// assert!(parse("P Q").is_err());
/// ```
pub fn parse<I: AsRef<str>>(input: I) -> Result<Formula, ParseError> {
    let parsed = PropositionalParser::parse(Rule::formula, input.as_ref()).map_err(ParseError::from)?.next().unwrap();

    let mut formula = Formula::verum();

    for x in parsed.into_inner() {
        match x.as_rule() {
            Rule::equivalence => {
                formula = parse_equivalence(x);
            }
            Rule::EOI => (),
            _ => unreachable!(),
        }
    }

    Ok(formula)
}

fn parse_equivalence(equivalence: Pair<Rule>) -> Formula {
    let mut pairs = equivalence.into_inner();
    let mut form = parse_implication(pairs.next().unwrap());

    while let Some(operator) = pairs.next() {
        let form_right = parse_implication(pairs.next().unwrap());
        form = match operator.as_rule() {
            Rule::iff => form.equivalence(&form_right),
            Rule::xor => form.xor(&form_right),
            _ => unreachable!(),
        };
    }
    form
}

fn parse_implication(implication: Pair<Rule>) -> Formula {
    let mut disjunctions = implication.into_inner().filter(|x| x.as_rule() == Rule::disjunction).rev();
    let mut form = parse_disjunction(disjunctions.next().unwrap());

    for disjunction in disjunctions {
        let form_left = parse_disjunction(disjunction);
        form = form_left.implication(&form);
    }
    form
}

fn parse_disjunction(disjunction: Pair<Rule>) -> Formula {
    let mut conjunctions = disjunction.into_inner().filter(|x| x.as_rule() == Rule::conjunction);
    let mut form = parse_conjunction(conjunctions.next().unwrap());

    for conjunction in conjunctions {
        let form_right = parse_conjunction(conjunction);
        form = form.or(&form_right);
    }
    form
}

fn parse_conjunction(conjunction: Pair<Rule>) -> Formula {
    let mut units = conjunction.into_inner().filter(|x| x.as_rule() == Rule::unary);
    let mut form = parse_unary(units.next().unwrap());

    for unit in units {
        let form_right = parse_unary(unit);
        form = form.and(&form_right);
    }
    form
}

fn parse_unary(unary: Pair<Rule>) -> Formula {
    let mut negations = 0_usize;
    let mut tokens = unary.into_inner();
    let mut x = tokens.next().unwrap();
    while x.as_rule() == Rule::not_op {
        negations += 1;
        x = tokens.next().unwrap();
    }

    let mut form = match x.as_rule() {
        Rule::atom => Formula::Atom(Atom::from_valid(x.as_str())),
        Rule::constant => parse_constant(x),
        Rule::equivalence => parse_equivalence(x),
        _ => unreachable!(),
    };

    // `~~a` must stay a double negation; the simplifier owns its removal.
    for _ in 0..negations {
        form = form.negate();
    }
    form
}

fn parse_constant(constant: Pair<Rule>) -> Formula {
    match constant.into_inner().next().unwrap().as_rule() {
        Rule::verum => Formula::verum(),
        Rule::falsum => Formula::falsum(),
        _ => unreachable!(),
    }
}

/// Error describing why an input string is not a well-formed formula.
///
/// `position` is the byte offset into the input at which parsing failed;
/// `message` is pest's human-readable description of what was expected.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseError {
    /// Byte offset of the offending position in the input.
    pub position: usize,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "syntax error at offset {}: {}", self.position, self.message)
    }
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(error: pest::error::Error<Rule>) -> Self {
        let position = match error.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        Self { position, message: error.variant.message().into_owned() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::F;

    fn parse_ok(input: &str) -> Formula {
        parse(input).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(parse_ok("true"), Formula::verum());
        assert_eq!(parse_ok("false"), Formula::falsum());
        assert_eq!(parse_ok("$true"), Formula::verum());
        assert_eq!(parse_ok("$false"), Formula::falsum());
    }

    #[test]
    fn test_atoms_and_literals() {
        let f = F::new();
        assert_eq!(parse_ok("a"), f.a);
        assert_eq!(parse_ok("~a"), f.na);
        assert_eq!(parse_ok("!a"), f.na);
        assert_eq!(parse_ok("¬a"), f.na);
        assert_eq!(parse_ok("NOT a"), f.na);
        assert_eq!(parse_ok("~~a"), f.na.negate());
        assert_eq!(parse_ok("_x1"), Formula::atom("_x1").unwrap());
    }

    #[test]
    fn test_operator_spellings() {
        let f = F::new();
        for input in ["a & b", "a ∧ b", "a AND b"] {
            assert_eq!(parse_ok(input), f.and1);
        }
        for input in ["x | y", "x ∨ y", "x OR y"] {
            assert_eq!(parse_ok(input), f.or1);
        }
        for input in ["a => b", "a -> b", "a → b"] {
            assert_eq!(parse_ok(input), f.imp1);
        }
        for input in ["a <=> b", "a <-> b", "a ↔ b"] {
            assert_eq!(parse_ok(input), f.eq1);
        }
        for input in ["a ^ b", "a ⊕ b", "a XOR b"] {
            assert_eq!(parse_ok(input), f.xor1);
        }
    }

    #[test]
    fn test_precedence() {
        let f = F::new();
        // NOT binds tightest, then AND, OR, IMPLIES, IFF/XOR.
        assert_eq!(parse_ok("~a & b"), f.na.and(&f.b));
        assert_eq!(parse_ok("a & b | c"), f.and1.or(&f.c));
        assert_eq!(parse_ok("c | a & b"), f.c.or(&f.and1));
        assert_eq!(parse_ok("a & b => x | y"), f.and1.implication(&f.or1));
        assert_eq!(parse_ok("a => b <=> c"), f.imp1.equivalence(&f.c));
        assert_eq!(parse_ok("a ^ b => c"), f.a.xor(&f.b.implication(&f.c)));
    }

    #[test]
    fn test_parentheses() {
        let f = F::new();
        assert_eq!(parse_ok("(a)"), f.a);
        assert_eq!(parse_ok("((a))"), f.a);
        assert_eq!(parse_ok("a & (b | c)"), f.a.and(&f.b.or(&f.c)));
        assert_eq!(parse_ok("~(a & b)"), f.not1);
        assert_eq!(parse_ok("(a => b) => c"), f.imp1.implication(&f.c));
    }

    #[test]
    fn test_associativity() {
        let f = F::new();
        // Implication is right-associative, all other connectives fold left.
        assert_eq!(parse_ok("a => b => c"), f.a.implication(&f.b.implication(&f.c)));
        assert_eq!(parse_ok("a & b & c"), f.and1.and(&f.c));
        assert_eq!(parse_ok("a | b | c"), f.a.or(&f.b).or(&f.c));
        assert_eq!(parse_ok("a <=> b <=> c"), f.eq1.equivalence(&f.c));
        assert_eq!(parse_ok("a ^ b <=> c"), f.xor1.equivalence(&f.c));
        assert_eq!(parse_ok("a <=> b ^ c"), f.eq1.xor(&f.c));
        assert_eq!(parse_ok("a <=> (b ^ c)"), f.a.equivalence(&f.b.xor(&f.c)));
    }

    #[test]
    fn test_keywords_do_not_swallow_identifiers() {
        assert_eq!(parse_ok("NOTE"), Formula::atom("NOTE").unwrap());
        assert_eq!(parse_ok("ORACLE | truth"), Formula::atom("ORACLE").unwrap().or(&Formula::atom("truth").unwrap()));
    }

    #[test]
    fn test_errors_carry_positions() {
        assert!(parse("").is_err());
        assert_eq!(parse("a &").unwrap_err().position, 3);
        assert_eq!(parse("a b").unwrap_err().position, 2);
        assert_eq!(parse("(a | b").unwrap_err().position, 6);
        assert!(parse("a ? b").is_err());
        assert!(parse("& a").is_err());
        assert!(parse("a => => b").is_err());
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let f = F::new();
        assert_eq!(parse_ok("a&b"), f.and1);
        assert_eq!(parse_ok("  a   &\tb\n"), f.and1);
    }
}
