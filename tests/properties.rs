use pretty_assertions::assert_eq;

use proplogic::datastructures::Assignment;
use proplogic::formulas::{Atom, Formula};
use proplogic::operations::transformations::Substitution;

fn parsed(input: &str) -> Formula {
    Formula::parse(input).unwrap()
}

fn fixture_formulas() -> Vec<Formula> {
    [
        "true",
        "false",
        "P",
        "~P",
        "P & Q",
        "P | Q",
        "P => Q",
        "P <=> Q",
        "P ^ Q",
        "~(P & Q) | (R => P)",
        "(P | Q) & (~P | R) & (Q => R)",
        "~(~(P | Q) <=> ~(R | S))",
        "(P ^ Q) => (Q ^ R)",
    ]
    .into_iter()
    .map(parsed)
    .collect()
}

/// Evaluating under a total assignment always yields a constant.
#[test]
fn evaluation_under_total_assignments_is_constant() {
    for formula in fixture_formulas() {
        let atoms = formula.atoms();
        for assignment in Assignment::enumerate(&atoms) {
            let result = formula.evaluate(&assignment);
            assert!(result.is_constant(), "{formula} evaluated to the non-constant {result}");
        }
    }
}

#[test]
fn simplification_is_idempotent() {
    for formula in fixture_formulas() {
        let once = formula.simplify();
        assert_eq!(once.simplify(), once);
    }
    let with_constants = parsed("((P & true) | false) & (Q | ~Q) & ~~R");
    let once = with_constants.simplify();
    assert_eq!(once.simplify(), once);
}

/// `simplify`, `cnf`, and `dnf` preserve the value under every assignment.
#[test]
fn transformations_preserve_equivalence() {
    for formula in fixture_formulas() {
        let atoms = formula.atoms();
        for transformed in [formula.simplify(), formula.cnf(), formula.dnf(), formula.nnf()] {
            for assignment in Assignment::enumerate(&atoms) {
                assert_eq!(
                    formula.evaluate(&assignment),
                    transformed.evaluate(&assignment),
                    "{formula} and {transformed} disagree"
                );
            }
        }
    }
}

#[test]
fn truth_table_atoms_match_get_atoms() {
    for formula in fixture_formulas() {
        let table = formula.truth_table();
        let mut expected = formula.atoms();
        expected.sort();
        assert_eq!(table.atoms(), expected.as_slice());
    }
}

#[test]
fn tautology_agrees_with_truth_table() {
    for formula in fixture_formulas() {
        let table = formula.truth_table();
        assert_eq!(formula.is_tautology(), table.results().all(|result| result));
        assert_eq!(formula.is_contradiction(), table.results().all(|result| !result));
        assert_eq!(formula.is_satisfiable(), table.results().any(|result| result));
        assert_eq!(formula.is_falsifiable(), table.results().any(|result| !result));
    }
}

#[test]
fn equivalence_agrees_with_truth_tables_over_the_union() {
    let pairs = [
        ("~(P & Q)", "~P | ~Q", true),
        ("P => Q", "~P | Q", true),
        ("P", "P & (Q => Q)", true),
        ("P", "P | Q", false),
        ("P & Q", "P & R", false),
    ];
    for (left, right, expected) in pairs {
        let left = parsed(left);
        let right = parsed(right);
        assert_eq!(left.is_equivalent(&right), expected, "{left} vs {right}");

        let mut union = left.atoms();
        for atom in right.atoms() {
            if !union.contains(&atom) {
                union.push(atom);
            }
        }
        let agree = Assignment::enumerate(&union)
            .all(|assignment| left.evaluate(&assignment) == right.evaluate(&assignment));
        assert_eq!(agree, expected);
    }
}

#[test]
fn conjunction_with_implication_evaluates_under_a_total_assignment() {
    let formula = parsed("P & (Q -> R)");
    let assignment = Assignment::from_pairs([("P", true), ("Q", false), ("R", true)]).unwrap();
    assert_eq!(formula.evaluate(&assignment), Formula::verum());
    assert_eq!(formula.evaluate_to_bool(&assignment), Ok(true));
}

#[test]
fn constant_operands_simplify_away() {
    assert_eq!(parsed("(P & true) | false").simplify(), parsed("P"));
}

#[test]
fn cnf_of_an_implication_contains_no_implication() {
    let cnf = parsed("P -> Q").cnf();
    assert!(cnf.is_cnf());
    assert!(cnf.sub_formulas().iter().all(|sub| !sub.is_impl()));
    assert!(cnf.is_equivalent(&parsed("~P | Q")));
}

#[test]
fn excluded_middle_is_a_tautology_with_two_true_rows() {
    let formula = parsed("P | NOT P");
    let table = formula.truth_table();
    assert_eq!(table.row_count(), 2);
    assert!(table.results().all(|result| result));
    assert!(formula.is_tautology());
}

#[test]
fn substituting_an_atom_by_a_disjunction() {
    let mut substitution = Substitution::new();
    substitution.insert(Atom::new("P").unwrap(), parsed("R | S"));
    assert_eq!(parsed("P & Q").substitute(&substitution), parsed("(R | S) & Q"));
}

#[test]
fn partial_evaluation_leaves_residuals_over_unbound_atoms() {
    let formula = parsed("(P | Q) & (R => S)");
    let partial = Assignment::from_pairs([("P", false), ("R", false)]).unwrap();
    let residual = formula.evaluate(&partial);
    assert_eq!(residual, parsed("Q"));

    let partial = Assignment::from_pairs([("P", true)]).unwrap();
    let residual = formula.evaluate(&partial);
    assert_eq!(residual, parsed("R => S"));
    let residual_atoms = residual.atoms();
    let names: Vec<&str> = residual_atoms.iter().map(Atom::name).collect();
    assert_eq!(names, vec!["R", "S"]);
}

#[test]
fn normal_forms_eliminate_the_rich_connectives() {
    for formula in fixture_formulas() {
        for normal in [formula.cnf(), formula.dnf()] {
            assert!(normal
                .sub_formulas()
                .iter()
                .all(|sub| !sub.is_impl() && !sub.is_equiv() && !sub.is_xor()));
        }
    }
}

#[test]
fn decision_procedures_relate_as_duals() {
    for formula in fixture_formulas() {
        let negated = formula.negate();
        assert_eq!(formula.is_contradiction(), negated.is_tautology());
        assert_eq!(formula.is_satisfiable(), !formula.is_contradiction());
        assert_eq!(formula.is_falsifiable(), !formula.is_tautology());
    }
}
