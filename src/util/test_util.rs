#![allow(dead_code)]

use crate::formulas::Formula;

/// A fixture of small formulas shared by the unit tests.
pub(crate) struct F {
    // Atoms
    pub(crate) a: Formula,
    pub(crate) b: Formula,
    pub(crate) c: Formula,
    pub(crate) d: Formula,
    pub(crate) x: Formula,
    pub(crate) y: Formula,
    pub(crate) z: Formula,

    // Negated atoms
    pub(crate) na: Formula,
    pub(crate) nb: Formula,
    pub(crate) nx: Formula,
    pub(crate) ny: Formula,

    // Disjunctions
    pub(crate) or1: Formula,
    pub(crate) or2: Formula,
    pub(crate) or3: Formula,

    // Conjunctions
    pub(crate) and1: Formula,
    pub(crate) and2: Formula,
    pub(crate) and3: Formula,

    // Negations
    pub(crate) not1: Formula,
    pub(crate) not2: Formula,

    // Implications
    pub(crate) imp1: Formula,
    pub(crate) imp2: Formula,
    pub(crate) imp3: Formula,
    pub(crate) imp4: Formula,

    // Equivalences
    pub(crate) eq1: Formula,
    pub(crate) eq2: Formula,
    pub(crate) eq3: Formula,
    pub(crate) eq4: Formula,

    // Exclusive disjunctions
    pub(crate) xor1: Formula,
}

impl F {
    pub(crate) fn new() -> Self {
        let a = Formula::atom("a").unwrap();
        let b = Formula::atom("b").unwrap();
        let c = Formula::atom("c").unwrap();
        let d = Formula::atom("d").unwrap();
        let x = Formula::atom("x").unwrap();
        let y = Formula::atom("y").unwrap();
        let z = Formula::atom("z").unwrap();

        let na = a.negate();
        let nb = b.negate();
        let nx = x.negate();
        let ny = y.negate();

        let or1 = x.or(&y);
        let or2 = nx.or(&ny);
        let and1 = a.and(&b);
        let and2 = na.and(&nb);

        let or3 = and1.or(&and2);
        let and3 = or1.and(&or2);

        let not1 = and1.negate();
        let not2 = or1.negate();

        let imp1 = a.implication(&b);
        let imp2 = na.implication(&nb);
        let imp3 = and1.implication(&or1);

        let eq1 = a.equivalence(&b);
        let eq5 = nx.equivalence(&ny);
        let imp4 = eq1.implication(&eq5);

        let eq2 = na.equivalence(&nb);
        let eq3 = and1.equivalence(&or1);
        let eq4 = imp1.equivalence(&imp2);

        let xor1 = a.xor(&b);

        Self {
            a,
            b,
            c,
            d,
            x,
            y,
            z,
            na,
            nb,
            nx,
            ny,
            or1,
            or2,
            or3,
            and1,
            and2,
            and3,
            not1,
            not2,
            imp1,
            imp2,
            imp3,
            imp4,
            eq1,
            eq2,
            eq3,
            eq4,
            xor1,
        }
    }
}
