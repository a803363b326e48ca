//! Region 5 coefficient tables (IF97 2007 revision).

use crate::support::if97::term::{IdealTerm, Term};

/// Ideal-gas part of the Gibbs free energy, IF97 eq. 33, Table 37.
pub(crate) const IDEAL: [IdealTerm; 6] = [
    IdealTerm::new(0, -0.131_799_836_742_01e2),
    IdealTerm::new(1, 0.685_408_416_344_34e1),
    IdealTerm::new(-3, -0.248_051_489_334_66e-1),
    IdealTerm::new(-2, 0.369_015_349_803_33),
    IdealTerm::new(-1, -0.311_613_182_139_25e1),
    IdealTerm::new(2, -0.329_616_265_389_17),
];

/// Residual part of the Gibbs free energy, IF97 eq. 34, Table 38.
pub(crate) const RESIDUAL: [Term; 6] = [
    Term::new(1, 1, 0.157_364_048_552_59e-2),
    Term::new(1, 2, 0.901_537_616_739_44e-3),
    Term::new(1, 3, -0.502_700_776_776_48e-2),
    Term::new(2, 3, 0.224_400_374_094_85e-5),
    Term::new(2, 9, -0.411_632_754_534_71e-5),
    Term::new(3, 7, 0.379_194_548_229_55e-7),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_table() {
        assert_eq!(IDEAL.len(), 6);
        assert_eq!(IDEAL[0], IdealTerm::new(0, -0.13179983674201e2));
        assert_eq!(IDEAL[2], IdealTerm::new(-3, -0.24805148933466e-1));
        assert_eq!(IDEAL[5], IdealTerm::new(2, -0.32961626538917));
    }

    #[test]
    fn residual_table() {
        assert_eq!(RESIDUAL.len(), 6);
        assert_eq!(RESIDUAL[0], Term::new(1, 1, 0.15736404855259e-2));
        assert_eq!(RESIDUAL[4], Term::new(2, 9, -0.41163275453471e-5));
        assert_eq!(RESIDUAL[5], Term::new(3, 7, 0.37919454822955e-7));
    }
}
