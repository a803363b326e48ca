//! Region 2 coefficient tables.
//!
//! The forward tables define the Gibbs free energy of the whole region; the
//! backward tables are split by subregion (2a, 2b, 2c).

use crate::support::if97::term::{IdealTerm, RationalTerm, Term};

/// Ideal-gas part of the Gibbs free energy, IF97 eq. 16, Table 10.
pub(crate) const IDEAL: [IdealTerm; 9] = [
    IdealTerm::new(0, -0.96927686500217e1),
    IdealTerm::new(1, 0.10086655968018e2),
    IdealTerm::new(-5, -0.56087911283020e-2),
    IdealTerm::new(-4, 0.71452738081455e-1),
    IdealTerm::new(-3, -0.40710498223928),
    IdealTerm::new(-2, 0.14240819171444e1),
    IdealTerm::new(-1, -0.43839511319450e1),
    IdealTerm::new(2, -0.28408632460772),
    IdealTerm::new(3, 0.21268463753307e-1),
];

/// Residual part of the Gibbs free energy, IF97 eq. 17, Table 11.
pub(crate) const RESIDUAL: [Term; 43] = [
    Term::new(1, 0, -0.0017731742473213),
    Term::new(1, 1, -0.017834862292358),
    Term::new(1, 2, -0.045996013696365),
    Term::new(1, 3, -0.057581259083432),
    Term::new(1, 6, -0.05032527872793),
    Term::new(2, 1, -0.000033032641670203),
    Term::new(2, 2, -0.00018948987516315),
    Term::new(2, 4, -0.0039392777243355),
    Term::new(2, 7, -0.043797295650573),
    Term::new(2, 36, -0.000026674547914087),
    Term::new(3, 0, 2.0481737692309e-8),
    Term::new(3, 1, 4.3870667284435e-7),
    Term::new(3, 3, -0.00003227767723857),
    Term::new(3, 6, -0.0015033924542148),
    Term::new(3, 35, -0.040668253562649),
    Term::new(4, 1, -7.8847309559367e-10),
    Term::new(4, 2, 1.2790717852285e-8),
    Term::new(4, 3, 4.8225372718507e-7),
    Term::new(5, 7, 2.2922076337661e-6),
    Term::new(6, 3, -1.6714766451061e-11),
    Term::new(6, 16, -0.0021171472321355),
    Term::new(6, 35, -23.895741934104),
    Term::new(7, 0, -5.905956432427e-18),
    Term::new(7, 11, -1.2621808899101e-6),
    Term::new(7, 25, -0.038946842435739),
    Term::new(8, 8, 1.1256211360459e-11),
    Term::new(8, 36, -8.2311340897998),
    Term::new(9, 13, 1.9809712802088e-8),
    Term::new(10, 4, 1.0406965210174e-19),
    Term::new(10, 10, -1.0234747095929e-13),
    Term::new(10, 14, -1.0018179379511e-9),
    Term::new(16, 29, -8.0882908646985e-11),
    Term::new(16, 50, 0.10693031879409),
    Term::new(18, 57, -0.33662250574171),
    Term::new(20, 20, 8.9185845355421e-25),
    Term::new(20, 35, 3.0629316876232e-13),
    Term::new(20, 48, -4.2002467698208e-6),
    Term::new(21, 21, -5.9056029685639e-26),
    Term::new(22, 53, 3.7826947613457e-6),
    Term::new(23, 39, -1.2768608934681e-15),
    Term::new(24, 26, 7.3087610595061e-29),
    Term::new(24, 40, 5.5414715350778e-17),
    Term::new(24, 58, -9.436970724121e-7),
];

/// Backward `T(p, h)` for subregion 2a, IF97 eq. 22, Table 20.
pub(crate) const T_PH_A: [Term; 34] = [
    Term::new(0, 0, 0.10898952318288e4),
    Term::new(0, 1, 0.84951654495535e3),
    Term::new(0, 2, -0.10781748091826e3),
    Term::new(0, 3, 0.33153654801263e2),
    Term::new(0, 7, -0.74232016790248e1),
    Term::new(0, 20, 0.11765048724356e2),
    Term::new(1, 0, 0.18445749355790e1),
    Term::new(1, 1, -0.41792700549624e1),
    Term::new(1, 2, 0.62478196935812e1),
    Term::new(1, 3, -0.17344563108114e2),
    Term::new(1, 7, -0.20058176862096e3),
    Term::new(1, 9, 0.27196065473796e3),
    Term::new(1, 11, -0.45511318285818e3),
    Term::new(1, 18, 0.30919688604755e4),
    Term::new(1, 44, 0.25226640357872e6),
    Term::new(2, 0, -0.61707422868339e-2),
    Term::new(2, 2, -0.31078046629583),
    Term::new(2, 7, 0.11670873077107e2),
    Term::new(2, 36, 0.12812798404046e9),
    Term::new(2, 38, -0.98554909623276e9),
    Term::new(2, 40, 0.28224546973002e10),
    Term::new(2, 42, -0.35948971410703e10),
    Term::new(2, 44, 0.17227349913197e10),
    Term::new(3, 24, -0.13551334240775e5),
    Term::new(3, 44, 0.12848734664650e8),
    Term::new(4, 12, 0.13865724283226e1),
    Term::new(4, 32, 0.23598832556514e6),
    Term::new(4, 44, -0.13105236545054e8),
    Term::new(5, 32, 0.73999835474766e4),
    Term::new(5, 36, -0.55196697030060e6),
    Term::new(5, 42, 0.37154085996233e7),
    Term::new(6, 34, 0.19127729239660e5),
    Term::new(6, 44, -0.41535164835634e6),
    Term::new(7, 28, -0.62459855192507e2),
];

/// Backward `T(p, h)` for subregion 2b, IF97 eq. 23, Table 21.
pub(crate) const T_PH_B: [Term; 38] = [
    Term::new(0, 0, 0.14895041079516e4),
    Term::new(0, 1, 0.74307798314034e3),
    Term::new(0, 2, -0.97708318797837e2),
    Term::new(0, 12, 0.24742464705674e1),
    Term::new(0, 18, -0.63281320016026),
    Term::new(0, 24, 0.11385952129658e1),
    Term::new(0, 28, -0.47811863648625),
    Term::new(0, 40, 0.85208123431544e-2),
    Term::new(1, 0, 0.93747147377932),
    Term::new(1, 2, 0.33593118604916e1),
    Term::new(1, 6, 0.33809355601454e1),
    Term::new(1, 12, 0.16844539671904),
    Term::new(1, 18, 0.73875745236695),
    Term::new(1, 24, -0.47128737436186),
    Term::new(1, 28, 0.15020273139707),
    Term::new(1, 40, -0.21764114219750e-2),
    Term::new(2, 2, -0.21810755324761e-1),
    Term::new(2, 8, -0.10829784403677),
    Term::new(2, 18, -0.46333324635812e-1),
    Term::new(2, 40, 0.71280351959551e-4),
    Term::new(3, 1, 0.11032831789999e-3),
    Term::new(3, 2, 0.18955248387902e-3),
    Term::new(3, 12, 0.30891541160537e-2),
    Term::new(3, 24, 0.13555504554949e-2),
    Term::new(4, 2, 0.28640237477456e-6),
    Term::new(4, 12, -0.10779857357512e-4),
    Term::new(4, 18, -0.76462712454814e-4),
    Term::new(4, 24, 0.14052392818316e-4),
    Term::new(4, 28, -0.31083814331434e-4),
    Term::new(4, 40, -0.10302738212103e-5),
    Term::new(5, 18, 0.28217281635040e-6),
    Term::new(5, 24, 0.12704902271945e-5),
    Term::new(5, 40, 0.73803353468292e-7),
    Term::new(6, 28, -0.11030139238909e-7),
    Term::new(7, 2, -0.81456365207833e-13),
    Term::new(7, 28, -0.25180545682962e-10),
    Term::new(9, 1, -0.17565233969407e-17),
    Term::new(9, 40, 0.86934156344163e-14),
];

/// Backward `T(p, h)` for subregion 2c, IF97 eq. 24, Table 22.
pub(crate) const T_PH_C: [Term; 23] = [
    Term::new(-7, 0, -0.32368398555242e13),
    Term::new(-7, 4, 0.73263350902181e13),
    Term::new(-6, 0, 0.35825089945447e12),
    Term::new(-6, 2, -0.58340131851590e12),
    Term::new(-5, 0, -0.10783068217470e11),
    Term::new(-5, 2, 0.20825544563171e11),
    Term::new(-2, 0, 0.61074783564516e6),
    Term::new(-2, 1, 0.85977722535580e6),
    Term::new(-1, 0, -0.25745723604170e5),
    Term::new(-1, 2, 0.31081088422714e5),
    Term::new(0, 0, 0.12082315865936e4),
    Term::new(0, 1, 0.48219755109255e3),
    Term::new(1, 4, 0.37966001272486e1),
    Term::new(1, 8, -0.10842984880077e2),
    Term::new(2, 4, -0.45364172676660e-1),
    Term::new(6, 0, 0.14559115658698e-12),
    Term::new(6, 1, 0.11261597407230e-11),
    Term::new(6, 4, -0.17804982240686e-10),
    Term::new(6, 10, 0.12324579690832e-6),
    Term::new(6, 12, -0.11606921130984e-5),
    Term::new(6, 16, 0.27846367088554e-4),
    Term::new(6, 20, -0.59270038474176e-3),
    Term::new(6, 22, 0.12918582991878e-2),
];

/// Backward `T(p, s)` for subregion 2a, IF97 eq. 25, Table 25.
pub(crate) const T_PS_A: [RationalTerm; 46] = [
    RationalTerm::new(-1.5, -24, -0.39235983861984e6),
    RationalTerm::new(-1.5, -23, 0.51526573827270e6),
    RationalTerm::new(-1.5, -19, 0.40482443161048e5),
    RationalTerm::new(-1.5, -13, -0.32193790923902e3),
    RationalTerm::new(-1.5, -11, 0.96961424218694e2),
    RationalTerm::new(-1.5, -10, -0.22867846371773e2),
    RationalTerm::new(-1.25, -19, -0.44942914124357e6),
    RationalTerm::new(-1.25, -15, -0.50118336020166e4),
    RationalTerm::new(-1.25, -6, 0.35684463560015),
    RationalTerm::new(-1.0, -26, 0.44235335848190e5),
    RationalTerm::new(-1.0, -21, -0.13673388811708e5),
    RationalTerm::new(-1.0, -17, 0.42163260207864e6),
    RationalTerm::new(-1.0, -16, 0.22516925837475e5),
    RationalTerm::new(-1.0, -9, 0.47442144865646e3),
    RationalTerm::new(-1.0, -8, -0.14931130797647e3),
    RationalTerm::new(-0.75, -15, -0.19781126320452e6),
    RationalTerm::new(-0.75, -14, -0.23554399470760e5),
    RationalTerm::new(-0.5, -26, -0.19070616302076e5),
    RationalTerm::new(-0.5, -13, 0.55375669883164e5),
    RationalTerm::new(-0.5, -9, 0.38293691437363e4),
    RationalTerm::new(-0.5, -7, -0.60391860580567e3),
    RationalTerm::new(-0.25, -27, 0.19363102620331e4),
    RationalTerm::new(-0.25, -25, 0.42660643698610e4),
    RationalTerm::new(-0.25, -11, -0.59780638872718e4),
    RationalTerm::new(-0.25, -6, -0.70401463926862e3),
    RationalTerm::new(0.25, 1, 0.33836784107553e3),
    RationalTerm::new(0.25, 4, 0.20862786635187e2),
    RationalTerm::new(0.25, 8, 0.33834172656196e-1),
    RationalTerm::new(0.25, 11, -0.43124428414893e-4),
    RationalTerm::new(0.5, 0, 0.16653791356412e3),
    RationalTerm::new(0.5, 1, -0.13986292055898e3),
    RationalTerm::new(0.5, 5, -0.78849547999872),
    RationalTerm::new(0.5, 6, 0.72132411753872e-1),
    RationalTerm::new(0.5, 10, -0.59754839398283e-2),
    RationalTerm::new(0.5, 14, -0.12141358953904e-4),
    RationalTerm::new(0.5, 16, 0.23227096733871e-6),
    RationalTerm::new(0.75, 0, -0.10538463566194e2),
    RationalTerm::new(0.75, 4, 0.20718925496502e1),
    RationalTerm::new(0.75, 9, -0.72193155260427e-1),
    RationalTerm::new(0.75, 17, 0.20749887081120e-6),
    RationalTerm::new(1.0, 7, -0.18340657911379e-1),
    RationalTerm::new(1.0, 18, 0.29036272348696e-6),
    RationalTerm::new(1.25, 3, 0.21037527893619),
    RationalTerm::new(1.25, 15, 0.25681239729999e-3),
    RationalTerm::new(1.5, 5, -0.12799002933781e-1),
    RationalTerm::new(1.5, 18, -0.82198102652018e-5),
];

/// Backward `T(p, s)` for subregion 2b, IF97 eq. 26, Table 26.
pub(crate) const T_PS_B: [Term; 44] = [
    Term::new(-6, 0, 0.31687665083497e6),
    Term::new(-6, 11, 0.20864175881858e2),
    Term::new(-5, 0, -0.39859399803599e6),
    Term::new(-5, 11, -0.21816058518877e2),
    Term::new(-4, 0, 0.22369785194242e6),
    Term::new(-4, 1, -0.27841703445817e4),
    Term::new(-4, 11, 0.99207436071480e1),
    Term::new(-3, 0, -0.75197512299157e5),
    Term::new(-3, 1, 0.29708605951158e4),
    Term::new(-3, 11, -0.34406878548526e1),
    Term::new(-3, 12, 0.38815564249115),
    Term::new(-2, 0, 0.17511295085750e5),
    Term::new(-2, 1, -0.14237112854449e4),
    Term::new(-2, 6, 0.10943803364167e1),
    Term::new(-2, 10, 0.89971619308495),
    Term::new(-1, 0, -0.33759740098958e4),
    Term::new(-1, 1, 0.47162885818355e3),
    Term::new(-1, 5, -0.19188241993679e1),
    Term::new(-1, 8, 0.41078580492196),
    Term::new(-1, 9, -0.33465378172097),
    Term::new(0, 0, 0.13870034777505e4),
    Term::new(0, 1, -0.40663326195838e3),
    Term::new(0, 2, 0.41727347159610e2),
    Term::new(0, 4, 0.21932549434532e1),
    Term::new(0, 5, -0.10320050009077e1),
    Term::new(0, 6, 0.35882943516703),
    Term::new(0, 9, 0.52511453726066e-2),
    Term::new(1, 0, 0.12838916450705e2),
    Term::new(1, 1, -0.28642437219381e1),
    Term::new(1, 2, 0.56912683664855),
    Term::new(1, 3, -0.99962954584931e-1),
    Term::new(1, 7, -0.32632037778459e-2),
    Term::new(1, 8, 0.23320922576723e-3),
    Term::new(2, 0, -0.15334809857450),
    Term::new(2, 1, 0.29072288239902e-1),
    Term::new(2, 5, 0.37534702741167e-3),
    Term::new(3, 0, 0.17296691702411e-2),
    Term::new(3, 1, -0.38556050844504e-3),
    Term::new(3, 3, -0.35017712292608e-4),
    Term::new(4, 0, -0.14566393631492e-4),
    Term::new(4, 1, 0.56420857267269e-5),
    Term::new(5, 0, 0.41286150074605e-7),
    Term::new(5, 1, -0.20684671118824e-7),
    Term::new(5, 2, 0.16409393674725e-8),
];

/// Backward `T(p, s)` for subregion 2c, IF97 eq. 27, Table 27.
pub(crate) const T_PS_C: [Term; 30] = [
    Term::new(-2, 0, 0.90968501005365e3),
    Term::new(-2, 1, 0.24045667088420e4),
    Term::new(-1, 0, -0.59162326387130e3),
    Term::new(0, 0, 0.54145404128074e3),
    Term::new(0, 1, -0.27098308411192e3),
    Term::new(0, 2, 0.97976525097926e3),
    Term::new(0, 3, -0.46966772959435e3),
    Term::new(1, 0, 0.14399274604723e2),
    Term::new(1, 1, -0.19104204230429e2),
    Term::new(1, 3, 0.53299167111971e1),
    Term::new(1, 4, -0.21252975375934e2),
    Term::new(2, 0, -0.31147334413760),
    Term::new(2, 1, 0.60334840894623),
    Term::new(2, 2, -0.42764839702509e-1),
    Term::new(3, 0, 0.58185597255259e-2),
    Term::new(3, 1, -0.14597008284753e-1),
    Term::new(3, 5, 0.56631175631027e-2),
    Term::new(4, 0, -0.76155864584577e-4),
    Term::new(4, 1, 0.22440342919332e-3),
    Term::new(4, 4, -0.12561095013413e-4),
    Term::new(5, 0, 0.63323132660934e-6),
    Term::new(5, 1, -0.20541989675375e-5),
    Term::new(5, 2, 0.36405370390082e-7),
    Term::new(6, 0, -0.29759897789215e-8),
    Term::new(6, 1, 0.10136618529763e-7),
    Term::new(7, 0, 0.59925719692351e-11),
    Term::new(7, 1, -0.20677870105164e-10),
    Term::new(7, 3, -0.20874278181886e-10),
    Term::new(7, 4, 0.10162166825089e-9),
    Term::new(7, 5, -0.16429828281347e-9),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_table() {
        assert_eq!(IDEAL.len(), 9);
        assert_eq!(IDEAL[0], IdealTerm::new(0, -0.96927686500217e1));
        assert_eq!(IDEAL[2], IdealTerm::new(-5, -0.56087911283020e-2));
        assert_eq!(IDEAL[8], IdealTerm::new(3, 0.21268463753307e-1));
    }

    #[test]
    fn residual_table() {
        assert_eq!(RESIDUAL.len(), 43);
        assert_eq!(RESIDUAL[0], Term::new(1, 0, -0.17731742473213e-2));
        assert_eq!(RESIDUAL[21], Term::new(6, 35, -0.23895741934104e2));
        assert_eq!(RESIDUAL[33], Term::new(18, 57, -0.33662250574171));
        assert_eq!(RESIDUAL[42], Term::new(24, 58, -0.94369707241210e-6));
    }

    #[test]
    fn backward_ph_tables() {
        assert_eq!(T_PH_A.len(), 34);
        assert_eq!(T_PH_A[0], Term::new(0, 0, 0.10898952318288e4));
        assert_eq!(T_PH_A[33], Term::new(7, 28, -0.62459855192507e2));

        assert_eq!(T_PH_B.len(), 38);
        assert_eq!(T_PH_B[0], Term::new(0, 0, 0.14895041079516e4));
        assert_eq!(T_PH_B[37], Term::new(9, 40, 0.86934156344163e-14));

        assert_eq!(T_PH_C.len(), 23);
        assert_eq!(T_PH_C[0], Term::new(-7, 0, -0.32368398555242e13));
        assert_eq!(T_PH_C[22], Term::new(6, 22, 0.12918582991878e-2));
    }

    #[test]
    fn backward_ps_tables() {
        assert_eq!(T_PS_A.len(), 46);
        assert_eq!(T_PS_A[0], RationalTerm::new(-1.5, -24, -0.39235983861984e6));
        assert_eq!(T_PS_A[25], RationalTerm::new(0.25, 1, 0.33836784107553e3));
        assert_eq!(T_PS_A[45], RationalTerm::new(1.5, 18, -0.82198102652018e-5));

        assert_eq!(T_PS_B.len(), 44);
        assert_eq!(T_PS_B[0], Term::new(-6, 0, 0.31687665083497e6));
        assert_eq!(T_PS_B[43], Term::new(5, 2, 0.16409393674725e-8));

        assert_eq!(T_PS_C.len(), 30);
        assert_eq!(T_PS_C[0], Term::new(-2, 0, 0.90968501005365e3));
        assert_eq!(T_PS_C[29], Term::new(7, 5, -0.16429828281347e-9));
    }
}
