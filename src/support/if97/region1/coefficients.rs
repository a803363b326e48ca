//! Region 1 coefficient tables.

use crate::support::if97::term::Term;

/// Dimensionless Gibbs free energy, IF97 eq. 7, Table 2.
pub(crate) const GIBBS: [Term; 34] = [
    Term::new(0, -2, 0.146_329_712_131_67),
    Term::new(0, -1, -0.845_481_871_691_14),
    Term::new(0, 0, -0.375_636_036_720_40e1),
    Term::new(0, 1, 0.338_551_691_683_85e1),
    Term::new(0, 2, -0.957_919_633_878_72),
    Term::new(0, 3, 0.157_720_385_132_28),
    Term::new(0, 4, -0.166_164_171_995_01e-1),
    Term::new(0, 5, 0.812_146_299_835_68e-3),
    Term::new(1, -9, 0.283_190_801_238_04e-3),
    Term::new(1, -7, -0.607_063_015_658_74e-3),
    Term::new(1, -1, -0.189_900_682_184_19e-1),
    Term::new(1, 0, -0.325_297_487_705_05e-1),
    Term::new(1, 1, -0.218_417_171_754_14e-1),
    Term::new(1, 3, -0.528_383_579_699_30e-4),
    Term::new(2, -3, -0.471_843_210_732_67e-3),
    Term::new(2, 0, -0.300_017_807_930_26e-3),
    Term::new(2, 1, 0.476_613_939_069_87e-4),
    Term::new(2, 3, -0.441_418_453_308_46e-5),
    Term::new(2, 17, -0.726_949_962_975_94e-15),
    Term::new(3, -4, -0.316_796_448_450_54e-4),
    Term::new(3, 0, -0.282_707_979_853_12e-5),
    Term::new(3, 6, -0.852_051_281_201_03e-9),
    Term::new(4, -5, -0.224_252_819_080_00e-5),
    Term::new(4, -2, -0.651_712_228_956_01e-6),
    Term::new(4, 10, -0.143_417_299_379_24e-12),
    Term::new(5, -8, -0.405_169_968_601_17e-6),
    Term::new(8, -11, -0.127_343_017_416_41e-8),
    Term::new(8, -6, -0.174_248_712_306_34e-9),
    Term::new(21, -29, -0.687_621_312_955_31e-18),
    Term::new(23, -31, 0.144_783_078_285_21e-19),
    Term::new(29, -38, 0.263_357_816_627_95e-22),
    Term::new(30, -39, -0.119_476_226_400_71e-22),
    Term::new(31, -40, 0.182_280_945_814_04e-23),
    Term::new(32, -41, -0.935_370_872_924_58e-25),
];

/// Backward equation `T(p, h)`, IF97 eq. 11, Table 6.
pub(crate) const T_PH: [Term; 20] = [
    Term::new(0, 0, -0.238_724_899_245_21e3),
    Term::new(0, 1, 0.404_211_886_379_45e3),
    Term::new(0, 2, 0.113_497_468_817_18e3),
    Term::new(0, 6, -0.584_576_160_480_39e1),
    Term::new(0, 22, -0.152_854_824_131_40e-3),
    Term::new(0, 32, -0.108_667_076_953_77e-5),
    Term::new(1, 0, -0.133_917_448_726_02e2),
    Term::new(1, 1, 0.432_110_391_835_59e2),
    Term::new(1, 2, -0.540_100_671_705_06e2),
    Term::new(1, 3, 0.305_358_922_039_16e2),
    Term::new(1, 4, -0.659_647_494_236_38e1),
    Term::new(1, 10, 0.939_654_008_783_63e-2),
    Term::new(1, 32, 0.115_736_475_053_40e-6),
    Term::new(2, 10, -0.258_586_412_820_73e-4),
    Term::new(2, 32, -0.406_443_630_847_99e-8),
    Term::new(3, 10, 0.664_561_861_916_35e-7),
    Term::new(3, 32, 0.806_707_341_030_27e-10),
    Term::new(4, 32, -0.934_777_712_139_47e-12),
    Term::new(5, 32, 0.582_654_420_206_01e-14),
    Term::new(6, 32, -0.150_201_859_535_03e-16),
];

/// Backward equation `T(p, s)`, IF97 eq. 13, Table 8.
pub(crate) const T_PS: [Term; 20] = [
    Term::new(0, 0, 0.174_782_680_583_07e3),
    Term::new(0, 1, 0.348_069_308_928_73e2),
    Term::new(0, 2, 0.652_925_849_784_55e1),
    Term::new(0, 3, 0.330_399_817_754_89),
    Term::new(0, 11, -0.192_813_829_231_96e-6),
    Term::new(0, 31, -0.249_091_972_445_73e-22),
    Term::new(1, 0, -0.261_076_364_893_32),
    Term::new(1, 1, 0.225_929_659_815_86),
    Term::new(1, 2, -0.642_564_633_952_26e-1),
    Term::new(1, 3, 0.788_762_892_705_26e-2),
    Term::new(1, 12, 0.356_721_106_073_66e-9),
    Term::new(1, 31, 0.173_324_969_948_95e-23),
    Term::new(2, 0, 0.566_089_006_548_37e-3),
    Term::new(2, 1, -0.326_354_831_397_17e-3),
    Term::new(2, 2, 0.447_782_866_906_32e-4),
    Term::new(2, 9, -0.513_221_569_085_07e-9),
    Term::new(2, 31, -0.425_226_570_422_07e-25),
    Term::new(3, 10, 0.264_004_413_606_89e-12),
    Term::new(3, 32, 0.781_246_004_597_23e-28),
    Term::new(4, 32, -0.307_321_999_036_68e-30),
];
