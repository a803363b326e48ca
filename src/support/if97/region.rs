use std::fmt;

use super::constants::{
    P_B23_MIN, P_MAX, P_MAX_REGION5, P_TRIPLE, T_13, T_25, T_CRITICAL, T_MAX_REGION5, T_TRIPLE,
};

/// Coefficients of the region 2/3 boundary, IF97 eq. 5 and 6.
const N_B23: [f64; 5] = [
    0.348_051_856_289_69e3,
    -0.116_718_598_799_75e1,
    0.101_929_700_393_26e-2,
    0.572_544_598_627_46e3,
    0.139_188_397_788_70e2,
];

/// An IF97 region handled by the classifier.
///
/// Region 4 (the saturation line) is a curve, not an area of the `(p, T)`
/// plane, so it never results from classifying a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Compressed liquid.
    One,
    /// Superheated and metastable vapour.
    Two,
    /// Near-critical states bounded by the B23 curve.
    Three,
    /// High-temperature steam.
    Five,
}

impl Region {
    /// Classifies a state with pressure in MPa and temperature in K.
    ///
    /// Regions are tested in the order 1, 2, 3, 5 and the first match wins,
    /// so states on a shared boundary belong to the lower-numbered region.
    /// Returns `None` for states outside every region, including `NaN` inputs.
    #[must_use]
    pub fn classify(pressure: f64, temperature: f64) -> Option<Self> {
        let (p, t) = (pressure, temperature);

        if in_region1(p, t) {
            Some(Self::One)
        } else if in_region2(p, t) {
            Some(Self::Two)
        } else if in_region3(p, t) {
            Some(Self::Three)
        } else if in_region5(p, t) {
            Some(Self::Five)
        } else {
            None
        }
    }

    /// Returns the IF97 region number.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Five => 5,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region {}", self.number())
    }
}

/// Pressure on the region 2/3 boundary, MPa (IF97 eq. 5).
#[must_use]
pub fn b23_pressure(temperature: f64) -> f64 {
    let [n1, n2, n3, ..] = N_B23;
    n1 + n2 * temperature + n3 * temperature * temperature
}

/// Temperature on the region 2/3 boundary, K (IF97 eq. 6).
///
/// Defined for pressures from 16.5292 MPa upward; the result is `NaN` below
/// about 13.9 MPa.
#[must_use]
pub fn b23_temperature(pressure: f64) -> f64 {
    let [_, _, n3, n4, n5] = N_B23;
    n4 + ((pressure - n5) / n3).sqrt()
}

fn in_pressure_range(p: f64, max: f64) -> bool {
    (P_TRIPLE..=max).contains(&p)
}

fn in_region1(p: f64, t: f64) -> bool {
    (T_TRIPLE..=T_13).contains(&t) && in_pressure_range(p, P_MAX)
}

fn in_region2(p: f64, t: f64) -> bool {
    let above_b23 = p < P_B23_MIN || t >= b23_temperature(p);

    t > T_13 && t <= T_25 && in_pressure_range(p, P_MAX) && above_b23
}

fn in_region3(p: f64, t: f64) -> bool {
    (T_13..=T_CRITICAL).contains(&t)
        && (P_B23_MIN..=P_MAX).contains(&p)
        && t <= b23_temperature(p)
}

fn in_region5(p: f64, t: f64) -> bool {
    t > T_25 && t <= T_MAX_REGION5 && in_pressure_range(p, P_MAX_REGION5)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn b23_reference_point() {
        // IF97 quotes the boundary pressure to nine digits.
        assert_relative_eq!(b23_pressure(623.15), 0.165_291_643e2, max_relative = 1e-8);
        assert_relative_eq!(b23_temperature(0.165_291_643e2), 623.15, max_relative = 1e-8);
        assert_relative_eq!(
            b23_temperature(b23_pressure(623.15)),
            623.15,
            max_relative = 1e-12
        );
    }

    #[test]
    fn b23_is_undefined_at_low_pressure() {
        assert!(b23_temperature(10.0).is_nan());
    }

    #[test]
    fn interior_states() {
        assert_eq!(Region::classify(3.0, 300.0), Some(Region::One));
        assert_eq!(Region::classify(80.0, 500.0), Some(Region::One));
        assert_eq!(Region::classify(0.0035, 700.0), Some(Region::Two));
        assert_eq!(Region::classify(30.0, 700.0), Some(Region::Two));
        assert_eq!(Region::classify(0.5, 1500.0), Some(Region::Five));
        assert_eq!(Region::classify(30.0, 2000.0), Some(Region::Five));
    }

    #[test]
    fn region3_is_recognized() {
        assert_eq!(Region::classify(25.0, 640.0), Some(Region::Three));
        assert_eq!(Region::classify(100.0, 647.0), Some(Region::Three));
    }

    #[test]
    fn b23_separates_regions_2_and_3() {
        let p = 18.0;
        let t = b23_temperature(p);
        assert!(t > T_13 && t < T_CRITICAL);

        assert_eq!(Region::classify(p, t + 0.01), Some(Region::Two));
        assert_eq!(Region::classify(p, t - 0.01), Some(Region::Three));
    }

    #[test]
    fn boundaries_go_to_the_first_matching_region() {
        assert_eq!(Region::classify(20.0, T_13), Some(Region::One));
        assert_eq!(Region::classify(1.0, T_13), Some(Region::One));
        assert_eq!(Region::classify(1.0, 623.16), Some(Region::Two));
        assert_eq!(Region::classify(30.0, T_25), Some(Region::Two));
        assert_eq!(Region::classify(30.0, 1073.16), Some(Region::Five));
        assert_eq!(Region::classify(P_TRIPLE, T_TRIPLE), Some(Region::One));
        assert_eq!(Region::classify(50.0, T_MAX_REGION5), Some(Region::Five));
    }

    #[test]
    fn states_outside_every_region() {
        assert_eq!(Region::classify(-1.0, 300.0), None);
        assert_eq!(Region::classify(1.0, 250.0), None);
        assert_eq!(Region::classify(101.0, 300.0), None);
        assert_eq!(Region::classify(60.0, 1500.0), None);
        assert_eq!(Region::classify(1.0, 2300.0), None);
        assert_eq!(Region::classify(1e-4, 500.0), None);
        assert_eq!(Region::classify(f64::NAN, 300.0), None);
        assert_eq!(Region::classify(1.0, f64::NAN), None);
    }

    #[test]
    fn display_names_the_region_number() {
        assert_eq!(Region::Five.to_string(), "region 5");
        assert_eq!(Region::Three.number(), 3);
    }
}
