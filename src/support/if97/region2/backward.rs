use std::fmt;

use crate::support::if97::{
    constants::P_MAX,
    term::{power_sum, rational_power_sum},
};

use super::coefficients;

/// Lower pressure bound of subregions 2b and 2c, MPa.
const P_2A_MAX: f64 = 4.0;

/// Entropy separating subregion 2b from 2c, kJ/(kg·K).
const S_2BC: f64 = 5.85;

/// Coefficients of the 2b/2c boundary, IF97 eq. 20 and 21.
const N_2BC: [f64; 5] = [
    0.905_842_785_147_23e3,
    -0.679_557_863_992_41,
    0.128_090_027_301_36e-3,
    0.265_265_719_084_28e4,
    0.452_575_789_059_48e1,
];

/// One of the three subregions used by the region 2 backward equations.
///
/// The forward equations cover region 2 with one surface; only the backward
/// equations `T(p, h)` and `T(p, s)` need this split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subregion {
    /// Low pressure, `p ≤ 4 MPa`.
    A,
    /// High pressure, well superheated.
    B,
    /// High pressure, close to saturation or region 3.
    C,
}

impl Subregion {
    /// Selects the subregion for `T(p, h)`, with `p` in MPa and `h` in kJ/kg.
    ///
    /// Pressures above 100 MPa fall to subregion 2c.
    #[must_use]
    pub fn from_ph(pressure: f64, enthalpy: f64) -> Self {
        if pressure <= P_2A_MAX {
            Self::A
        } else if pressure <= P_MAX && pressure < b2bc_pressure(enthalpy) {
            Self::B
        } else {
            Self::C
        }
    }

    /// Selects the subregion for `T(p, s)`, with `p` in MPa and `s` in kJ/(kg·K).
    ///
    /// Pressures above 100 MPa fall to subregion 2c.
    #[must_use]
    pub fn from_ps(pressure: f64, entropy: f64) -> Self {
        if pressure <= P_2A_MAX {
            Self::A
        } else if pressure <= P_MAX && entropy >= S_2BC {
            Self::B
        } else {
            Self::C
        }
    }
}

impl fmt::Display for Subregion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "2a",
            Self::B => "2b",
            Self::C => "2c",
        };
        write!(f, "subregion {name}")
    }
}

/// Pressure on the 2b/2c boundary for a given enthalpy, MPa (IF97 eq. 20).
///
/// Valid from the saturation line at 554.485 K up to 100 MPa.
#[must_use]
pub fn b2bc_pressure(enthalpy: f64) -> f64 {
    let [n1, n2, n3, ..] = N_2BC;
    n1 + n2 * enthalpy + n3 * enthalpy * enthalpy
}

/// Enthalpy on the 2b/2c boundary for a given pressure, kJ/kg (IF97 eq. 21).
#[must_use]
pub fn b2bc_enthalpy(pressure: f64) -> f64 {
    let [_, _, n3, n4, n5] = N_2BC;
    n4 + ((pressure - n5) / n3).sqrt()
}

/// Backward equation for temperature from pressure and enthalpy, K.
///
/// Dispatches to IF97 eq. 22, 23 or 24 by [`Subregion::from_ph`].
#[must_use]
pub fn temperature_ph(pressure: f64, enthalpy: f64) -> f64 {
    let eta = enthalpy / 2000.0;

    match Subregion::from_ph(pressure, enthalpy) {
        Subregion::A => power_sum(&coefficients::T_PH_A, pressure, eta - 2.1),
        Subregion::B => power_sum(&coefficients::T_PH_B, pressure - 2.0, eta - 2.6),
        Subregion::C => power_sum(&coefficients::T_PH_C, pressure + 25.0, eta - 1.8),
    }
}

/// Backward equation for temperature from pressure and entropy, K.
///
/// Dispatches to IF97 eq. 25, 26 or 27 by [`Subregion::from_ps`].
#[must_use]
pub fn temperature_ps(pressure: f64, entropy: f64) -> f64 {
    match Subregion::from_ps(pressure, entropy) {
        Subregion::A => {
            let sigma = entropy / 2.0;
            rational_power_sum(&coefficients::T_PS_A, pressure, sigma - 2.0)
        }
        Subregion::B => {
            let sigma = entropy / 0.7853;
            power_sum(&coefficients::T_PS_B, pressure, 10.0 - sigma)
        }
        Subregion::C => {
            let sigma = entropy / 2.9251;
            power_sum(&coefficients::T_PS_C, pressure, 2.0 - sigma)
        }
    }
}
