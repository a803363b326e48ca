//! Region 1: compressed liquid water.
//!
//! Valid for `273.16 K ≤ T ≤ 623.15 K` at pressures from saturation up to
//! 100 MPa. The region is described by one fitted Gibbs free energy surface
//! (IF97 eq. 7) in the shifted variables `(7.1 − π)` and `(τ − 1.222)`.
//!
//! All functions here work in IF97 units: `p` in MPa, `T` in K, `h` in kJ/kg,
//! `s` in kJ/(kg·K).

pub(crate) mod coefficients;

use super::{
    gibbs::{FreeEnergy, Gibbs, Surface},
    term::{power_sum, power_sums},
};

/// Reducing pressure, MPa.
const P_STAR: f64 = 16.53;

/// Reducing temperature, K.
const T_STAR: f64 = 1386.0;

/// Reducing enthalpy for `T(p, h)`, kJ/kg.
const H_STAR: f64 = 2500.0;

/// Returns the reduced state `(π, τ)` for pressure in MPa and temperature in K.
#[must_use]
pub fn reduce(pressure: f64, temperature: f64) -> (f64, f64) {
    (pressure / P_STAR, T_STAR / temperature)
}

/// Evaluates the region 1 Gibbs free energy and its derivatives.
#[must_use]
pub fn gibbs(pi: f64, tau: f64) -> Gibbs {
    // d(7.1 − π)/dπ = −1 flips the sign of odd π-derivatives.
    let sums = power_sums(&coefficients::GIBBS, 7.1 - pi, tau - 1.222);

    Gibbs {
        gamma: sums.value,
        pi: -sums.dx,
        pi_pi: sums.dxx,
        tau: sums.dy,
        tau_tau: sums.dyy,
        pi_tau: -sums.dxy,
    }
}

pub(crate) fn surface(pressure: f64, temperature: f64) -> Surface {
    let (pi, tau) = reduce(pressure, temperature);

    Surface {
        pressure,
        temperature,
        pi,
        tau,
        energy: FreeEnergy::Single(gibbs(pi, tau)),
    }
}

/// Backward equation for temperature from pressure and enthalpy (IF97 eq. 11).
#[must_use]
pub fn temperature_ph(pressure: f64, enthalpy: f64) -> f64 {
    let eta = enthalpy / H_STAR;
    power_sum(&coefficients::T_PH, pressure, eta + 1.0)
}

/// Backward equation for temperature from pressure and entropy (IF97 eq. 13).
#[must_use]
pub fn temperature_ps(pressure: f64, entropy: f64) -> f64 {
    let sigma = entropy;
    power_sum(&coefficients::T_PS, pressure, sigma + 2.0)
}
