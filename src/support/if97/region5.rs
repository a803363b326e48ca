//! Region 5: high-temperature steam.
//!
//! Covers `1073.15 K < T ≤ 2273.15 K` up to 50 MPa. Like region 2 the Gibbs
//! free energy is split into ideal-gas and residual parts, but neither
//! reduced variable is shifted.

pub(crate) mod coefficients;

use super::{
    gibbs::{FreeEnergy, Gibbs, Surface},
    term::{ideal_sums, power_sums},
};

/// Reducing pressure, MPa.
const P_STAR: f64 = 1.0;

/// Reducing temperature, K.
const T_STAR: f64 = 1000.0;

/// Returns the reduced state `(π, τ)` for pressure in MPa and temperature in K.
#[must_use]
pub fn reduce(pressure: f64, temperature: f64) -> (f64, f64) {
    (pressure / P_STAR, T_STAR / temperature)
}

/// Evaluates the ideal-gas part `γ°` and its derivatives.
#[must_use]
pub fn ideal(pi: f64, tau: f64) -> Gibbs {
    let (value, d_tau, d_tau_tau) = ideal_sums(&coefficients::IDEAL, tau);

    Gibbs {
        gamma: pi.ln() + value,
        pi: 1.0 / pi,
        pi_pi: -1.0 / (pi * pi),
        tau: d_tau,
        tau_tau: d_tau_tau,
        pi_tau: 0.0,
    }
}

/// Evaluates the residual part `γʳ` and its derivatives.
#[must_use]
pub fn residual(pi: f64, tau: f64) -> Gibbs {
    let sums = power_sums(&coefficients::RESIDUAL, pi, tau);

    Gibbs {
        gamma: sums.value,
        pi: sums.dx,
        pi_pi: sums.dxx,
        tau: sums.dy,
        tau_tau: sums.dyy,
        pi_tau: sums.dxy,
    }
}

pub(crate) fn surface(pressure: f64, temperature: f64) -> Surface {
    let (pi, tau) = reduce(pressure, temperature);

    Surface {
        pressure,
        temperature,
        pi,
        tau,
        energy: FreeEnergy::Split {
            ideal: ideal(pi, tau),
            residual: residual(pi, tau),
        },
    }
}
