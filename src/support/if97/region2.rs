//! Region 2: superheated steam and the metastable-vapour extension.
//!
//! The Gibbs free energy is split into an ideal-gas part (IF97 eq. 16) and a
//! residual part (IF97 eq. 17). The forward equations do not subdivide the
//! region; the backward equations in [`backward`] use subregions 2a, 2b and 2c.
//!
//! All functions here work in IF97 units: `p` in MPa, `T` in K, `h` in kJ/kg,
//! `s` in kJ/(kg·K).

pub(crate) mod coefficients;

mod backward;

pub use backward::{
    Subregion, b2bc_enthalpy, b2bc_pressure, temperature_ph, temperature_ps,
};

use super::{
    gibbs::{FreeEnergy, Gibbs, Surface},
    term::{ideal_sums, power_sums},
};

/// Reducing pressure, MPa.
const P_STAR: f64 = 1.0;

/// Reducing temperature, K.
const T_STAR: f64 = 540.0;

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
    let sums = power_sums(&coefficients::RESIDUAL, pi, tau - 0.5);

    Gibbs {
        gamma: sums.value,
        pi: sums.dx,
        pi_pi: sums.dxx,
        tau: sums.dy,
        tau_tau: sums.dyy,
        pi_tau: sums.dxy,
    }
}

/// Evaluates both parts of the region 2 free energy.
#[must_use]
pub fn free_energy(pi: f64, tau: f64) -> FreeEnergy {
    FreeEnergy::Split {
        ideal: ideal(pi, tau),
        residual: residual(pi, tau),
    }
}

pub(crate) fn surface(pressure: f64, temperature: f64) -> Surface {
    let (pi, tau) = reduce(pressure, temperature);

    Surface {
        pressure,
        temperature,
        pi,
        tau,
        energy: free_energy(pi, tau),
    }
}
