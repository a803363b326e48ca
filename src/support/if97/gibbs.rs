//! Dimensionless Gibbs free energy and the properties derived from it.
//!
//! Regions 1, 2 and 5 are each defined by a single free-energy surface
//! `γ(π, τ) = g / (R·T)`. Every property is a closed-form combination of `γ`
//! and its first and second partial derivatives, so a [`Surface`] evaluates
//! the derivatives once and derives any property on demand.

use std::ops::Add;

use super::constants::{R, R_SI};

/// Dimensionless Gibbs free energy `γ` and its partial derivatives at one `(π, τ)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gibbs {
    /// `γ`
    pub gamma: f64,
    /// `∂γ/∂π`
    pub pi: f64,
    /// `∂²γ/∂π²`
    pub pi_pi: f64,
    /// `∂γ/∂τ`
    pub tau: f64,
    /// `∂²γ/∂τ²`
    pub tau_tau: f64,
    /// `∂²γ/∂π∂τ`
    pub pi_tau: f64,
}

impl Add for Gibbs {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            gamma: self.gamma + rhs.gamma,
            pi: self.pi + rhs.pi,
            pi_pi: self.pi_pi + rhs.pi_pi,
            tau: self.tau + rhs.tau,
            tau_tau: self.tau_tau + rhs.tau_tau,
            pi_tau: self.pi_tau + rhs.pi_tau,
        }
    }
}

/// The free-energy formulation of a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FreeEnergy {
    /// A single fitted surface (region 1).
    Single(Gibbs),
    /// An ideal-gas part plus a residual part (regions 2 and 5).
    Split { ideal: Gibbs, residual: Gibbs },
}

impl FreeEnergy {
    /// Returns the full free energy, summing the parts of a split formulation.
    #[must_use]
    pub fn total(&self) -> Gibbs {
        match *self {
            Self::Single(gibbs) => gibbs,
            Self::Split { ideal, residual } => ideal + residual,
        }
    }
}

/// A free-energy surface evaluated at one state.
///
/// Pressure is in MPa and temperature in K; the derived properties use the
/// units documented on each method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Surface {
    pub pressure: f64,
    pub temperature: f64,
    pub pi: f64,
    pub tau: f64,
    pub energy: FreeEnergy,
}

impl Surface {
    /// Specific volume `v = (R·T/p)·π·γ_π`, m³/kg.
    pub(crate) fn specific_volume(&self) -> f64 {
        let g = self.energy.total();
        R_SI * self.temperature / (self.pressure * 1e6) * self.pi * g.pi
    }

    /// Specific enthalpy `h = R·T·τ·γ_τ`, kJ/kg.
    pub(crate) fn enthalpy(&self) -> f64 {
        let g = self.energy.total();
        R * self.temperature * self.tau * g.tau
    }

    /// Specific internal energy `u = R·T·(τ·γ_τ − π·γ_π)`, kJ/kg.
    pub(crate) fn internal_energy(&self) -> f64 {
        let g = self.energy.total();
        R * self.temperature * (self.tau * g.tau - self.pi * g.pi)
    }

    /// Specific entropy `s = R·(τ·γ_τ − γ)`, kJ/(kg·K).
    pub(crate) fn entropy(&self) -> f64 {
        let g = self.energy.total();
        R * (self.tau * g.tau - g.gamma)
    }

    /// Specific isobaric heat capacity `cp = −R·τ²·γ_ττ`, kJ/(kg·K).
    pub(crate) fn cp(&self) -> f64 {
        let g = self.energy.total();
        -R * self.tau * self.tau * g.tau_tau
    }

    /// Specific isochoric heat capacity, kJ/(kg·K).
    pub(crate) fn cv(&self) -> f64 {
        let (pi, tau) = (self.pi, self.tau);

        match self.energy {
            FreeEnergy::Single(g) => {
                let a = g.pi - tau * g.pi_tau;
                R * (-tau * tau * g.tau_tau + a * a / g.pi_pi)
            }
            FreeEnergy::Split { residual: r, .. } => {
                let a = 1.0 + pi * r.pi - tau * pi * r.pi_tau;
                self.cp() - R * a * a / (1.0 - pi * pi * r.pi_pi)
            }
        }
    }

    /// Speed of sound, m/s.
    pub(crate) fn speed_of_sound(&self) -> f64 {
        let (pi, tau) = (self.pi, self.tau);

        let w_squared = match self.energy {
            FreeEnergy::Single(g) => {
                let a = g.pi - tau * g.pi_tau;
                let denominator = a * a / (tau * tau * g.tau_tau) - g.pi_pi;
                R_SI * self.temperature * g.pi * g.pi / denominator
            }
            FreeEnergy::Split { ideal, residual: r } => {
                let a = 1.0 + pi * r.pi - tau * pi * r.pi_tau;
                let numerator = 1.0 + 2.0 * pi * r.pi + pi * pi * r.pi * r.pi;
                let denominator = a * a / (tau * tau * (ideal.tau_tau + r.tau_tau))
                    + (1.0 - pi * pi * r.pi_pi);
                R_SI * self.temperature * numerator / denominator
            }
        };

        w_squared.sqrt()
    }
}
