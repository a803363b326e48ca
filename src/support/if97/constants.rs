//! Physical constants and region limits shared by every IF97 region.
//!
//! Values are in the IF97 working units: MPa, K, kJ/(kg·K).

/// Specific gas constant of ordinary water, kJ/(kg·K) (IF97 eq. 1).
pub const R: f64 = 0.461_526;

/// Critical temperature, K.
pub const T_CRITICAL: f64 = 647.096;

/// Critical pressure, MPa.
pub const P_CRITICAL: f64 = 22.064;

/// Critical density, kg/m³.
pub const RHO_CRITICAL: f64 = 322.0;

/// Triple-point temperature, K.
pub const T_TRIPLE: f64 = 273.16;

/// Triple-point pressure, MPa.
pub const P_TRIPLE: f64 = 0.000_611_657;

/// Upper pressure limit of regions 1, 2 and 3, MPa.
pub const P_MAX: f64 = 100.0;

/// Upper pressure limit of region 5, MPa.
pub const P_MAX_REGION5: f64 = 50.0;

/// Boundary temperature between region 1 and region 3, K.
pub const T_13: f64 = 623.15;

/// Lowest pressure on the region 2/3 boundary (at `T_13`), MPa.
pub const P_B23_MIN: f64 = 16.5292;

/// Boundary temperature between region 2 and region 5, K.
pub const T_25: f64 = 1073.15;

/// Upper temperature limit of region 5, K.
pub const T_MAX_REGION5: f64 = 2273.15;

/// Converts `R` to J/(kg·K) for properties expressed in base SI units.
pub(crate) const R_SI: f64 = R * 1000.0;
