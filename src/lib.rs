//! # Twine IF97
//!
//! IAPWS-IF97 water and steam properties for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters for property and backward
//!   temperature evaluation.
//! - [`support`]: The IF97 formulation itself, plus the unit aliases and
//!   numeric constraints it relies on.
//!
//! ## Coverage
//!
//! Regions 1, 2 and 5 are implemented from `(p, T)`, along with the backward
//! equations `T(p, h)` and `T(p, s)` for regions 1 and 2. Region 3 is
//! recognized when classifying a state but reported as unimplemented, and the
//! saturation line (region 4) is not modelled.
//!
//! All public functions take [`uom`] quantities with pressure first.
//!
//! Note: [`support`] modules are public but their APIs are not stable.

pub mod models;
pub mod support;
