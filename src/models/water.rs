//! Water and steam models backed by IAPWS-IF97.
//!
//! The computation lives in [`crate::support::if97`]; the types here adapt it
//! to [`twine_core::Model`].
//!
//! - [`PtProperties`]: every property at a given pressure and temperature.
//! - [`TemperatureFromPh`], [`TemperatureFromPs`]: temperature from the
//!   closed-form backward equations of region 1 or 2.

mod backward;
mod pt_properties;

pub use backward::{PressureEnthalpy, PressureEntropy, TemperatureFromPh, TemperatureFromPs};
pub use pt_properties::{PressureTemperature, PtProperties};

pub use crate::support::if97::BackwardRegion;
