use thiserror::Error;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::megapascal,
    thermodynamic_temperature::kelvin,
};

use super::Region;

/// Errors that may occur when evaluating IF97 properties.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum If97Error {
    /// The state lies outside every IF97 region handled by the classifier.
    ///
    /// For example, a temperature below the triple point or a pressure above 100 MPa.
    #[error(
        "no IF97 region contains p = {} MPa, T = {} K",
        pressure.get::<megapascal>(),
        temperature.get::<kelvin>()
    )]
    Unclassifiable {
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    },

    /// The state belongs to a region for which no property formulation exists.
    #[error("{region} properties are not implemented")]
    UnimplementedRegion { region: Region },

    /// An input cannot be passed to the correlation at all.
    ///
    /// For example, a non-positive pressure would place `ln(π)` at a singularity.
    #[error("invalid input: {context}")]
    InvalidInput { context: String },

    /// A property evaluated to `NaN` or an infinity.
    ///
    /// Only returned under [`NonFinitePolicy::Error`](super::NonFinitePolicy::Error).
    #[error("{property} is not finite in {region}")]
    NonFinite {
        property: &'static str,
        region: Region,
    },
}

/// IF97 result type.
pub type If97Result<T> = Result<T, If97Error>;
