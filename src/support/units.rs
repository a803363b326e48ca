//! Extensions to [`uom`].
//!
//! Every public IF97 entry point takes and returns [`uom`] quantities. The
//! correlations produce specific (per-kilogram) energies and entropies, which
//! [`uom`] only offers under general names such as `AvailableEnergy`. This
//! module gives them the names used throughout the crate:
//!
//! ```
//! use uom::si::available_energy::kilojoule_per_kilogram;
//! use twine_if97::support::units::SpecificEnthalpy;
//!
//! let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(2800.0);
//! assert_eq!(h.get::<kilojoule_per_kilogram>(), 2800.0);
//! ```
//!
//! The aliases are plain type aliases, so any unit of the matching [`uom`]
//! quantity module can be used to build or read them.

mod quantities;

pub use quantities::{
    SpecificEnthalpy, SpecificEntropy, SpecificGasConstant, SpecificInternalEnergy,
};
