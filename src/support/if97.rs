//! IAPWS-IF97 properties of water and steam.
//!
//! The industrial formulation splits the `(p, T)` plane into regions, each
//! described by a dimensionless Gibbs free energy `γ(π, τ)`. This module
//! implements regions 1, 2 and 5 together with the closed-form backward
//! equations `T(p, h)` and `T(p, s)` for regions 1 and 2. Region 3 is
//! recognized by the classifier but has no property formulation here.
//!
//! # Entry points
//!
//! - [`If97`]: classifies a state and evaluates properties with a given
//!   [`If97Config`]. The free functions in this module ([`properties`],
//!   [`enthalpy`], ...) use the default configuration.
//! - [`region1`], [`region2`], [`region5`]: the raw kernels, working on `f64`
//!   in MPa, K, kJ/kg and kJ/(kg·K).
//!
//! Typed entry points always take pressure first and temperature second.
//!
//! ```
//! use twine_if97::support::if97::{self, Region};
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::megapascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let p = Pressure::new::<megapascal>(3.0);
//! let t = ThermodynamicTemperature::new::<kelvin>(300.0);
//!
//! let props = if97::properties(p, t)?;
//! assert_eq!(props.region, Region::One);
//! assert!((props.enthalpy.get::<kilojoule_per_kilogram>() - 115.331_273).abs() < 1e-6);
//! # Ok::<(), if97::If97Error>(())
//! ```

mod config;
mod error;
mod gibbs;
mod properties;
mod region;
mod term;

pub mod constants;
pub mod region1;
pub mod region2;
pub mod region5;

pub use config::{If97Config, NonFinitePolicy};
pub use error::{If97Error, If97Result};
pub use gibbs::{FreeEnergy, Gibbs};
pub use properties::Properties;
pub use region::{Region, b23_pressure, b23_temperature};
pub use region2::Subregion as Region2Subregion;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{
        MassDensity, Pressure, SpecificHeatCapacity, SpecificVolume, ThermodynamicTemperature,
        Velocity,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant, SpecificInternalEnergy},
};

use gibbs::Surface;

/// Region whose backward equations should be used.
///
/// Backward equations bypass the classifier, so the caller names the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackwardRegion {
    One,
    Two,
}

impl From<BackwardRegion> for Region {
    fn from(region: BackwardRegion) -> Self {
        match region {
            BackwardRegion::One => Region::One,
            BackwardRegion::Two => Region::Two,
        }
    }
}

/// Configured IF97 evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct If97 {
    config: If97Config,
}

impl If97 {
    /// Creates an evaluator with the given configuration.
    #[must_use]
    pub fn new(config: If97Config) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> If97Config {
        self.config
    }

    /// Returns the region containing a state.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Unclassifiable`] if no region contains the state.
    pub fn region(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<Region> {
        Region::classify(pressure.get::<megapascal>(), temperature.get::<kelvin>()).ok_or(
            If97Error::Unclassifiable {
                pressure,
                temperature,
            },
        )
    }

    /// Classifies a state and evaluates every property in one pass.
    ///
    /// # Errors
    ///
    /// Fails if the state is unclassifiable, lies in region 3, or yields a
    /// non-finite value under [`NonFinitePolicy::Error`].
    pub fn properties(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<Properties> {
        let region = self.region(pressure, temperature)?;
        self.properties_in(region, pressure, temperature)
    }

    /// Evaluates every property with a chosen region's formulation.
    ///
    /// The state is not classified, so this can reach metastable states
    /// outside the nominal region boundaries.
    ///
    /// # Errors
    ///
    /// Fails if either input is not strictly positive and finite, if
    /// `region` is [`Region::Three`], or if a value is non-finite under
    /// [`NonFinitePolicy::Error`].
    pub fn properties_in(
        &self,
        region: Region,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<Properties> {
        let p = positive_finite("pressure", pressure.get::<megapascal>())?;
        let t = positive_finite("temperature", temperature.get::<kelvin>())?;

        let surface = surface(region, p, t)?;
        Properties::from_surface(region, &surface, self.config.non_finite)
    }

    /// Specific volume.
    ///
    /// # Errors
    ///
    /// See [`If97::properties`].
    pub fn specific_volume(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<SpecificVolume> {
        let v = self.evaluate(pressure, temperature, "specific volume", Surface::specific_volume)?;
        Ok(SpecificVolume::new::<cubic_meter_per_kilogram>(v))
    }

    /// Density.
    ///
    /// # Errors
    ///
    /// See [`If97::properties`].
    pub fn density(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<MassDensity> {
        let rho = self.evaluate(pressure, temperature, "density", |s| 1.0 / s.specific_volume())?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(rho))
    }

    /// Specific enthalpy.
    ///
    /// # Errors
    ///
    /// See [`If97::properties`].
    pub fn enthalpy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<SpecificEnthalpy> {
        let h = self.evaluate(pressure, temperature, "enthalpy", Surface::enthalpy)?;
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(h))
    }

    /// Specific internal energy.
    ///
    /// # Errors
    ///
    /// See [`If97::properties`].
    pub fn internal_energy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<SpecificInternalEnergy> {
        let u = self.evaluate(pressure, temperature, "internal energy", Surface::internal_energy)?;
        Ok(SpecificInternalEnergy::new::<kilojoule_per_kilogram>(u))
    }

    /// Specific entropy.
    ///
    /// # Errors
    ///
    /// See [`If97::properties`].
    pub fn entropy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<SpecificEntropy> {
        let s = self.evaluate(pressure, temperature, "entropy", Surface::entropy)?;
        Ok(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s))
    }

    /// Specific isobaric heat capacity.
    ///
    /// # Errors
    ///
    /// See [`If97::properties`].
    pub fn cp(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<SpecificHeatCapacity> {
        let cp = self.evaluate(pressure, temperature, "cp", Surface::cp)?;
        Ok(SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cp))
    }

    /// Specific isochoric heat capacity.
    ///
    /// # Errors
    ///
    /// See [`If97::properties`].
    pub fn cv(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<SpecificHeatCapacity> {
        let cv = self.evaluate(pressure, temperature, "cv", Surface::cv)?;
        Ok(SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cv))
    }

    /// Speed of sound.
    ///
    /// # Errors
    ///
    /// See [`If97::properties`].
    pub fn speed_of_sound(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> If97Result<Velocity> {
        let w = self.evaluate(pressure, temperature, "speed of sound", Surface::speed_of_sound)?;
        Ok(Velocity::new::<meter_per_second>(w))
    }

    /// Temperature from pressure and enthalpy via a region's backward equation.
    ///
    /// The state is assumed to lie in `region`; no classification is done.
    ///
    /// # Errors
    ///
    /// Fails if the pressure is not strictly positive and finite, if the
    /// enthalpy is not finite, or if the result is non-finite under
    /// [`NonFinitePolicy::Error`].
    pub fn temperature_from_ph(
        &self,
        region: BackwardRegion,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> If97Result<ThermodynamicTemperature> {
        let p = positive_finite("pressure", pressure.get::<megapascal>())?;
        let h = finite("enthalpy", enthalpy.get::<kilojoule_per_kilogram>())?;

        let t = match region {
            BackwardRegion::One => region1::temperature_ph(p, h),
            BackwardRegion::Two => region2::temperature_ph(p, h),
        };

        let t = self.config.non_finite.check("temperature", region.into(), t)?;
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }

    /// Temperature from pressure and entropy via a region's backward equation.
    ///
    /// The state is assumed to lie in `region`; no classification is done.
    ///
    /// # Errors
    ///
    /// Same conditions as [`If97::temperature_from_ph`], with entropy in
    /// place of enthalpy.
    pub fn temperature_from_ps(
        &self,
        region: BackwardRegion,
        pressure: Pressure,
        entropy: SpecificEntropy,
    ) -> If97Result<ThermodynamicTemperature> {
        let p = positive_finite("pressure", pressure.get::<megapascal>())?;
        let s = finite("entropy", entropy.get::<kilojoule_per_kilogram_kelvin>())?;

        let t = match region {
            BackwardRegion::One => region1::temperature_ps(p, s),
            BackwardRegion::Two => region2::temperature_ps(p, s),
        };

        let t = self.config.non_finite.check("temperature", region.into(), t)?;
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }

    /// Classifies a state and evaluates one property of its surface.
    fn evaluate(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        property: &'static str,
        derive: fn(&Surface) -> f64,
    ) -> If97Result<f64> {
        let region = self.region(pressure, temperature)?;
        let surface = surface(
            region,
            pressure.get::<megapascal>(),
            temperature.get::<kelvin>(),
        )?;

        self.config
            .non_finite
            .check(property, region, derive(&surface))
    }
}

/// Specific gas constant of ordinary water.
#[must_use]
pub fn gas_constant() -> SpecificGasConstant {
    SpecificGasConstant::new::<kilojoule_per_kilogram_kelvin>(constants::R)
}

/// Returns the region containing a state.
///
/// # Errors
///
/// See [`If97::region`].
pub fn region(pressure: Pressure, temperature: ThermodynamicTemperature) -> If97Result<Region> {
    If97::default().region(pressure, temperature)
}

/// Evaluates every property at a state with the default configuration.
///
/// # Errors
///
/// See [`If97::properties`].
pub fn properties(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> If97Result<Properties> {
    If97::default().properties(pressure, temperature)
}

/// Specific volume with the default configuration.
///
/// # Errors
///
/// See [`If97::properties`].
pub fn specific_volume(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> If97Result<SpecificVolume> {
    If97::default().specific_volume(pressure, temperature)
}

/// Specific enthalpy with the default configuration.
///
/// # Errors
///
/// See [`If97::properties`].
pub fn enthalpy(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> If97Result<SpecificEnthalpy> {
    If97::default().enthalpy(pressure, temperature)
}

/// Specific internal energy with the default configuration.
///
/// # Errors
///
/// See [`If97::properties`].
pub fn internal_energy(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> If97Result<SpecificInternalEnergy> {
    If97::default().internal_energy(pressure, temperature)
}

/// Specific entropy with the default configuration.
///
/// # Errors
///
/// See [`If97::properties`].
pub fn entropy(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> If97Result<SpecificEntropy> {
    If97::default().entropy(pressure, temperature)
}

/// Specific isobaric heat capacity with the default configuration.
///
/// # Errors
///
/// See [`If97::properties`].
pub fn cp(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> If97Result<SpecificHeatCapacity> {
    If97::default().cp(pressure, temperature)
}

/// Specific isochoric heat capacity with the default configuration.
///
/// # Errors
///
/// See [`If97::properties`].
pub fn cv(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> If97Result<SpecificHeatCapacity> {
    If97::default().cv(pressure, temperature)
}

/// Speed of sound with the default configuration.
///
/// # Errors
///
/// See [`If97::properties`].
pub fn speed_of_sound(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> If97Result<Velocity> {
    If97::default().speed_of_sound(pressure, temperature)
}

/// Evaluates a region's free-energy surface.
fn surface(region: Region, pressure: f64, temperature: f64) -> If97Result<Surface> {
    match region {
        Region::One => Ok(region1::surface(pressure, temperature)),
        Region::Two => Ok(region2::surface(pressure, temperature)),
        Region::Three => Err(If97Error::UnimplementedRegion { region }),
        Region::Five => Ok(region5::surface(pressure, temperature)),
    }
}

/// Checks that a working-unit value may be handed to a kernel.
fn positive_finite(name: &str, value: f64) -> If97Result<f64> {
    let value = Constrained::<f64, StrictlyPositive>::new(value)
        .map_err(|err| If97Error::InvalidInput {
            context: format!("{name}: {err}"),
        })?
        .into_inner();

    finite(name, value)
}

fn finite(name: &str, value: f64) -> If97Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(If97Error::InvalidInput {
            context: format!("{name} must be finite, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn state(p_mpa: f64, t_k: f64) -> (Pressure, ThermodynamicTemperature) {
        (
            Pressure::new::<megapascal>(p_mpa),
            ThermodynamicTemperature::new::<kelvin>(t_k),
        )
    }

    #[test]
    fn liquid_reference_state() {
        let (p, t) = state(3.0, 300.0);

        assert_eq!(region(p, t), Ok(Region::One));
        assert_relative_eq!(
            specific_volume(p, t).unwrap().get::<cubic_meter_per_kilogram>(),
            0.100_215_168e-2,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            enthalpy(p, t).unwrap().get::<kilojoule_per_kilogram>(),
            115.331_273,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            speed_of_sound(p, t).unwrap().get::<meter_per_second>(),
            1507.739_21,
            max_relative = 1e-8
        );
    }

    #[test]
    fn vapour_reference_state() {
        let (p, t) = state(30.0, 700.0);

        assert_eq!(region(p, t), Ok(Region::Two));
        assert_relative_eq!(
            cv(p, t).unwrap().get::<kilojoule_per_kilogram_kelvin>(),
            2.975_538_36,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            entropy(p, t).unwrap().get::<kilojoule_per_kilogram_kelvin>(),
            5.175_402_98,
            max_relative = 1e-8
        );
    }

    #[test]
    fn high_temperature_reference_state() {
        let (p, t) = state(30.0, 2000.0);
        let props = properties(p, t).unwrap();

        assert_eq!(props.region, Region::Five);
        assert_relative_eq!(
            props.enthalpy.get::<kilojoule_per_kilogram>(),
            6571.226_04,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            internal_energy(p, t).unwrap().get::<kilojoule_per_kilogram>(),
            5637.070_38,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            cp(p, t).unwrap().get::<kilojoule_per_kilogram_kelvin>(),
            2.885_698_82,
            max_relative = 1e-8
        );
    }

    #[test]
    fn single_property_calls_match_the_bundle() {
        let if97 = If97::default();
        let (p, t) = state(10.0, 800.0);
        let props = if97.properties(p, t).unwrap();

        assert_eq!(if97.specific_volume(p, t), Ok(props.specific_volume));
        assert_eq!(if97.enthalpy(p, t), Ok(props.enthalpy));
        assert_eq!(if97.cv(p, t), Ok(props.cv));
        assert_relative_eq!(
            if97.density(p, t).unwrap().get::<kilogram_per_cubic_meter>(),
            props.density.get::<kilogram_per_cubic_meter>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn chosen_region_skips_classification() {
        // 300 K at 3.5 kPa classifies as region 1; region 2 still evaluates it.
        let (p, t) = state(0.0035, 300.0);
        assert_eq!(region(p, t), Ok(Region::One));

        let props = If97::default().properties_in(Region::Two, p, t).unwrap();
        assert_eq!(props.region, Region::Two);
        assert_relative_eq!(
            props.specific_volume.get::<cubic_meter_per_kilogram>(),
            0.394_913_866e2,
            max_relative = 1e-8
        );
    }

    #[test]
    fn region3_is_not_implemented() {
        let (p, t) = state(25.0, 640.0);

        assert_eq!(region(p, t), Ok(Region::Three));
        assert_eq!(
            enthalpy(p, t),
            Err(If97Error::UnimplementedRegion {
                region: Region::Three
            })
        );
        assert!(matches!(
            If97::default().properties_in(Region::Three, p, t),
            Err(If97Error::UnimplementedRegion { .. })
        ));
    }

    #[test]
    fn unclassifiable_states() {
        for (p_mpa, t_k) in [(-1.0, 300.0), (120.0, 300.0), (1.0, 200.0), (60.0, 1500.0)] {
            let (p, t) = state(p_mpa, t_k);
            assert_eq!(
                properties(p, t),
                Err(If97Error::Unclassifiable {
                    pressure: p,
                    temperature: t
                })
            );
        }

        let (p, t) = state(120.0, 300.0);
        let message = region(p, t).unwrap_err().to_string();
        assert!(message.contains("120 MPa"), "{message}");
    }

    #[test]
    fn invalid_kernel_inputs() {
        let if97 = If97::default();
        let (zero, t) = state(0.0, 400.0);

        assert!(matches!(
            if97.properties_in(Region::Two, zero, t),
            Err(If97Error::InvalidInput { .. })
        ));

        let (p, infinite) = state(1.0, f64::INFINITY);
        assert!(matches!(
            if97.properties_in(Region::Two, p, infinite),
            Err(If97Error::InvalidInput { .. })
        ));

        let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(f64::NAN);
        assert!(matches!(
            if97.temperature_from_ph(BackwardRegion::Two, p, h),
            Err(If97Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn backward_reference_points() {
        let if97 = If97::default();
        let p = Pressure::new::<megapascal>(3.0);

        let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(500.0);
        let t = if97.temperature_from_ph(BackwardRegion::One, p, h).unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 391.798_509, max_relative = 1e-8);

        let s = SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(0.5);
        let t = if97.temperature_from_ps(BackwardRegion::One, p, s).unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 307.842_258, max_relative = 1e-8);

        let s = SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(7.5);
        let p = Pressure::new::<megapascal>(8.0);
        let t = if97.temperature_from_ps(BackwardRegion::Two, p, s).unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 1064.955_56, max_relative = 1e-8);
    }

    #[test]
    fn backward_inverts_forward() {
        let if97 = If97::default();
        let (p, t) = state(5.0, 650.0);

        let props = if97.properties(p, t).unwrap();
        assert_eq!(props.region, Region::Two);

        let from_h = if97
            .temperature_from_ph(BackwardRegion::Two, p, props.enthalpy)
            .unwrap();
        let from_s = if97
            .temperature_from_ps(BackwardRegion::Two, p, props.entropy)
            .unwrap();

        assert_relative_eq!(from_h.get::<kelvin>(), 650.0, epsilon = 0.025);
        assert_relative_eq!(from_s.get::<kelvin>(), 650.0, epsilon = 0.025);
    }

    #[test]
    fn config_is_kept() {
        let config = If97Config {
            non_finite: NonFinitePolicy::Propagate,
        };
        assert_eq!(If97::new(config).config(), config);
        assert_eq!(If97::default().config().non_finite, NonFinitePolicy::Error);
    }

    #[test]
    fn water_gas_constant() {
        assert_relative_eq!(
            gas_constant().get::<kilojoule_per_kilogram_kelvin>(),
            0.461_526,
            max_relative = 1e-12
        );
    }
}
