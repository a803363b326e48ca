use twine_core::Model;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::{
    if97::{BackwardRegion, If97, If97Config, If97Error},
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Input state for [`TemperatureFromPh`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureEnthalpy {
    pub pressure: Pressure,
    pub enthalpy: SpecificEnthalpy,
}

/// Input state for [`TemperatureFromPs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureEntropy {
    pub pressure: Pressure,
    pub entropy: SpecificEntropy,
}

/// Temperature from pressure and enthalpy using one region's backward equation.
///
/// The caller is responsible for choosing the region the state lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureFromPh {
    region: BackwardRegion,
    if97: If97,
}

impl TemperatureFromPh {
    /// Creates the model for `region` with the default configuration.
    #[must_use]
    pub fn new(region: BackwardRegion) -> Self {
        Self::with_config(region, If97Config::default())
    }

    /// Creates the model for `region` with a custom configuration.
    #[must_use]
    pub fn with_config(region: BackwardRegion, config: If97Config) -> Self {
        Self {
            region,
            if97: If97::new(config),
        }
    }
}

impl Model for TemperatureFromPh {
    type Input = PressureEnthalpy;
    type Output = ThermodynamicTemperature;
    type Error = If97Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.if97
            .temperature_from_ph(self.region, input.pressure, input.enthalpy)
    }
}

/// Temperature from pressure and entropy using one region's backward equation.
///
/// The caller is responsible for choosing the region the state lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureFromPs {
    region: BackwardRegion,
    if97: If97,
}

impl TemperatureFromPs {
    /// Creates the model for `region` with the default configuration.
    #[must_use]
    pub fn new(region: BackwardRegion) -> Self {
        Self::with_config(region, If97Config::default())
    }

    /// Creates the model for `region` with a custom configuration.
    #[must_use]
    pub fn with_config(region: BackwardRegion, config: If97Config) -> Self {
        Self {
            region,
            if97: If97::new(config),
        }
    }
}

impl Model for TemperatureFromPs {
    type Input = PressureEntropy;
    type Output = ThermodynamicTemperature;
    type Error = If97Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.if97
            .temperature_from_ps(self.region, input.pressure, input.entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, pressure::megapascal,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin, thermodynamic_temperature::kelvin,
    };

    use crate::models::water::{PressureTemperature, PtProperties};

    fn ph(p_mpa: f64, h: f64) -> PressureEnthalpy {
        PressureEnthalpy {
            pressure: Pressure::new::<megapascal>(p_mpa),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(h),
        }
    }

    fn ps(p_mpa: f64, s: f64) -> PressureEntropy {
        PressureEntropy {
            pressure: Pressure::new::<megapascal>(p_mpa),
            entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s),
        }
    }

    #[test]
    fn liquid_from_enthalpy() {
        let model = TemperatureFromPh::new(BackwardRegion::One);
        let t = model.call(&ph(80.0, 1500.0)).unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 611.041_229, max_relative = 1e-8);
    }

    #[test]
    fn steam_from_enthalpy_in_each_subregion() {
        let model = TemperatureFromPh::new(BackwardRegion::Two);

        for (p, h, expected) in [
            (3.0, 4000.0, 1010.775_77),
            (25.0, 3500.0, 875.279_054),
            (60.0, 2700.0, 791.137_067),
        ] {
            let t = model.call(&ph(p, h)).unwrap();
            assert_relative_eq!(t.get::<kelvin>(), expected, max_relative = 1e-8);
        }
    }

    #[test]
    fn steam_from_entropy_in_each_subregion() {
        let model = TemperatureFromPs::new(BackwardRegion::Two);

        for (p, s, expected) in [
            (0.1, 7.5, 399.517_097),
            (90.0, 6.0, 1038.011_26),
            (80.0, 5.25, 854.011_484),
        ] {
            let t = model.call(&ps(p, s)).unwrap();
            assert_relative_eq!(t.get::<kelvin>(), expected, max_relative = 1e-8);
        }
    }

    #[test]
    fn round_trip_through_forward_model() {
        let pressure = Pressure::new::<megapascal>(25.0);
        let temperature = ThermodynamicTemperature::new::<kelvin>(500.0);
        let props = PtProperties::default()
            .call(&PressureTemperature {
                pressure,
                temperature,
            })
            .unwrap();

        let from_h = TemperatureFromPh::new(BackwardRegion::One)
            .call(&PressureEnthalpy {
                pressure,
                enthalpy: props.enthalpy,
            })
            .unwrap();
        let from_s = TemperatureFromPs::new(BackwardRegion::One)
            .call(&PressureEntropy {
                pressure,
                entropy: props.entropy,
            })
            .unwrap();

        assert_relative_eq!(from_h.get::<kelvin>(), 500.0, epsilon = 0.025);
        assert_relative_eq!(from_s.get::<kelvin>(), 500.0, epsilon = 0.025);
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let model = TemperatureFromPs::new(BackwardRegion::One);
        assert!(matches!(
            model.call(&ps(-3.0, 0.5)),
            Err(If97Error::InvalidInput { .. })
        ));
    }
}
