use twine_core::Model;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::if97::{If97, If97Config, If97Error, Properties};

/// Input state for [`PtProperties`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureTemperature {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

/// Evaluates IF97 properties of water at a pressure and temperature.
///
/// The region is chosen by the IF97 classifier on every call.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_if97::{
///     models::water::{PressureTemperature, PtProperties},
///     support::if97::Region,
/// };
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::megapascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let model = PtProperties::default();
/// let props = model
///     .call(&PressureTemperature {
///         pressure: Pressure::new::<megapascal>(0.0035),
///         temperature: ThermodynamicTemperature::new::<kelvin>(700.0),
///     })
///     .unwrap();
///
/// assert_eq!(props.region, Region::Two);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PtProperties {
    if97: If97,
}

impl PtProperties {
    /// Creates the model with a custom evaluation configuration.
    #[must_use]
    pub fn new(config: If97Config) -> Self {
        Self {
            if97: If97::new(config),
        }
    }
}

impl Model for PtProperties {
    type Input = PressureTemperature;
    type Output = Properties;
    type Error = If97Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.if97.properties(input.pressure, input.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, pressure::megapascal,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin,
        specific_volume::cubic_meter_per_kilogram, thermodynamic_temperature::kelvin,
        velocity::meter_per_second,
    };

    use crate::support::if97::{NonFinitePolicy, Region};

    fn input(p_mpa: f64, t_k: f64) -> PressureTemperature {
        PressureTemperature {
            pressure: Pressure::new::<megapascal>(p_mpa),
            temperature: ThermodynamicTemperature::new::<kelvin>(t_k),
        }
    }

    #[test]
    fn compressed_liquid() {
        let props = PtProperties::default().call(&input(80.0, 300.0)).unwrap();

        assert_eq!(props.region, Region::One);
        assert_relative_eq!(
            props.specific_volume.get::<cubic_meter_per_kilogram>(),
            0.971_180_894e-3,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            props.internal_energy.get::<kilojoule_per_kilogram>(),
            106.448_356,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            props.cv.get::<kilojoule_per_kilogram_kelvin>(),
            3.917_366_061,
            max_relative = 1e-8
        );
    }

    #[test]
    fn high_temperature_steam() {
        let props = PtProperties::default().call(&input(0.5, 1500.0)).unwrap();

        assert_eq!(props.region, Region::Five);
        assert_relative_eq!(
            props.speed_of_sound.get::<meter_per_second>(),
            917.068_690,
            max_relative = 1e-8
        );
    }

    #[test]
    fn errors_pass_through() {
        let model = PtProperties::new(If97Config {
            non_finite: NonFinitePolicy::Propagate,
        });

        assert!(matches!(
            model.call(&input(150.0, 500.0)),
            Err(If97Error::Unclassifiable { .. })
        ));
        assert!(matches!(
            model.call(&input(25.0, 640.0)),
            Err(If97Error::UnimplementedRegion {
                region: Region::Three
            })
        ));
    }
}
