use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, SpecificHeatCapacity, SpecificVolume, Velocity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    velocity::meter_per_second,
};

use crate::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};

use super::{If97Result, NonFinitePolicy, Region, gibbs::Surface};

/// Every property IF97 derives from the Gibbs free energy at one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Properties {
    /// Region whose formulation produced these values.
    pub region: Region,
    pub specific_volume: SpecificVolume,
    /// Reciprocal of the specific volume.
    pub density: MassDensity,
    pub enthalpy: SpecificEnthalpy,
    pub internal_energy: SpecificInternalEnergy,
    pub entropy: SpecificEntropy,
    /// Specific isobaric heat capacity.
    pub cp: SpecificHeatCapacity,
    /// Specific isochoric heat capacity.
    pub cv: SpecificHeatCapacity,
    pub speed_of_sound: Velocity,
}

impl Properties {
    /// Derives all properties from one evaluated surface.
    pub(super) fn from_surface(
        region: Region,
        surface: &Surface,
        policy: NonFinitePolicy,
    ) -> If97Result<Self> {
        let check = |property, value| policy.check(property, region, value);

        let v = check("specific volume", surface.specific_volume())?;

        Ok(Self {
            region,
            specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(v),
            density: MassDensity::new::<kilogram_per_cubic_meter>(check("density", 1.0 / v)?),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(check(
                "enthalpy",
                surface.enthalpy(),
            )?),
            internal_energy: SpecificInternalEnergy::new::<kilojoule_per_kilogram>(check(
                "internal energy",
                surface.internal_energy(),
            )?),
            entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(check(
                "entropy",
                surface.entropy(),
            )?),
            cp: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(check(
                "cp",
                surface.cp(),
            )?),
            cv: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(check(
                "cv",
                surface.cv(),
            )?),
            speed_of_sound: Velocity::new::<meter_per_second>(check(
                "speed of sound",
                surface.speed_of_sound(),
            )?),
        })
    }
}
