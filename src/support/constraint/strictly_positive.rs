use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use twine_if97::support::constraint::StrictlyPositive;
///
/// let t = StrictlyPositive::new(300.0).unwrap();
/// assert_eq!(t.into_inner(), 300.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Pressure, ThermodynamicTemperature},
        pressure::megapascal,
        thermodynamic_temperature::kelvin,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(16.53).is_ok());
        assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::check(&-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn pressures() {
        assert!(StrictlyPositive::new(Pressure::new::<megapascal>(3.0)).is_ok());
        assert!(StrictlyPositive::new(Pressure::new::<megapascal>(0.0)).is_err());
        assert!(StrictlyPositive::new(Pressure::new::<megapascal>(-0.1)).is_err());
    }

    #[test]
    fn absolute_temperatures() {
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        assert!(StrictlyPositive::check(&t.get::<kelvin>()).is_ok());

        let t = ThermodynamicTemperature::new::<kelvin>(0.0);
        assert!(StrictlyPositive::check(&t.get::<kelvin>()).is_err());
    }
}
