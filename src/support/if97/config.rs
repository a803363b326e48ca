use super::{If97Error, If97Result, Region};

/// Evaluation settings for [`If97`](super::If97).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct If97Config {
    /// What to do when a derived property is `NaN` or infinite.
    pub non_finite: NonFinitePolicy,
}

/// Handling of non-finite property values.
///
/// The free-energy formulas have singularities (for example a vanishing
/// denominator in `cv` or `w` close to a phase boundary). They are not
/// detected up front; the policy decides what happens to the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonFinitePolicy {
    /// Fail with [`If97Error::NonFinite`].
    #[default]
    Error,

    /// Return the `NaN` or infinite value unchanged.
    Propagate,
}

impl NonFinitePolicy {
    /// Applies the policy to one computed value.
    pub(super) fn check(
        self,
        property: &'static str,
        region: Region,
        value: f64,
    ) -> If97Result<f64> {
        match self {
            Self::Error if !value.is_finite() => Err(If97Error::NonFinite { property, region }),
            _ => Ok(value),
        }
    }
}
