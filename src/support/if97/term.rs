//! Coefficient table rows and the power sums evaluated over them.
//!
//! Every IF97 correlation in this crate is a weighted power sum of the form
//! `Σ nₖ · xᶦᵏ · yʲᵏ`, where `x` and `y` are (possibly shifted) reduced
//! variables. Free-energy kernels also need first and second partial
//! derivatives of that sum, which [`power_sums`] computes in a single pass.

/// One row of an IF97 coefficient table with integer exponents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Term {
    pub i: i32,
    pub j: i32,
    pub n: f64,
}

impl Term {
    pub(crate) const fn new(i: i32, j: i32, n: f64) -> Self {
        Self { i, j, n }
    }
}

/// One row of an IF97 coefficient table whose first exponent is fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RationalTerm {
    pub i: f64,
    pub j: i32,
    pub n: f64,
}

impl RationalTerm {
    pub(crate) const fn new(i: f64, j: i32, n: f64) -> Self {
        Self { i, j, n }
    }
}

/// One row of an ideal-gas table, which depends on `τ` only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IdealTerm {
    pub j: i32,
    pub n: f64,
}

impl IdealTerm {
    pub(crate) const fn new(j: i32, n: f64) -> Self {
        Self { j, n }
    }
}

/// A power sum and its partial derivatives up to second order.
///
/// Derivatives are with respect to the arguments passed to [`power_sums`];
/// callers apply the chain rule for any shift or sign in those arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct PowerSums {
    pub value: f64,
    pub dx: f64,
    pub dxx: f64,
    pub dy: f64,
    pub dyy: f64,
    pub dxy: f64,
}

/// Evaluates `Σ n · xⁱ · yʲ` and its derivatives.
///
/// Terms whose derivative coefficient vanishes are skipped, so a zero
/// exponent never produces `0 · x⁻¹` at `x = 0`.
pub(crate) fn power_sums(terms: &[Term], x: f64, y: f64) -> PowerSums {
    let mut sums = PowerSums::default();

    for &Term { i, j, n } in terms {
        let fi = f64::from(i);
        let fj = f64::from(j);

        let x_i = x.powi(i);
        let y_j = y.powi(j);
        sums.value += n * x_i * y_j;

        if i != 0 {
            let x_i1 = x.powi(i - 1);
            sums.dx += n * fi * x_i1 * y_j;
            if j != 0 {
                sums.dxy += n * fi * fj * x_i1 * y.powi(j - 1);
            }
            if i != 1 {
                sums.dxx += n * fi * (fi - 1.0) * x.powi(i - 2) * y_j;
            }
        }

        if j != 0 {
            sums.dy += n * fj * x_i * y.powi(j - 1);
            if j != 1 {
                sums.dyy += n * fj * (fj - 1.0) * x_i * y.powi(j - 2);
            }
        }
    }

    sums
}

/// Evaluates `Σ n · xⁱ · yʲ` without derivatives.
pub(crate) fn power_sum(terms: &[Term], x: f64, y: f64) -> f64 {
    terms
        .iter()
        .map(|&Term { i, j, n }| n * x.powi(i) * y.powi(j))
        .sum()
}

/// Evaluates `Σ n · xⁱ · yʲ` for a table with fractional `i`.
pub(crate) fn rational_power_sum(terms: &[RationalTerm], x: f64, y: f64) -> f64 {
    terms
        .iter()
        .map(|&RationalTerm { i, j, n }| n * x.powf(i) * y.powi(j))
        .sum()
}

/// Evaluates `Σ n · τʲ` and its first and second derivatives in `τ`.
///
/// Returns `(value, d/dτ, d²/dτ²)`.
pub(crate) fn ideal_sums(terms: &[IdealTerm], tau: f64) -> (f64, f64, f64) {
    terms
        .iter()
        .fold((0.0, 0.0, 0.0), |(value, d1, d2), &IdealTerm { j, n }| {
            let fj = f64::from(j);
            (
                value + n * tau.powi(j),
                d1 + n * fj * tau.powi(j - 1),
                d2 + n * fj * (fj - 1.0) * tau.powi(j - 2),
            )
        })
}
