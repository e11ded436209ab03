//! Conversions between Gini, Theil and the standard deviation of `ln(income)`.
//!
//! All three describe the same log-normal inequality. Every function accepts a
//! single `f64` or a fixed-shape collection and returns the same shape; range
//! checks fail the whole call if any element is out of bounds.

use tracing::trace;

use crate::error::DomainError;
use crate::statistics::{erf, inverf};

/// Largest admissible Theil index, observed empirically at a Gini of 0.99.
pub const MAX_THEIL: f64 = 6.64;

/// Quadratic `(a, b, c)` relating Theil measured from income deciles to
/// Theil derived from a Gini: `t_deciles = a·t² + b·t + c`.
pub const THEIL_EMPIRICAL_CONSTANTS: (f64, f64, f64) = (0.216, 0.991, 0.003);

/// A scalar or a homogeneous collection of inequality values.
pub trait Elementwise: Sized {
    fn map(self, f: impl Fn(f64) -> f64) -> Self;

    fn all(&self, pred: impl Fn(f64) -> bool) -> bool;
}

impl Elementwise for f64 {
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        f(self)
    }

    fn all(&self, pred: impl Fn(f64) -> bool) -> bool {
        pred(*self)
    }
}

impl Elementwise for Vec<f64> {
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        self.into_iter().map(f).collect()
    }

    fn all(&self, pred: impl Fn(f64) -> bool) -> bool {
        self.iter().all(|&x| pred(x))
    }
}

impl<const N: usize> Elementwise for [f64; N] {
    fn map(mut self, f: impl Fn(f64) -> f64) -> Self {
        for x in self.iter_mut() {
            *x = f(*x);
        }
        self
    }

    fn all(&self, pred: impl Fn(f64) -> bool) -> bool {
        self.iter().all(|&x| pred(x))
    }
}

/// Which inequality measure a value is expressed in.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Gini,
    Theil,
    Std,
}

/// σ = 2·erf⁻¹(g)
pub fn gini_to_std<T: Elementwise>(g: T) -> T {
    g.map(|g| 2.0 * inverf(g))
}

/// g = erf(σ/2)
pub fn std_to_gini<T: Elementwise>(s: T) -> T {
    s.map(|s| erf(0.5 * s))
}

/// σ = √(2t)
pub fn theil_to_std<T: Elementwise>(t: T) -> T {
    t.map(|t| (2.0 * t).sqrt())
}

/// t = σ²/2
pub fn std_to_theil<T: Elementwise>(s: T) -> T {
    s.map(|s| s * s / 2.0)
}

pub(crate) fn check_gini<T: Elementwise>(g: &T) -> Result<(), DomainError> {
    if g.all(|g| g > 0.0 && g < 1.0) {
        Ok(())
    } else {
        Err(DomainError::Gini)
    }
}

pub(crate) fn check_theil<T: Elementwise>(t: &T) -> Result<(), DomainError> {
    if t.all(|t| t > 0.0 && t < MAX_THEIL) {
        Ok(())
    } else {
        Err(DomainError::Theil)
    }
}

/// Translate Gini to Theil through the log-normal standard deviation.
///
/// With `empirical`, the result is mapped back through the decile quadratic
/// (positive root), so it matches Theil values measured from decile data.
///
/// # Errors
/// [`DomainError::Gini`] if any input is outside (0, 1), and
/// [`DomainError::Theil`] if any result is outside (0, [`MAX_THEIL`]).
pub fn gini_to_theil<T: Elementwise>(g: T, empirical: bool) -> Result<T, DomainError> {
    check_gini(&g)?;

    let mut t = std_to_theil(gini_to_std(g));
    if empirical {
        trace!("inverting empirical theil quadratic");
        let (a, b, c) = THEIL_EMPIRICAL_CONSTANTS;
        t = t.map(|t| (-b + (b * b - 4.0 * a * (c - t)).sqrt()) / (2.0 * a));
    }

    check_theil(&t)?;
    Ok(t)
}

/// Translate Theil to Gini, the inverse of [`gini_to_theil`].
///
/// # Errors
/// [`DomainError::Theil`] if any input is outside (0, [`MAX_THEIL`]), and
/// [`DomainError::Gini`] if any result is outside (0, 1).
pub fn theil_to_gini<T: Elementwise>(t: T, empirical: bool) -> Result<T, DomainError> {
    check_theil(&t)?;

    let t = if empirical {
        trace!("applying empirical theil quadratic");
        let (a, b, c) = THEIL_EMPIRICAL_CONSTANTS;
        t.map(|t| a * t * t + b * t + c)
    } else {
        t
    };
    let g = std_to_gini(theil_to_std(t));

    check_gini(&g)?;
    Ok(g)
}

/// Convert `values` from one measure to another.
///
/// Gini and Theil go through the checked conversions; `empirical` only
/// applies to that pair. Every other pair routes through the standard
/// deviation unchecked.
pub fn convert<T: Elementwise>(
    values: T,
    from: Measure,
    to: Measure,
    empirical: bool,
) -> Result<T, DomainError> {
    match (from, to) {
        (Measure::Gini, Measure::Theil) => gini_to_theil(values, empirical),
        (Measure::Theil, Measure::Gini) => theil_to_gini(values, empirical),
        (from, to) if from == to => Ok(values),
        (from, to) => {
            let std = match from {
                Measure::Gini => gini_to_std(values),
                Measure::Theil => theil_to_std(values),
                Measure::Std => values,
            };
            Ok(match to {
                Measure::Gini => std_to_gini(std),
                Measure::Theil => std_to_theil(std),
                Measure::Std => std,
            })
        }
    }
}

/// Gini coefficient of an observed sample, from the sorted-rank form
/// `Σ (2i − n − 1)·x₍ᵢ₎ / (n·Σx)`.
///
/// Returns `None` for an empty sample or one with a non-positive total.
pub fn gini_of_sample(sample: &[f64]) -> Option<f64> {
    let total: f64 = sample.iter().sum();
    if sample.is_empty() || total <= 0.0 {
        return None;
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| (2.0 * (i as f64 + 1.0) - n - 1.0) * x)
        .sum();
    Some(weighted / (n * total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn array_shape_is_preserved() {
        let s = gini_to_std([0.2, 0.4, 0.6]);
        assert_eq!(s.len(), 3);
        assert_relative_eq!(s[1], gini_to_std(0.4));
    }

    #[test]
    fn one_bad_element_fails_whole_call() {
        assert_eq!(
            gini_to_theil(vec![0.3, 0.5, 1.2], false),
            Err(DomainError::Gini)
        );
    }

    #[test]
    fn small_gini_falls_below_empirical_intercept() {
        // t_raw < c, so the positive root is negative
        assert_eq!(gini_to_theil(0.01, true), Err(DomainError::Theil));
    }

    #[test]
    fn perfect_equality_sample() {
        assert_relative_eq!(gini_of_sample(&[5.0; 10]).unwrap(), 0.0);
        assert_eq!(gini_of_sample(&[]), None);
    }
}
