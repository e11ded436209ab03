//! Normal and log-normal distribution queries built on the error function.
//!
//! Log-normal functions take `(shape, scale)` the way `scipy.stats.lognorm`
//! does: `shape` is the standard deviation of `ln X` and `scale` is the median
//! `exp(mu)`.

use std::f64::consts::{PI, SQRT_2};

pub use puruspe::{erf, erfc, inverf, inverfc};

/// Standard normal CDF, Φ(x).
pub fn normal_cdf(x: f64) -> f64 {
    if x == f64::INFINITY {
        return 1.0;
    }
    if x == f64::NEG_INFINITY {
        return 0.0;
    }
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal quantile function, Φ⁻¹(p).
///
/// Returns `-inf`/`inf` at `p = 0`/`p = 1` and NaN outside `[0, 1]`.
pub fn normal_ppf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    // work from the nearer tail so small probabilities keep their bits
    if p < 0.5 {
        -SQRT_2 * inverfc(2.0 * p)
    } else {
        SQRT_2 * inverfc(2.0 * (1.0 - p))
    }
}

pub fn lognorm_pdf(x: f64, shape: f64, scale: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    let z = (x / scale).ln() / shape;
    (-0.5 * z * z).exp() / (x * shape * (2.0 * PI).sqrt())
}

pub fn lognorm_cdf(x: f64, shape: f64, scale: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    normal_cdf((x / scale).ln() / shape)
}

pub fn lognorm_ppf(p: f64, shape: f64, scale: f64) -> f64 {
    scale * (shape * normal_ppf(p)).exp()
}

pub fn lognorm_mean(shape: f64, scale: f64) -> f64 {
    scale * (0.5 * shape * shape).exp()
}

pub fn lognorm_median(_shape: f64, scale: f64) -> f64 {
    scale
}

pub fn lognorm_var(shape: f64, scale: f64) -> f64 {
    let s2 = shape * shape;
    scale * scale * s2.exp() * s2.exp_m1()
}

pub fn lognorm_std(shape: f64, scale: f64) -> f64 {
    lognorm_var(shape, scale).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn normal_cdf_known_points() {
        assert_abs_diff_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(normal_cdf(1.959963984540054), 0.975, epsilon = 1e-7);
        assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(normal_cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn normal_ppf_inverts_cdf() {
        for p in [0.01, 0.2, 0.5, 0.8, 0.99] {
            assert_abs_diff_eq!(normal_cdf(normal_ppf(p)), p, epsilon = 1e-7);
        }
        assert_eq!(normal_ppf(0.0), f64::NEG_INFINITY);
        assert_eq!(normal_ppf(1.0), f64::INFINITY);
        assert!(normal_ppf(1.5).is_nan());
    }

    #[test]
    fn normal_cdf_keeps_lower_tail() {
        assert_relative_eq!(normal_cdf(-9.0), 1.1285884059538e-19, max_relative = 1e-9);
        assert!(normal_cdf(-20.0) > 0.0);
    }

    #[test]
    fn normal_ppf_round_trips_small_probabilities() {
        for p in [1e-6, 1e-9, 1e-12, 1e-15] {
            assert_relative_eq!(normal_cdf(normal_ppf(p)), p, max_relative = 1e-9);
        }
        assert_relative_eq!(normal_ppf(1e-12), -7.034483825301131, max_relative = 1e-9);
    }

    #[test]
    fn lognorm_cdf_is_half_at_median() {
        assert_abs_diff_eq!(lognorm_cdf(3.0, 0.7, 3.0), 0.5, epsilon = 1e-12);
        assert_eq!(lognorm_cdf(-1.0, 0.7, 3.0), 0.0);
    }

    #[test]
    fn lognorm_moments() {
        // sigma = 1, mu = 0
        assert_abs_diff_eq!(lognorm_mean(1.0, 1.0), 0.5_f64.exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            lognorm_var(1.0, 1.0),
            (1.0_f64.exp() - 1.0) * 1.0_f64.exp(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(lognorm_median(1.0, 2.5), 2.5);
    }
}
