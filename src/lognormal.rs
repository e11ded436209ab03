use rand::Rng;
use rand_distr::Distribution;
use tracing::debug;

use crate::data::{Field, Inequality, LogNormalData, Resolved};
use crate::error::Result;
use crate::ineq::{check_gini, check_theil, gini_to_std, theil_to_std, Elementwise};
use crate::statistics;

/// Log-normal parameters in `scipy.stats.lognorm` form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeScale {
    /// Standard deviation of `ln X`.
    pub shape: f64,
    /// Median of `X`, i.e. `exp(mu)`.
    pub scale: f64,
}

/// A log-normal income distribution described by an income level and one
/// inequality measure.
///
/// Nothing is validated at construction. Every query layers its overrides on
/// top of the baseline, fills defaults and checks the result, so a partially
/// specified baseline is fine as long as each query completes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogNormal {
    init_data: LogNormalData,
}

impl From<LogNormalData> for LogNormal {
    fn from(init_data: LogNormalData) -> Self {
        Self { init_data }
    }
}

impl LogNormal {
    pub fn new(fields: &[Field]) -> Self {
        LogNormalData::new(fields).into()
    }

    pub fn init_data(&self) -> &LogNormalData {
        &self.init_data
    }

    /// Mutable access to the baseline, for callers that want changes to
    /// persist across queries.
    pub fn init_data_mut(&mut self) -> &mut LogNormalData {
        &mut self.init_data
    }

    /// Derives `(shape, scale)` for the baseline with `overrides` applied.
    ///
    /// If `inc` is the mean it is shifted to the median by `exp(-shape²/2)`.
    pub fn params(&self, overrides: &[Field]) -> Result<ShapeScale> {
        let Resolved { inc, mean, measure } = self
            .init_data
            .update(overrides, true)
            .add_defaults()
            .resolve()?;

        let shape = match measure {
            Inequality::Theil(theil) => {
                check_theil(&theil)?;
                theil_to_std(theil)
            }
            Inequality::Gini(gini) => {
                check_gini(&gini)?;
                gini_to_std(gini)
            }
        };

        let scale = if mean {
            (inc.ln() - shape * shape / 2.0).exp()
        } else {
            inc
        };

        debug!(shape, scale, inc, mean, "derived log-normal parameters");
        Ok(ShapeScale { shape, scale })
    }

    pub fn cdf<T: Elementwise>(&self, x: T, overrides: &[Field]) -> Result<T> {
        let ShapeScale { shape, scale } = self.params(overrides)?;
        Ok(x.map(|x| statistics::lognorm_cdf(x, shape, scale)))
    }

    /// Evaluates the CDF, exactly like [`cdf`](Self::cdf).
    ///
    /// Kept for callers that depend on this behaviour; use
    /// [`quantile`](Self::quantile) for the inverse CDF.
    pub fn ppf<T: Elementwise>(&self, x: T, overrides: &[Field]) -> Result<T> {
        self.cdf(x, overrides)
    }

    /// Inverse CDF: the income below which a share `p` of the population falls.
    pub fn quantile<T: Elementwise>(&self, p: T, overrides: &[Field]) -> Result<T> {
        let ShapeScale { shape, scale } = self.params(overrides)?;
        Ok(p.map(|p| statistics::lognorm_ppf(p, shape, scale)))
    }

    pub fn pdf<T: Elementwise>(&self, x: T, overrides: &[Field]) -> Result<T> {
        let ShapeScale { shape, scale } = self.params(overrides)?;
        Ok(x.map(|x| statistics::lognorm_pdf(x, shape, scale)))
    }

    /// Lorenz curve, `L(x) = Φ(Φ⁻¹(x) − σ)`, for population shares in [0, 1].
    pub fn lorenz<T: Elementwise>(&self, x: T, overrides: &[Field]) -> Result<T> {
        let ShapeScale { shape, .. } = self.params(overrides)?;
        Ok(x.map(|x| statistics::normal_cdf(statistics::normal_ppf(x) - shape)))
    }

    pub fn mean(&self, overrides: &[Field]) -> Result<f64> {
        let ShapeScale { shape, scale } = self.params(overrides)?;
        Ok(statistics::lognorm_mean(shape, scale))
    }

    pub fn median(&self, overrides: &[Field]) -> Result<f64> {
        let ShapeScale { shape, scale } = self.params(overrides)?;
        Ok(statistics::lognorm_median(shape, scale))
    }

    pub fn var(&self, overrides: &[Field]) -> Result<f64> {
        let ShapeScale { shape, scale } = self.params(overrides)?;
        Ok(statistics::lognorm_var(shape, scale))
    }

    pub fn std(&self, overrides: &[Field]) -> Result<f64> {
        let ShapeScale { shape, scale } = self.params(overrides)?;
        Ok(statistics::lognorm_std(shape, scale))
    }

    /// A `rand_distr` sampler for the derived distribution.
    pub fn sampler(&self, overrides: &[Field]) -> Result<rand_distr::LogNormal<f64>> {
        let ShapeScale { shape, scale } = self.params(overrides)?;
        Ok(rand_distr::LogNormal::new(scale.ln(), shape)?)
    }

    /// Draws `n` incomes from the derived distribution.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
        overrides: &[Field],
    ) -> Result<Vec<f64>> {
        let sampler = self.sampler(overrides)?;
        Ok((0..n).map(|_| sampler.sample(rng)).collect())
    }
}
