//! Parameter sets for [`LogNormal`](crate::lognormal::LogNormal).
//!
//! A [`LogNormalData`] is a small value object. Updating it returns a new
//! instance unless the caller goes through the explicit `_mut` entry points.

use crate::error::ValidationError;

/// A single named parameter, as supplied at construction or query time.
///
/// `None` payloads are meaningful: with overwrite semantics they clear the
/// field, e.g. `Field::Gini(None)` to query a gini baseline by theil instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    /// Income level.
    Inc(Option<f64>),
    /// Whether `inc` is the mean (true) or the median (false).
    Mean(Option<bool>),
    Gini(Option<f64>),
    Theil(Option<f64>),
}

impl Field {
    pub fn inc(value: f64) -> Self {
        Field::Inc(Some(value))
    }

    pub fn mean(value: bool) -> Self {
        Field::Mean(Some(value))
    }

    pub fn gini(value: f64) -> Self {
        Field::Gini(Some(value))
    }

    pub fn theil(value: f64) -> Self {
        Field::Theil(Some(value))
    }
}

const DEFAULTS: [Field; 4] = [
    Field::Inc(Some(1.0)),
    Field::Mean(Some(true)),
    Field::Gini(None),
    Field::Theil(None),
];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogNormalData {
    inc: Option<f64>,
    mean: Option<bool>,
    gini: Option<f64>,
    theil: Option<f64>,
}

impl LogNormalData {
    pub fn new(fields: &[Field]) -> Self {
        let mut data = Self::default();
        data.update_mut(fields, true);
        data
    }

    pub fn inc(&self) -> Option<f64> {
        self.inc
    }

    pub fn mean(&self) -> Option<bool> {
        self.mean
    }

    pub fn gini(&self) -> Option<f64> {
        self.gini
    }

    pub fn theil(&self) -> Option<f64> {
        self.theil
    }

    pub fn with_inc(self, inc: f64) -> Self {
        self.update(&[Field::inc(inc)], true)
    }

    pub fn with_mean(self, mean: bool) -> Self {
        self.update(&[Field::mean(mean)], true)
    }

    pub fn with_gini(self, gini: f64) -> Self {
        self.update(&[Field::gini(gini)], true)
    }

    pub fn with_theil(self, theil: f64) -> Self {
        self.update(&[Field::theil(theil)], true)
    }

    /// Returns a copy with `fields` applied, leaving `self` untouched.
    ///
    /// With `overwrite` false a field is only written where the current value
    /// is unset.
    pub fn update(&self, fields: &[Field], overwrite: bool) -> Self {
        let mut data = *self;
        data.update_mut(fields, overwrite);
        data
    }

    /// In-place variant of [`update`](Self::update).
    pub fn update_mut(&mut self, fields: &[Field], overwrite: bool) -> &mut Self {
        for field in fields {
            match *field {
                Field::Inc(v) => assign(&mut self.inc, v, overwrite),
                Field::Mean(v) => assign(&mut self.mean, v, overwrite),
                Field::Gini(v) => assign(&mut self.gini, v, overwrite),
                Field::Theil(v) => assign(&mut self.theil, v, overwrite),
            }
        }
        self
    }

    /// Fills unset fields with `inc = 1`, `mean = true`.
    pub fn add_defaults(&self) -> Self {
        self.update(&DEFAULTS, false)
    }

    pub fn add_defaults_mut(&mut self) -> &mut Self {
        self.update_mut(&DEFAULTS, false)
    }

    /// Checks that exactly one of gini/theil is set and that `inc` and `mean`
    /// are declared.
    pub fn check(&self) -> Result<&Self, ValidationError> {
        self.resolve().map(|_| self)
    }

    /// Like [`check`](Self::check), but hands back the validated values.
    pub fn resolve(&self) -> Result<Resolved, ValidationError> {
        let measure = match (self.gini, self.theil) {
            (None, None) => return Err(ValidationError::MissingMeasure),
            (Some(_), Some(_)) => return Err(ValidationError::ConflictingMeasures),
            (Some(gini), None) => Inequality::Gini(gini),
            (None, Some(theil)) => Inequality::Theil(theil),
        };

        let inc = self.inc.ok_or(ValidationError::MissingField("inc"))?;
        if !(inc.is_finite() && inc > 0.0) {
            return Err(ValidationError::InvalidIncome(inc));
        }
        let mean = self.mean.ok_or(ValidationError::MissingField("mean"))?;

        Ok(Resolved { inc, mean, measure })
    }
}

/// The one inequality measure a parameter set carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inequality {
    Gini(f64),
    Theil(f64),
}

/// A parameter set that passed [`LogNormalData::check`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub inc: f64,
    pub mean: bool,
    pub measure: Inequality,
}

impl From<&[Field]> for LogNormalData {
    fn from(fields: &[Field]) -> Self {
        Self::new(fields)
    }
}

fn assign<T>(slot: &mut Option<T>, value: Option<T>, overwrite: bool) {
    if overwrite || slot.is_none() {
        *slot = value;
    }
}
