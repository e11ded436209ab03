//! Inequality conversions and log-normal income distributions.
//!
//! - [`ineq`]: closed-form conversions between the Gini coefficient, the
//!   Theil index and the standard deviation of log-income.
//! - [`data`]: the mergeable parameter set behind a distribution.
//! - [`lognormal`]: [`LogNormal`], which derives shape and scale from an income
//!   level and one inequality measure and answers distribution queries.
//! - [`statistics`]: normal and log-normal primitives.

pub mod data;
pub mod error;
pub mod ineq;
pub mod lognormal;
pub mod statistics;

pub use data::{Field, Inequality, LogNormalData, Resolved};
pub use error::{DomainError, Error, Result, ValidationError};
pub use ineq::{
    convert, gini_of_sample, gini_to_std, gini_to_theil, std_to_gini, std_to_theil,
    theil_to_gini, theil_to_std, Elementwise, Measure, MAX_THEIL, THEIL_EMPIRICAL_CONSTANTS,
};
pub use lognormal::{LogNormal, ShapeScale};
