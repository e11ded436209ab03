use thiserror::Error;

/// An inequality measure fell outside its open interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Gini not within (0, 1)")]
    Gini,
    #[error("Theil not within (0, 6.64)")]
    Theil,
}

/// The distribution parameters do not describe a single log-normal.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("must supply exactly one of gini or theil, got neither")]
    MissingMeasure,
    #[error("must supply exactly one of gini or theil, got both")]
    ConflictingMeasures,
    #[error("must declare value for {0}")]
    MissingField(&'static str),
    #[error("income must be positive and finite, got {0}")]
    InvalidIncome(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot build sampler: {0}")]
    Sampler(#[from] rand_distr::NormalError),
}

pub type Result<T> = std::result::Result<T, Error>;
