use thiserror::Error;

/// Failures surfaced by an evaluation. An evaluation either ranks every alternative or returns
/// one of these; partial results are never produced.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("alternative `{alternative}` is missing a value for `{criterion}`")]
    MissingValue {
        alternative: String,
        criterion: &'static str,
    },

    #[error("alternative `{alternative}` has a non-finite value for `{criterion}`: {value}")]
    NonFinite {
        alternative: String,
        criterion: &'static str,
        value: f64,
    },

    #[error("weight for `{criterion}` must be finite and non-negative, got {value}")]
    InvalidWeight { criterion: &'static str, value: f64 },

    #[error("norm of the `{criterion}` column is not finite")]
    DegenerateCriterion { criterion: &'static str },

    #[error("closeness of alternative `{alternative}` is not a finite value in [0, 1]")]
    Degenerate { alternative: String },
}

pub type Result<T> = std::result::Result<T, Error>;
