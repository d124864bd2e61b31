use std::fmt::Display;
use std::slice;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid `{name}` request")]
    BadRequest {
        name: String,
        violations: Vec<FieldError>,
    },
    #[error(transparent)]
    Field(FieldError),
}

pub type RequestResult<T> = Result<T, RequestError>;

/// A rule violation scoped to a single contract field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field `{field}` error: `{error}`")]
pub struct FieldError {
    pub field: String,
    pub error: CommonError,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("no value provided for required field")]
    RequiredFieldMissing,
    #[error("value of length {actual} exceeds the maximum length of {max}")]
    LengthExceeded { max: usize, actual: usize },
}

/// Transport form of a single violation, aggregated by the host pipeline
/// into its bad-request report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field: String,
    pub description: String,
}

impl RequestError {
    #[must_use]
    pub fn bad_request<N, V, F>(name: N, violations: V) -> Self
    where
        N: Display,
        V: IntoIterator<Item = (F, CommonError)>,
        F: Display,
    {
        Self::BadRequest {
            name: name.to_string(),
            violations: violations
                .into_iter()
                .map(|(field, error)| FieldError {
                    field: field.to_string(),
                    error,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn field<F: Display>(field: F, error: CommonError) -> Self {
        FieldError {
            field: field.to_string(),
            error,
        }
        .into()
    }

    /// Promotes a field-scoped error into a named bad-request aggregate.
    #[must_use]
    pub fn wrap_request<N: Display>(self, name: N) -> Self {
        match self {
            Self::Field(error) => Self::BadRequest {
                name: name.to_string(),
                violations: vec![error],
            },
            err => err,
        }
    }

    pub fn violations(&self) -> &[FieldError] {
        match self {
            Self::BadRequest { violations, .. } => violations,
            Self::Field(error) => slice::from_ref(error),
        }
    }

    /// Violations in the transport form consumed by the host pipeline.
    pub fn field_violations(&self) -> Vec<FieldViolation> {
        self.violations()
            .iter()
            .map(|error| FieldViolation {
                field: error.field.clone(),
                description: error.error.to_string(),
            })
            .collect()
    }
}

impl From<FieldError> for RequestError {
    fn from(err: FieldError) -> Self {
        RequestError::Field(err)
    }
}
