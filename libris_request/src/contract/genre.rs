use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::rules::{self, MAX_NAME_LENGTH};
use crate::validate::Validate;

/// Form contract for creating or updating a genre.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreFormContract {
    #[serde(default)]
    pub name: String,
}

impl Validate for GenreFormContract {
    const NAME: &'static str = "GenreForm";

    fn violations(&self) -> Vec<FieldError> {
        let mut violations = Vec::new();
        if let Err(violation) = rules::validate_length("name", &self.name, MAX_NAME_LENGTH) {
            violations.push(violation);
        }
        violations
    }
}
