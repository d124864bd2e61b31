use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::FieldError;
use crate::rules::{self, MAX_NAME_LENGTH};
use crate::validate::Validate;

/// Form contract for creating or updating an author.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorFormContract {
    #[serde(default)]
    pub name: String,
    /// Required; absence is reported as a violation, not a binding error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Date>,
}

impl Validate for AuthorFormContract {
    const NAME: &'static str = "AuthorForm";

    fn violations(&self) -> Vec<FieldError> {
        let mut violations = Vec::new();
        if let Err(violation) = rules::validate_length("name", &self.name, MAX_NAME_LENGTH) {
            violations.push(violation);
        }
        if let Err(violation) = rules::validate_required("birthDate", &self.birth_date) {
            violations.push(violation);
        }
        violations
    }
}
