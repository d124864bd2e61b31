use crate::error::{FieldError, RequestError, RequestResult};

/// Declarative validation of a form contract.
///
/// The host pipeline resolves the implementation by contract type and invokes
/// it during request binding. Every rule is evaluated; all violations are
/// reported at once as a single [`RequestError::BadRequest`].
pub trait Validate {
    /// Contract name reported in violation aggregates.
    const NAME: &'static str;

    /// Evaluates every field rule, returning all violations.
    fn violations(&self) -> Vec<FieldError>;

    /// # Errors
    ///
    /// Returns [`RequestError::BadRequest`] carrying every violated rule.
    fn validate(&self) -> RequestResult<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(RequestError::BadRequest {
                name: Self::NAME.into(),
                violations,
            })
        }
    }
}
