use contact_form_models::{validation::ValidationErrors, values::FieldValues};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormValidator: Send + Sync + 'static {
    /// Checks every governed field of `values` and returns all errors found,
    /// at most one per field.
    fn validate(&self, values: &FieldValues) -> ValidationErrors;
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("The form contains invalid fields.")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFormValidator {
    pub fn with_validate(mut self, values: FieldValues, result: ValidationErrors) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(values))
            .return_once(|_| result);
        self
    }
}
