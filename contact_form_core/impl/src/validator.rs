use contact_form_core_contracts::ContactFormValidator;
use contact_form_models::{
    email::is_valid_email,
    field::Field,
    validation::{FieldError, ValidationErrors},
    values::FieldValues,
};
use contact_form_utils::trace_instrument;

#[derive(Debug, Clone, Default)]
pub struct ContactFormValidatorImpl {
    config: ContactFormValidatorConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFormValidatorConfig {
    pub first_name_min_length: usize,
}

impl Default for ContactFormValidatorConfig {
    fn default() -> Self {
        Self {
            first_name_min_length: 5,
        }
    }
}

impl ContactFormValidatorImpl {
    pub fn new(config: ContactFormValidatorConfig) -> Self {
        Self { config }
    }
}

impl ContactFormValidator for ContactFormValidatorImpl {
    #[trace_instrument(skip(self))]
    fn validate(&self, values: &FieldValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        let first_name = values.get(Field::FirstName);
        if first_name.is_empty() {
            errors.add(FieldError::Required(Field::FirstName));
        } else if first_name.chars().count() < self.config.first_name_min_length {
            errors.add(FieldError::TooShort(
                Field::FirstName,
                self.config.first_name_min_length,
            ));
        }

        if values.get(Field::LastName).is_empty() {
            errors.add(FieldError::Required(Field::LastName));
        }

        let email = values.get(Field::Email);
        if email.is_empty() {
            errors.add(FieldError::Required(Field::Email));
        } else if !is_valid_email(email) {
            errors.add(FieldError::InvalidEmail(Field::Email));
        }

        errors
    }
}
