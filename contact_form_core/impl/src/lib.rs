use std::collections::BTreeSet;

use contact_form_core_contracts::{ContactFormSubmitError, ContactFormValidator};
use contact_form_models::{
    field::Field, snapshot::SubmittedSnapshot, validation::ValidationErrors, values::FieldValues,
};
use contact_form_templates_contracts::{
    ContactFormTemplate, FieldTemplate, SubmittedTemplate, TemplateService,
};
use tracing::debug;

pub mod validator;

#[cfg(test)]
mod tests;

pub const HEADER: &str = "Contact Form";

/// The contact form component.
///
/// Owns the live field values and re-validates them on every change. Only
/// errors of fields the user has touched are displayed, and a submit touches
/// every governed field. A successful submit captures a [`SubmittedSnapshot`]
/// which stays displayed until the next successful submit replaces it.
#[derive(Debug)]
pub struct ContactForm<Validator, Templates> {
    validator: Validator,
    templates: Templates,
    config: ContactFormConfig,
    values: FieldValues,
    touched: BTreeSet<Field>,
    errors: ValidationErrors,
    snapshot: Option<SubmittedSnapshot>,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFormConfig {
    /// Reset the inputs after a successful submit.
    pub clear_on_submit: bool,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            clear_on_submit: true,
        }
    }
}

impl<Validator, Templates> ContactForm<Validator, Templates>
where
    Validator: ContactFormValidator,
    Templates: TemplateService,
{
    pub fn new(validator: Validator, templates: Templates, config: ContactFormConfig) -> Self {
        Self {
            validator,
            templates,
            config,
            values: Default::default(),
            touched: Default::default(),
            errors: Default::default(),
            snapshot: None,
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// The errors currently displayed.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn snapshot(&self) -> Option<&SubmittedSnapshot> {
        self.snapshot.as_ref()
    }

    /// Replaces the value of `field`.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.changed(field);
    }

    /// Appends `text` one character at a time, the way a user types it.
    pub fn type_text(&mut self, field: Field, text: &str) {
        for c in text.chars() {
            self.values.get_mut(field).push(c);
            self.changed(field);
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.change(field, String::new());
    }

    /// Validates every governed field and, if none of them has an error,
    /// captures the current values as the new snapshot.
    ///
    /// A rejected submit leaves the previous snapshot untouched.
    pub fn submit(&mut self) -> Result<&SubmittedSnapshot, ContactFormSubmitError> {
        self.touched
            .extend(Field::ALL.into_iter().filter(|field| field.is_governed()));
        self.revalidate();

        if !self.errors.is_empty() {
            debug!(errors = ?self.errors, "rejected submit");
            return Err(ContactFormSubmitError::Invalid(self.errors.clone()));
        }

        let snapshot = SubmittedSnapshot::try_from(&self.values).map_err(anyhow::Error::from)?;
        debug!(?snapshot, "accepted submit");

        if self.config.clear_on_submit {
            self.values = Default::default();
            self.touched.clear();
            self.errors = Default::default();
        }

        Ok(&*self.snapshot.insert(snapshot))
    }

    /// Builds the view of the current state.
    pub fn view(&self) -> ContactFormTemplate {
        ContactFormTemplate {
            header: HEADER.into(),
            fields: Field::ALL
                .into_iter()
                .map(|field| FieldTemplate {
                    name: field.name().into(),
                    label: field.label().into(),
                    value: self.values.get(field).into(),
                    error: self.errors.get(field).map(ToString::to_string),
                })
                .collect(),
            submitted: self.snapshot.as_ref().map(present),
        }
    }

    pub fn render(&self) -> anyhow::Result<String> {
        self.templates.render(&self.view())
    }

    fn changed(&mut self, field: Field) {
        if !field.is_governed() {
            return;
        }

        self.touched.insert(field);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        let mut errors = self.validator.validate(&self.values);
        errors.retain(|field| self.touched.contains(&field));
        self.errors = errors;
    }
}

fn present(snapshot: &SubmittedSnapshot) -> SubmittedTemplate {
    SubmittedTemplate {
        first_name: snapshot.first_name.as_str().into(),
        last_name: snapshot.last_name.as_str().into(),
        email: snapshot.email.as_str().into(),
        message: snapshot.message.as_deref().map(Into::into),
    }
}
