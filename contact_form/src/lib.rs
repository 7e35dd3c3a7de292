use contact_form_config::Config;
use contact_form_core_impl::{
    validator::{ContactFormValidatorConfig, ContactFormValidatorImpl},
    ContactForm, ContactFormConfig,
};
use contact_form_templates_impl::TemplateServiceImpl;

pub mod commands;

pub type ContactFormImpl = ContactForm<ContactFormValidatorImpl, TemplateServiceImpl>;

/// Mounts a fresh contact form wired to the real validator and templates.
pub fn build_form(config: &Config) -> ContactFormImpl {
    let validator = ContactFormValidatorImpl::new(ContactFormValidatorConfig {
        first_name_min_length: config.validation.first_name_min_length.get(),
    });

    ContactForm::new(
        validator,
        TemplateServiceImpl::new(),
        ContactFormConfig {
            clear_on_submit: config.form.clear_on_submit,
        },
    )
}
