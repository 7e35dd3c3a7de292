use contact_form_core_contracts::MockContactFormValidator;
use contact_form_models::values::FieldValues;
use contact_form_templates_contracts::MockTemplateService;

use crate::{validator::ContactFormValidatorImpl, ContactForm, ContactFormConfig};


type Sut = ContactForm<ContactFormValidatorImpl, MockTemplateService>;
type MockedSut = ContactForm<MockContactFormValidator, MockTemplateService>;

fn sut() -> Sut {
    ContactForm::new(
        ContactFormValidatorImpl::default(),
        MockTemplateService::new(),
        ContactFormConfig::default(),
    )
}

fn mocked(validator: MockContactFormValidator) -> MockedSut {
    ContactForm::new(validator, MockTemplateService::new(), ContactFormConfig::default())
}

fn values(first_name: &str, last_name: &str, email: &str, message: &str) -> FieldValues {
    FieldValues {
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        message: message.into(),
    }
}
