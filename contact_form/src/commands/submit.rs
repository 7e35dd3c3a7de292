use std::io::Write;

use anyhow::bail;
use clap::Args;
use contact_form_config::Config;
use contact_form_core_contracts::ContactFormSubmitError;
use contact_form_models::field::Field;
use tracing::{info, warn};

use crate::build_form;

#[derive(Debug, Default, Args)]
pub struct SubmitArgs {
    /// Value typed into the first name input
    #[arg(long, default_value = "")]
    pub first_name: String,
    /// Value typed into the last name input
    #[arg(long, default_value = "")]
    pub last_name: String,
    /// Value typed into the email input
    #[arg(long, default_value = "")]
    pub email: String,
    /// Value typed into the message input
    #[arg(long, default_value = "")]
    pub message: String,
}

impl SubmitArgs {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Type the given values into a fresh form, press submit and write the
/// resulting markup to `out`. A rejected submit still writes the markup but
/// returns an error.
pub fn submit(config: &Config, args: SubmitArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut form = build_form(config);

    for field in Field::ALL {
        form.type_text(field, args.value(field));
    }

    let result = form.submit().map(|_| ());
    writeln!(out, "{}", form.render()?)?;

    match result {
        Ok(()) => {
            info!("Form submitted");
            Ok(())
        }
        Err(ContactFormSubmitError::Invalid(errors)) => {
            for error in errors.iter() {
                warn!(field = %error.field(), "{error}");
            }
            bail!("Form has {} invalid field(s)", errors.len())
        }
        Err(ContactFormSubmitError::Other(err)) => Err(err),
    }
}
