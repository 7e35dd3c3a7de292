use std::io::Write;

use contact_form_config::Config;

use crate::build_form;

/// Write the markup of a freshly mounted form to `out`.
pub fn render(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let form = build_form(config);
    writeln!(out, "{}", form.render()?)?;
    Ok(())
}
