pub mod batch;
pub mod check;
pub mod health;
pub mod predict;

use gradeform::error::GfResult;
use gradeform::form::Form;

/// Parses a `FIELD=TEXT` pair. TEXT may be empty.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (id, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((id.to_string(), text.trim().to_string()))
}

/// Enters `text` into a freshly cleared field, either as keystrokes or as a
/// single paste.
pub fn enter_value(form: &mut Form, id: &str, text: &str, paste: bool) -> GfResult<()> {
    form.clear_field(id)?;
    if paste {
        form.input(id, text)?;
    } else {
        form.type_text(id, text)?;
    }
    form.blur(id)?;
    Ok(())
}
