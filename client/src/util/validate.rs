//! Field-level form checks shared by the page validators.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Trimmed value, or `err` when blank.
///
/// # Errors
///
/// Returns `err` when `value` is empty after trimming.
pub fn required(value: &str, err: &'static str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(err) } else { Ok(trimmed.to_owned()) }
}

/// Loose structural email check: one `@`, non-empty local part, dotted domain.
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// Trimmed email, or an error for blank or malformed input.
///
/// # Errors
///
/// Returns a user-facing message when the email is blank or malformed.
pub fn email(value: &str) -> Result<String, &'static str> {
    let value = required(value, "Email is required.")?;
    if is_email(&value) { Ok(value) } else { Err("Enter a valid email address.") }
}

/// `None` for a blank optional field, otherwise the raw value.
///
/// Passwords are not trimmed.
pub fn optional_secret(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Parse a numeric route parameter.
pub fn parse_id(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok()
}
