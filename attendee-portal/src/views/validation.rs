use lazy_regex::regex_is_match;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Check that `value` holds something other than whitespace
pub fn required(label: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(label));
    }
    Ok(())
}

/// Check that `value` is present and shaped like an email address. Surrounding whitespace is
/// not accepted since values are sent to the backend as entered.
pub fn email(label: &'static str, value: &str) -> Result<(), ValidationError> {
    required(label, value)?;
    if !is_email_shaped(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn is_email_shaped(value: &str) -> bool {
    regex_is_match!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        value
    )
}
