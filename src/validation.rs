use crate::domain::contact::DEFAULT_CATEGORY;
use crate::errors::AppError;

/// Trims `value` and rejects it when nothing is left.
/// `label` names the field in the error message.
pub fn require_field(label: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{label} must not be empty")));
    }
    Ok(value.to_string())
}

/// Blank categories fall back to the default label.
pub fn normalize_category(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        value.to_string()
    }
}
