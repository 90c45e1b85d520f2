use crate::error::SaveError;

pub const MAX_CATEGORY_LENGTH: usize = 100;

/// Validate a category name before it is used as a file stem.
///
/// Names come from the remote listing, so anything that could escape the
/// output directory or produce an unusable file name is rejected: empty
/// names, `.` and `..`, path separators, control characters, and names over
/// [`MAX_CATEGORY_LENGTH`] bytes. Valid names are returned unchanged.
pub fn validate_category_name(input: &str) -> Result<&str, SaveError> {
    if input.is_empty() {
        return Err(SaveError::InvalidInput(
            "category name is empty".to_string(),
        ));
    }
    if input.len() > MAX_CATEGORY_LENGTH {
        return Err(SaveError::InvalidInput(format!(
            "category name exceeds maximum length of {} bytes",
            MAX_CATEGORY_LENGTH
        )));
    }
    if input == "." || input == ".." {
        return Err(SaveError::InvalidInput(format!(
            "category name '{}' is not a valid file name",
            input
        )));
    }
    if input
        .chars()
        .any(|c| c == '/' || c == '\\' || c.is_control())
    {
        return Err(SaveError::InvalidInput(format!(
            "category name '{}' contains path separators or control characters",
            input.escape_default()
        )));
    }
    Ok(input)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
