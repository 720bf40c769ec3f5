use std::fs;
use std::path::Path;

use crate::errors::PageSumError;

/// Default location of the system instruction sent with every summary request
pub const DEFAULT_INSTRUCTIONS_PATH: &str = "prompts/summary_instructions.txt";

/// Reads the system instruction text once at startup.
///
/// A missing, unreadable or blank file is a configuration error: the
/// summarizer has nothing to tell the model without it.
///
/// # Errors
///
/// Returns `ConfigurationError` if the file cannot be read or is blank.
pub fn load_instructions(path: impl AsRef<Path>) -> Result<String, PageSumError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        PageSumError::ConfigurationError(format!(
            "cannot read instructions file {}: {e}",
            path.display()
        ))
    })?;

    if text.trim().is_empty() {
        return Err(PageSumError::ConfigurationError(format!(
            "instructions file {} is empty",
            path.display()
        )));
    }

    Ok(text)
}

/// User message carrying the page URL and its extracted text
#[must_use]
pub fn build_user_message(source_url: &str, extracted_text: &str) -> String {
    format!("Here is the extracted text from the webpage {source_url}:\n{extracted_text}")
}
