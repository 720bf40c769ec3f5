use pagesum::errors::PageSumError;
use pagesum::prompt::{DEFAULT_INSTRUCTIONS_PATH, build_user_message, load_instructions};

fn temp_file(contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("pagesum-prompt-{}.txt", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_build_user_message_embeds_url_and_text() {
    let message = build_user_message("https://example.com", "Line one\nLine two");
    assert_eq!(
        message,
        "Here is the extracted text from the webpage https://example.com:\nLine one\nLine two"
    );
}

#[test]
fn test_build_user_message_with_empty_text() {
    let message = build_user_message("https://example.com", "");
    assert!(message.ends_with(":\n"));
}

#[test]
fn test_load_instructions_reads_file_verbatim() {
    let path = temp_file("Summarize as HTML.\n");
    assert_eq!(load_instructions(&path).unwrap(), "Summarize as HTML.\n");
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_load_instructions_missing_file_is_configuration_error() {
    let result = load_instructions("/definitely/not/here/instructions.txt");
    assert!(matches!(result, Err(PageSumError::ConfigurationError(_))));
}

#[test]
fn test_load_instructions_blank_file_is_configuration_error() {
    let path = temp_file("  \n\t\n");
    let result = load_instructions(&path);
    assert!(matches!(result, Err(PageSumError::ConfigurationError(_))));
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_bundled_instructions_load() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_INSTRUCTIONS_PATH);
    let text = load_instructions(path).unwrap();
    assert!(text.contains("HTML"));
}
