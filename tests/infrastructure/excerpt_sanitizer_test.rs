use mindelo::infrastructure::observability::sanitize_excerpt;

#[test]
fn given_empty_text_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_excerpt("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returned_unchanged() {
    assert_eq!(sanitize_excerpt("Capital call notice"), "Capital call notice");
}

#[test]
fn given_long_text_when_sanitizing_then_truncated_with_length_note() {
    let text = "a".repeat(500);
    let sanitized = sanitize_excerpt(&text);

    assert!(sanitized.contains("500 chars total"));
    assert!(sanitized.len() < text.len());
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacted() {
    let sanitized = sanitize_excerpt("Authorization: Bearer sk-secret-value rest");

    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(!sanitized.contains("sk-secret-value"));
}
