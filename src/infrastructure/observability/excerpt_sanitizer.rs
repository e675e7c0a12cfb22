const MAX_VISIBLE_LENGTH: usize = 120;

/// Sanitizes instruction or document text for safe logging: bounded length,
/// credentials redacted. Uploaded documents routinely contain bank details,
/// so full text never reaches the logs.
pub fn sanitize_excerpt(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let cut = trimmed
        .char_indices()
        .nth(MAX_VISIBLE_LENGTH)
        .map(|(offset, _)| offset);
    let sanitized = match cut {
        Some(offset) => format!("{}... ({} chars total)", &trimmed[..offset], trimmed.len()),
        None => trimmed.to_string(),
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
