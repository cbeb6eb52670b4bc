const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes user-supplied text (questions, document text) for logging.
/// Document text can run to hundreds of pages; only a short prefix is kept.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    if trimmed.len() <= MAX_VISIBLE_LENGTH {
        return trimmed.to_string();
    }

    let cut = trimmed
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= MAX_VISIBLE_LENGTH)
        .last()
        .unwrap_or(0);

    format!("{}... ({} chars total)", &trimmed[..cut], trimmed.len())
}
