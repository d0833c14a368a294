const MAX_VISIBLE_CHARS: usize = 80;

/// Shortens transcript text for log lines. Counts characters, not bytes,
/// so multi-byte scripts are never split.
pub fn sanitize_transcript(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return trimmed.replace('\n', " ");
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{}... ({} chars total)", visible.replace('\n', " "), total)
}
