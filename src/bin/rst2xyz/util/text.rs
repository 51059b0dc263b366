/// Greedy word-wrap to the given width; always yields at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![String::new()];

    for word in text.split_whitespace() {
        let last = lines.last_mut().unwrap();
        if last.is_empty() {
            last.push_str(word);
        } else if last.len() + 1 + word.len() <= width {
            last.push(' ');
            last.push_str(word);
        } else {
            lines.push(word.to_string());
        }
    }

    lines
}

/// Shortens a string to at most `max_len` characters, ending in an
/// ellipsis when anything was cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
    format!("{kept}…")
}
