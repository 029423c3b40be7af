/// First `max_chars` characters of `text`, ending with an ellipsis when cut.
///
/// Cuts on a character boundary and drops trailing whitespace before the ellipsis.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();

    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}
