use trawl_compiler::Delimiter;

/// Text between the first `start` match and the following `end` match.
///
/// An empty `end` runs to the end of `text`. Returns `None` when either
/// delimiter is not found.
pub fn extract<'t>(start: &Delimiter, end: &Delimiter, text: &'t str) -> Option<&'t str> {
    let opening = start.find_at(text, 0)?;
    if end.is_empty() {
        return Some(&text[opening.end..]);
    }
    let closing = end.find_at(text, opening.end)?;
    Some(&text[opening.end..closing.start])
}
