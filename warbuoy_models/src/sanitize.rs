/// Trims `value` and clamps it to at most `max` characters.
///
/// Whitespace exposed at the end by the clamp is trimmed as well, so applying
/// this function to its own output never changes it.
pub fn bounded(value: String, max: usize) -> String {
    let trimmed = value.trim();
    let clamped = match trimmed.char_indices().nth(max) {
        Some((end, _)) => trimmed[..end].trim_end(),
        None => trimmed,
    };
    if clamped.len() == value.len() {
        value
    } else {
        clamped.to_owned()
    }
}
