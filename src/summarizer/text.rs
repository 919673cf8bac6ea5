use crate::models::ContentPart;

/// Join the non-empty text fragments of `parts` with newlines, trimmed
pub fn extract_text(parts: &[ContentPart]) -> String {
    let fragments: Vec<&str> =
        parts.iter().filter_map(ContentPart::text).filter(|text| !text.is_empty()).collect();

    // Pre-allocate: fragment lengths plus one newline between each pair
    let total_len: usize = fragments.iter().map(|s| s.len()).sum();
    let mut joined = String::with_capacity(total_len + fragments.len().saturating_sub(1));
    for (index, fragment) in fragments.iter().enumerate() {
        if index > 0 {
            joined.push('\n');
        }
        joined.push_str(fragment);
    }

    let trimmed = joined.trim();
    if trimmed.len() == joined.len() { joined } else { trimmed.to_string() }
}
