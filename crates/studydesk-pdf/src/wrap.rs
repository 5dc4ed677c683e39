//! Approximate line wrapping by character count.

/// Average glyph advance as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Number of characters that fit in `max_width` at `font_size`, using the
/// average advance `font_size * 0.6` and rounding down.
pub fn chars_per_line(max_width: f32, font_size: f32) -> usize {
    let char_width = font_size * CHAR_WIDTH_FACTOR;
    if char_width <= 0.0 || max_width <= 0.0 {
        return 0;
    }
    (max_width / char_width).floor() as usize
}

/// Greedily pack whitespace-separated words into lines of at most
/// [`chars_per_line`] characters, joined by single spaces.
///
/// A word longer than the budget is never split; it gets a line to itself.
pub fn wrap(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let budget = chars_per_line(max_width, font_size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= budget {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
