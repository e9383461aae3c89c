use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal cells `text` occupies.
pub fn measure_text_width(text: &str) -> usize {
    text.width()
}

/// Longest prefix of `text` that fits in `max_width` cells.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Centres `text` in `width` cells, truncating when it does not fit.
/// The odd leftover cell goes to the right.
pub fn pad_center(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let used = measure_text_width(text);
    let left = (width - used) / 2;
    let right = width - used - left;
    let mut out = String::with_capacity(text.len() + left + right);
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(right));
    out
}

/// Pads `text` on the right to `width` cells. Wider text is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let used = measure_text_width(text);
    let mut out = text.to_string();
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

/// Integral values print without decimals, everything else with one.
pub fn format_value(value: f64) -> String {
    if value == value.floor() {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
