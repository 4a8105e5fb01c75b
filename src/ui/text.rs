//! Display-width aware string helpers for building document rows.

use ratatui::text::Span;

/// Terminal column width of `s`.
pub fn width(s: &str) -> usize {
    Span::raw(s).width()
}

/// Greedy word wrap to at most `max` columns per line.  Words longer than
/// `max` are left on their own line rather than split.
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in text.split_whitespace() {
        let w = width(word);
        if current_w > 0 && current_w + 1 + w > max {
            lines.push(std::mem::take(&mut current));
            current_w = 0;
        }
        if current_w > 0 {
            current.push(' ');
            current_w += 1;
        }
        current.push_str(word);
        current_w += w;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pad with spaces on the right up to `target` columns.
pub fn pad_right(s: &str, target: usize) -> String {
    let w = width(s);
    format!("{s}{}", " ".repeat(target.saturating_sub(w)))
}

/// Left padding that centers `s` within `total` columns.
pub fn center_pad(s: &str, total: usize) -> usize {
    total.saturating_sub(width(s)) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap("Live folk music and Ghoomar dance performances.", 16);
        assert_eq!(lines, vec!["Live folk music", "and Ghoomar", "dance", "performances."]);
    }

    #[test]
    fn long_word_gets_its_own_line() {
        assert_eq!(wrap("a supercalifragilistic b", 5), vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn width_counts_wide_glyphs() {
        assert_eq!(width("₹18,000"), 7);
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(center_pad("abcd", 10), 3);
    }
}
