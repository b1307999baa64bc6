//! Display-width helpers

use unicode_width::UnicodeWidthChar;

/// Width of a character in terminal cells
///
/// Characters without a defined width (control characters) count as one
/// cell so that every written character advances the cursor.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(1)
}

/// Width of a string in terminal cells
pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Longest prefix of `s` that fits in `max_width` cells, with its width
///
/// Cuts on character boundaries only; a wide character that would straddle
/// the limit is left out.
pub fn truncate(s: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if width + w > max_width {
            return (&s[..idx], width);
        }
        width += w;
    }
    (s, width)
}

/// Truncate a string to fit within max_width, adding ellipsis if needed
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if str_width(s) <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let (head, _) = truncate(s, max_width - 3);
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10), ("hello", 5));
    }

    #[test]
    fn test_truncate_exact() {
        assert_eq!(truncate("hello", 5), ("hello", 5));
    }

    #[test]
    fn test_truncate_cuts_on_char_boundary() {
        assert_eq!(truncate("héllo", 2), ("hé", 2));
        // wide CJK character does not fit in the single remaining cell
        assert_eq!(truncate("a漢b", 2), ("a", 1));
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
        assert_eq!(truncate_with_ellipsis("hello", 2), "..");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_widths() {
        assert_eq!(str_width("abc"), 3);
        assert_eq!(str_width("漢字"), 4);
    }
}
