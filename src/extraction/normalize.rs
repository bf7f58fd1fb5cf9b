//! Character width normalization.

/// Maps full-width ASCII variants (U+FF01..=U+FF5E) and the ideographic
/// space to their ASCII counterparts. Everything else is left untouched.
///
/// ```
/// use pino_expense::extraction::normalize_width;
///
/// assert_eq!(normalize_width("１２．５ｋｍ（月）"), "12.5km(月)");
/// ```
pub fn normalize_width(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3000}' => ' ',
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_digits_and_units() {
        assert_eq!(normalize_width("３．４ＫＭ"), "3.4KM");
    }

    #[test]
    fn test_ideographic_space_becomes_ascii() {
        assert_eq!(normalize_width("田中\u{3000}1/5"), "田中 1/5");
    }

    #[test]
    fn test_kana_and_kanji_untouched() {
        assert_eq!(normalize_width("渋谷→新宿【ピノ】"), "渋谷→新宿【ピノ】");
    }
}
