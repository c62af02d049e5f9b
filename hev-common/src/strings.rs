//! Whitespace trimming and blank detection for borrowed literals.
//!
//! Whitespace here is the C-locale `isspace` set only: space, `\t`, `\n`,
//! `\v`, `\f`, `\r`. No Unicode whitespace is recognized.

/// True for the six ASCII whitespace bytes, including vertical tab.
#[inline]
#[must_use]
pub const fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[inline]
fn is_c_space_char(c: char) -> bool {
    c.is_ascii() && is_c_space(c as u8)
}

/// Strip leading and trailing ASCII whitespace.
///
/// Returns a sub-slice of the input, never a copy. An absent input and an
/// all-whitespace input both yield `""`.
#[must_use]
pub fn trim<'a>(text: impl Into<Option<&'a str>>) -> &'a str {
    match text.into() {
        Some(text) => text.trim_matches(is_c_space_char),
        None => "",
    }
}

/// True for an absent, empty, or all-whitespace input.
#[must_use]
pub fn is_blank<'a>(text: impl Into<Option<&'a str>>) -> bool {
    text.into().is_none_or(|text| text.bytes().all(is_c_space))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_both_ends() {
        assert_eq!(trim(" a b "), "a b");
        assert_eq!(trim("\t\r\nvalue\x0b\x0c"), "value");
        assert_eq!(trim("inner  space"), "inner  space");
    }

    #[test]
    fn test_trim_degenerate_inputs() {
        assert_eq!(trim("   "), "");
        assert_eq!(trim(""), "");
        assert_eq!(trim(None), "");
    }

    #[test]
    fn test_trim_returns_subslice() {
        let owned = String::from("  port  ");
        let trimmed = trim(owned.as_str());
        let base = owned.as_ptr() as usize;
        assert_eq!(trimmed.as_ptr() as usize, base + 2);
        assert_eq!(trimmed.len(), 4);
    }

    #[test]
    fn test_trim_leaves_unicode_whitespace() {
        // U+00A0 is not part of the C whitespace set.
        assert_eq!(trim("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(is_blank("\x0b\x0c\r\n"));
        assert!(is_blank(None));
        assert!(!is_blank("x"));
        assert!(!is_blank("  x  "));
    }

    #[test]
    fn test_is_c_space_matches_isspace_set() {
        let spaces: Vec<u8> = (0u8..=127).filter(|b| is_c_space(*b)).collect();
        assert_eq!(spaces, vec![b'\t', b'\n', 0x0B, 0x0C, b'\r', b' ']);
    }
}
