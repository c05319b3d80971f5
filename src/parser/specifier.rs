//! Inline `{R,G,B}` and `[S]` specifiers.

use crate::data::Rgb;
use regex::Regex;
use std::sync::OnceLock;

const COLOR_PATTERN: &str = r"\{(\d{1,3}),(\d{1,3}),(\d{1,3})\}";
const SIZE_PATTERN: &str = r"\[(\d+)\]";

fn color_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{COLOR_PATTERN}$")).expect("valid colour pattern"))
}

fn size_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{SIZE_PATTERN}$")).expect("valid size pattern"))
}

fn color_anywhere() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COLOR_PATTERN).expect("valid colour pattern"))
}

fn size_anywhere() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SIZE_PATTERN).expect("valid size pattern"))
}

/// Parse a whole token as a colour specifier.
pub(crate) fn color_from_token(token: &str) -> Option<Rgb> {
    color_token().captures(token).map(|caps| rgb_from(&caps))
}

/// Match a whole token as a size specifier, returning its digits.
pub(crate) fn size_digits_from_token(token: &str) -> Option<&str> {
    size_token()
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Find the first colour specifier anywhere in `text`.
pub(crate) fn find_color(text: &str) -> Option<Rgb> {
    color_anywhere().captures(text).map(|caps| rgb_from(&caps))
}

/// Find the digits of the first size specifier anywhere in `text`.
pub(crate) fn find_size_digits(text: &str) -> Option<&str> {
    size_anywhere()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// Each group is 1-3 ASCII digits, so it always fits a u16.
fn rgb_from(caps: &regex::Captures<'_>) -> Rgb {
    let channel = |i: usize| -> u16 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or_default()
    };
    Rgb::new(channel(1), channel(2), channel(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_token_must_match_whole_token() {
        assert_eq!(color_from_token("{10,20,30}"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(color_from_token("{10,20,30}x"), None);
        assert_eq!(color_from_token("{10, 20, 30}"), None);
        assert_eq!(color_from_token("{1000,0,0}"), None);
    }

    #[test]
    fn channels_above_255_pass_through() {
        assert_eq!(color_from_token("{300,0,999}"), Some(Rgb::new(300, 0, 999)));
    }

    #[test]
    fn size_token_yields_digits() {
        assert_eq!(size_digits_from_token("[12]"), Some("12"));
        assert_eq!(size_digits_from_token("[-1]"), None);
        assert_eq!(size_digits_from_token("[]"), None);
    }

    #[test]
    fn unanchored_search_finds_specifiers_in_trailing_text() {
        let trailing = "note [4] then {1,2,3}";
        assert_eq!(find_color(trailing), Some(Rgb::new(1, 2, 3)));
        assert_eq!(find_size_digits(trailing), Some("4"));
    }
}
