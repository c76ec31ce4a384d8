//! Values interpolated into inline CSS.
//!
//! Maud escapes HTML, not CSS, so anything that lands inside a `style`
//! attribute or `<style>` block goes through here first.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use vitrine_core::is_valid_color;

/// Characters that could close a `url("...")` token or the declaration around it.
const CSS_URL: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'\\')
    .add(b';')
    .add(b'<')
    .add(b'>');

/// The color, trimmed, if it is a valid color string, else `fallback`.
///
/// Trims the same way the validator does, so a saved color always renders.
pub(crate) fn css_color<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if is_valid_color(value) {
        value
    } else {
        fallback
    }
}

pub(crate) fn css_url(url: &str) -> String {
    format!("url(\"{}\")", utf8_percent_encode(url.trim(), CSS_URL))
}
