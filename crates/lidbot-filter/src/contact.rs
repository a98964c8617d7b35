use std::sync::LazyLock;

use regex::Regex;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\-\s()]{6,}\d").expect("valid phone regex"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

/// Whether the raw message advertises a phone number or a web link.
#[must_use]
pub fn has_contact_info(text: &str) -> bool {
    PHONE_RE.is_match(text) || URL_RE.is_match(text)
}
