use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-zА-Яа-яЁё0-9]+").expect("valid token regex"));

/// Maximal runs of Latin letters, Cyrillic letters or digits, in order.
///
/// Pure: calling it again on the same text yields the same sequence.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}
