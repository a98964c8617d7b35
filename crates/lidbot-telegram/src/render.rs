//! Operator-facing lead notifications.

use lidbot_core::Language;

const EXCERPT_CHARS: usize = 900;

/// Public link to a message, when one can be formed.
///
/// Public chats link by username; private supergroups and channels use the
/// `t.me/c/<internal id>` form with the `-100` prefix removed.
#[must_use]
pub fn message_link(username: Option<&str>, chat_id: i64, message_id: i64) -> Option<String> {
    if message_id == 0 {
        return None;
    }
    if let Some(username) = username.filter(|u| !u.is_empty()) {
        return Some(format!("https://t.me/{username}/{message_id}"));
    }
    let raw = chat_id.to_string();
    let chat_part = raw
        .strip_prefix("-100")
        .unwrap_or_else(|| raw.trim_start_matches('-'));
    Some(format!("https://t.me/c/{chat_part}/{message_id}"))
}

/// HTML body for a detected lead.
#[must_use]
pub fn build_notification(
    language: Language,
    title: &str,
    text: &str,
    link: Option<&str>,
) -> String {
    let (headline, open) = match language {
        Language::English => ("Lead detected", "in"),
        Language::Russian => ("Найден лид", "в"),
    };
    let excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
    let mut html = format!(
        "🔎 <b>{headline}</b> {open} <b>{}</b>:\n\n{}",
        escape_html(title),
        escape_html(&excerpt)
    );
    if let Some(link) = link {
        let caption = match language {
            Language::English => "Open message",
            Language::Russian => "Открыть сообщение",
        };
        html.push_str(&format!("\n\n👉 <a href=\"{link}\">{caption}</a>"));
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}
