use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language tag for word lists and operator-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Russian,
    English,
}

impl Language {
    /// Every supported language, in lexicon merge order.
    pub const ALL: [Language; 2] = [Language::Russian, Language::English];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "russian" => Ok(Language::Russian),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unknown language '{other}' (expected ru or en)")),
        }
    }
}
