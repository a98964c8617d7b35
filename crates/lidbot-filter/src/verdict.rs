use std::fmt;

/// Positive signals computed once every veto has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signals {
    /// A literal client-seeking phrase occurs in the text.
    pub client_phrase: bool,
    /// A vehicle lemma lies within the window of an intent lemma.
    pub intent_near_vehicle: bool,
    /// A literal rental keyword occurs in the text.
    pub rental_keyword: bool,
    /// Some token lemmatizes into the rental set. Reported only.
    pub rental_lemma: bool,
}

/// The first rule that rejected a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Banned(&'static str),
    NoQuickMatch,
    NoTokens,
    RealEstate(&'static str),
    Spam(&'static str),
    Taxi(&'static str),
    Job(&'static str),
    ToyCar,
    OfferLanguage { lemma: String, count: usize },
    ContactInfo,
    NoIntent(Signals),
    NoRentalKeyword(Signals),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => f.write_str("empty text"),
            Rejection::Banned(term) => write!(f, "banned term {term:?}"),
            Rejection::NoQuickMatch => f.write_str("no quick stem"),
            Rejection::NoTokens => f.write_str("no tokens"),
            Rejection::RealEstate(term) => write!(f, "real-estate term {term:?}"),
            Rejection::Spam(term) => write!(f, "spam phrase {term:?}"),
            Rejection::Taxi(term) => write!(f, "ride offer {term:?}"),
            Rejection::Job(term) => write!(f, "job post {term:?}"),
            Rejection::ToyCar => f.write_str("toy car"),
            Rejection::OfferLanguage { lemma, count } => {
                write!(f, "offer language {lemma:?} ({count} lemmas)")
            }
            Rejection::ContactInfo => f.write_str("phone number or link"),
            Rejection::NoIntent(_) => f.write_str("no client phrase or intent near vehicle"),
            Rejection::NoRentalKeyword(_) => f.write_str("no rental keyword"),
        }
    }
}

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Signals),
    Rejected(Rejection),
}

impl Verdict {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// Signals, when the pipeline got far enough to compute them.
    #[must_use]
    pub fn signals(&self) -> Option<Signals> {
        match self {
            Verdict::Accepted(signals)
            | Verdict::Rejected(Rejection::NoIntent(signals) | Rejection::NoRentalKeyword(signals)) => {
                Some(*signals)
            }
            Verdict::Rejected(_) => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted(s) => write!(
                f,
                "accepted (client_phrase={}, intent_near_vehicle={}, rental_keyword={})",
                s.client_phrase, s.intent_near_vehicle, s.rental_keyword
            ),
            Verdict::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}
