//! The lead decision function.

use lidbot_core::Language;

use crate::contact::has_contact_info;
use crate::lemma::Lemmatizer;
use crate::lexicon::{first_contained, Lexicon};
use crate::proximity::has_proximity;
use crate::tokenize::tokenize;
use crate::verdict::{Rejection, Signals, Verdict};

/// Client-demand classifier: a lexicon plus the lemmatizer that built it.
pub struct Classifier {
    lexicon: Lexicon,
    lemmatizer: Lemmatizer,
}

impl Classifier {
    /// Wraps an already built lexicon.
    ///
    /// `lexicon` must have been built with `lemmatizer` (or one producing the
    /// same lemmas), otherwise lemma-set lookups silently miss.
    #[must_use]
    pub fn new(lexicon: Lexicon, lemmatizer: Lemmatizer) -> Self {
        Self {
            lexicon,
            lemmatizer,
        }
    }

    /// Builds the lexicon for `languages` with `lemmatizer`.
    #[must_use]
    pub fn for_languages(languages: &[Language], lemmatizer: Lemmatizer) -> Self {
        let lexicon = Lexicon::build(languages, &lemmatizer);
        Self::new(lexicon, lemmatizer)
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    /// Whether `text` is a client looking to rent a car.
    #[must_use]
    pub fn classify(&self, text: &str, window: usize) -> bool {
        self.evaluate(text, window).is_accepted()
    }

    /// Like [`classify`](Self::classify), but reports which rule decided.
    #[must_use]
    pub fn evaluate(&self, text: &str, window: usize) -> Verdict {
        let verdict = self.decide(text, window);
        tracing::debug!(accepted = verdict.is_accepted(), reason = %verdict, "message classified");
        verdict
    }

    // Rule order is part of the contract: the first matching veto is reported.
    fn decide(&self, text: &str, window: usize) -> Verdict {
        let lex = &self.lexicon;

        if text.is_empty() {
            return Verdict::Rejected(Rejection::Empty);
        }

        let lower = text.to_lowercase();

        if let Some(term) = first_contained(&lower, lex.banned()) {
            return Verdict::Rejected(Rejection::Banned(term));
        }
        if first_contained(&lower, lex.quick()).is_none() {
            return Verdict::Rejected(Rejection::NoQuickMatch);
        }

        let tokens: Vec<&str> = tokenize(&lower).collect();
        if tokens.is_empty() {
            return Verdict::Rejected(Rejection::NoTokens);
        }
        let lemmas: Vec<String> = tokens.iter().map(|t| self.lemmatizer.lemma(t)).collect();

        if let Some(term) = first_contained(&lower, lex.real_estate()) {
            return Verdict::Rejected(Rejection::RealEstate(term));
        }
        if let Some(term) = first_contained(&lower, lex.spam()) {
            return Verdict::Rejected(Rejection::Spam(term));
        }
        if let Some(term) = first_contained(&lower, lex.taxi()) {
            return Verdict::Rejected(Rejection::Taxi(term));
        }
        if let Some(term) = first_contained(&lower, lex.job()) {
            return Verdict::Rejected(Rejection::Job(term));
        }
        if first_contained(&lower, lex.children()).is_some()
            && first_contained(&lower, lex.toy()).is_some()
        {
            return Verdict::Rejected(Rejection::ToyCar);
        }

        let mut offer = lemmas.iter().filter(|l| lex.offer().contains(l.as_str()));
        if let Some(first) = offer.next() {
            return Verdict::Rejected(Rejection::OfferLanguage {
                lemma: first.clone(),
                count: 1 + offer.count(),
            });
        }

        if has_contact_info(text) {
            return Verdict::Rejected(Rejection::ContactInfo);
        }

        let signals = Signals {
            client_phrase: first_contained(&lower, lex.client_phrases()).is_some(),
            intent_near_vehicle: has_proximity(&lemmas, lex.vehicle(), lex.intent(), window)
                || has_proximity(&lemmas, lex.intent(), lex.vehicle(), window),
            rental_keyword: first_contained(&lower, lex.rental_keywords()).is_some(),
            rental_lemma: lemmas.iter().any(|l| lex.rental().contains(l.as_str())),
        };

        if !(signals.client_phrase || signals.intent_near_vehicle) {
            return Verdict::Rejected(Rejection::NoIntent(signals));
        }
        if !signals.rental_keyword {
            return Verdict::Rejected(Rejection::NoRentalKeyword(signals));
        }
        Verdict::Accepted(signals)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::for_languages(&Language::ALL, Lemmatizer::default())
    }
}
