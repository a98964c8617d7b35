//! Immutable word sets the classifier matches against.

use std::collections::HashSet;

use lidbot_core::Language;

use crate::lemma::Lemmatizer;
use crate::words::{self, WordList};

/// Word sets for one or more languages, built once at startup.
///
/// Lemma sets (vehicle, intent, offer, rental) are compared exactly against
/// token lemmas. Phrase lists are compared by substring containment against
/// the lowercased message.
#[derive(Debug, Clone)]
pub struct Lexicon {
    languages: Vec<Language>,
    banned: Vec<&'static str>,
    real_estate: Vec<&'static str>,
    spam: Vec<&'static str>,
    taxi: Vec<&'static str>,
    job: Vec<&'static str>,
    children: Vec<&'static str>,
    toy: Vec<&'static str>,
    client_phrases: Vec<&'static str>,
    rental_keywords: Vec<&'static str>,
    quick: Vec<&'static str>,
    vehicle: HashSet<String>,
    intent: HashSet<String>,
    offer: HashSet<String>,
    rental: HashSet<String>,
}

impl Lexicon {
    /// Builds the built-in lexicon for `languages`, lemmatizing lemma-set
    /// words with `lemmatizer` so they match what classification produces.
    #[must_use]
    pub fn build(languages: &[Language], lemmatizer: &Lemmatizer) -> Self {
        let mut tags: Vec<Language> = Vec::with_capacity(languages.len());
        for &language in languages {
            if !tags.contains(&language) {
                tags.push(language);
            }
        }

        let phrases = |list: &WordList| merge(list, &tags);
        let lemmas = |list: &WordList| -> HashSet<String> {
            merge(list, &tags)
                .into_iter()
                .map(|word| lemmatizer.lemma(word))
                .filter(|lemma| !lemma.is_empty())
                .collect()
        };

        let lexicon = Self {
            banned: phrases(&words::BANNED),
            real_estate: phrases(&words::REAL_ESTATE),
            spam: phrases(&words::SPAM),
            taxi: phrases(&words::TAXI),
            job: phrases(&words::JOB),
            children: phrases(&words::CHILDREN),
            toy: phrases(&words::TOY),
            client_phrases: phrases(&words::CLIENT_PHRASES),
            rental_keywords: phrases(&words::RENTAL),
            quick: phrases(&words::QUICK),
            vehicle: lemmas(&words::VEHICLE),
            intent: lemmas(&words::INTENT),
            offer: lemmas(&words::OFFER),
            rental: lemmas(&words::RENTAL),
            languages: tags,
        };

        tracing::debug!(
            languages = ?lexicon.languages,
            vehicle = lexicon.vehicle.len(),
            intent = lexicon.intent.len(),
            offer = lexicon.offer.len(),
            rental = lexicon.rental.len(),
            "lexicon built"
        );
        lexicon
    }

    /// Lexicon covering every supported language.
    #[must_use]
    pub fn all_languages(lemmatizer: &Lemmatizer) -> Self {
        Self::build(&Language::ALL, lemmatizer)
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub fn banned(&self) -> &[&'static str] {
        &self.banned
    }

    #[must_use]
    pub fn real_estate(&self) -> &[&'static str] {
        &self.real_estate
    }

    #[must_use]
    pub fn spam(&self) -> &[&'static str] {
        &self.spam
    }

    #[must_use]
    pub fn taxi(&self) -> &[&'static str] {
        &self.taxi
    }

    #[must_use]
    pub fn job(&self) -> &[&'static str] {
        &self.job
    }

    #[must_use]
    pub fn children(&self) -> &[&'static str] {
        &self.children
    }

    #[must_use]
    pub fn toy(&self) -> &[&'static str] {
        &self.toy
    }

    #[must_use]
    pub fn client_phrases(&self) -> &[&'static str] {
        &self.client_phrases
    }

    #[must_use]
    pub fn rental_keywords(&self) -> &[&'static str] {
        &self.rental_keywords
    }

    #[must_use]
    pub fn quick(&self) -> &[&'static str] {
        &self.quick
    }

    #[must_use]
    pub fn vehicle(&self) -> &HashSet<String> {
        &self.vehicle
    }

    #[must_use]
    pub fn intent(&self) -> &HashSet<String> {
        &self.intent
    }

    #[must_use]
    pub fn offer(&self) -> &HashSet<String> {
        &self.offer
    }

    #[must_use]
    pub fn rental(&self) -> &HashSet<String> {
        &self.rental
    }
}

/// First entry of `list` occurring as a substring of `text`.
pub(crate) fn first_contained(text: &str, list: &[&'static str]) -> Option<&'static str> {
    list.iter().copied().find(|term| text.contains(term))
}

fn merge(list: &WordList, languages: &[Language]) -> Vec<&'static str> {
    let mut merged: Vec<&'static str> = Vec::new();
    for &language in languages {
        for &word in list.for_language(language) {
            if !merged.contains(&word) {
                merged.push(word);
            }
        }
    }
    merged
}
