//! Word normalization.
//!
//! Cyrillic words go through a morphological [`Analyzer`]; every other word is
//! only lowercased. [`Lemmatizer::lemma`] is total: analyzer failures fall back
//! to the lowercased input.

use std::path::Path;
use std::sync::LazyLock;

use rsmorphy::{rsmorphy_dict_ru, MorphAnalyzer, Source};

use crate::error::AnalysisError;
use crate::memo::{LruMemoizer, Memoizer, NoopMemoizer};

/// Default number of memoized lemmas.
pub const DEFAULT_CACHE_CAPACITY: usize = 20_000;

// Loaded on first use and shared by every analyzer in the process.
static RUSSIAN_DICTIONARY: LazyLock<Option<MorphAnalyzer>> =
    LazyLock::new(|| load_dictionary(Path::new(rsmorphy_dict_ru::DICT_PATH)));

/// A morphological back-end producing ranked normal-form candidates.
pub trait Analyzer: Send + Sync {
    /// Candidate normal forms for `word`, best first.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] for input the back-end cannot handle.
    fn normal_forms(&self, word: &str) -> Result<Vec<String>, AnalysisError>;
}

/// Dictionary-backed Russian analyzer (OpenCorpora paradigms via `rsmorphy`).
///
/// Candidates are ranked by the dictionary's tag probabilities and keep
/// parts of speech apart: `аренда` stays a noun, `арендую` maps to
/// `арендовать`. Normal forms are lowercased with `ё` folded to `е`.
pub struct MorphyAnalyzer {
    morph: Option<&'static MorphAnalyzer>,
}

impl MorphyAnalyzer {
    /// Analyzer over the bundled Russian dictionary.
    ///
    /// If the dictionary cannot be loaded the error is logged once and every
    /// call reports [`AnalysisError::DictionaryUnavailable`].
    #[must_use]
    pub fn russian() -> Self {
        Self {
            morph: RUSSIAN_DICTIONARY.as_ref(),
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.morph.is_some()
    }
}

impl Default for MorphyAnalyzer {
    fn default() -> Self {
        Self::russian()
    }
}

impl std::fmt::Debug for MorphyAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphyAnalyzer")
            .field("available", &self.is_available())
            .finish()
    }
}

impl Analyzer for MorphyAnalyzer {
    fn normal_forms(&self, word: &str) -> Result<Vec<String>, AnalysisError> {
        if word.is_empty() {
            return Err(AnalysisError::Empty);
        }
        if word.chars().any(|c| !(c.is_alphanumeric() || c == '-')) {
            return Err(AnalysisError::UnsupportedInput(word.to_owned()));
        }
        let morph = self.morph.ok_or(AnalysisError::DictionaryUnavailable)?;

        let mut forms: Vec<String> = Vec::new();
        for parsed in morph.parse(word) {
            let form = parsed
                .lex
                .get_normal_form(morph)
                .to_lowercase()
                .replace('ё', "е");
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
        Ok(forms)
    }
}

fn load_dictionary(dir: &Path) -> Option<MorphAnalyzer> {
    // `MorphAnalyzer::from_file` panics on a missing dictionary.
    if !dir.join("meta.json.gz").is_file() {
        tracing::error!(
            path = %dir.display(),
            "Russian morphology dictionary not found; Cyrillic words will only be lowercased"
        );
        return None;
    }
    let morph = MorphAnalyzer::from_file(dir);
    tracing::debug!(path = %dir.display(), "Russian morphology dictionary loaded");
    Some(morph)
}

/// Memoized word normalizer shared by lexicon construction and classification.
pub struct Lemmatizer {
    analyzer: Box<dyn Analyzer>,
    memo: Box<dyn Memoizer>,
}

impl Lemmatizer {
    #[must_use]
    pub fn new(analyzer: Box<dyn Analyzer>, memo: Box<dyn Memoizer>) -> Self {
        Self { analyzer, memo }
    }

    /// Dictionary lemmatizer with an LRU cache of `capacity` entries.
    ///
    /// A capacity of zero disables memoization.
    #[must_use]
    pub fn with_cache_capacity(capacity: usize) -> Self {
        let memo: Box<dyn Memoizer> = if capacity == 0 {
            Box::new(NoopMemoizer)
        } else {
            Box::new(LruMemoizer::new(capacity))
        };
        Self::new(Box::new(MorphyAnalyzer::russian()), memo)
    }

    /// Normal form of `word`. Never fails; the empty word maps to `""`.
    #[must_use]
    pub fn lemma(&self, word: &str) -> String {
        if word.trim().is_empty() {
            return String::new();
        }
        self.memo.get_or_compute(word, &|raw| self.normalize(raw))
    }

    fn normalize(&self, raw: &str) -> String {
        let cleaned = raw.trim();
        if !has_cyrillic(cleaned) {
            return cleaned.to_lowercase();
        }

        match self.analyzer.normal_forms(cleaned) {
            Ok(forms) => forms
                .into_iter()
                .next()
                .unwrap_or_else(|| cleaned.to_lowercase()),
            Err(e) => {
                tracing::debug!(word = cleaned, error = %e, "morphological analysis failed; using lowercase");
                cleaned.to_lowercase()
            }
        }
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::with_cache_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

fn has_cyrillic(word: &str) -> bool {
    word.chars()
        .any(|c| matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'))
}
