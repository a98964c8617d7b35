//! Lead classification engine for LidBot.
//!
//! Decides whether a chat message is a client asking to rent a car. Text is
//! lowercased, vetted against literal veto lists, tokenized and lemmatized,
//! and finally accepted only when a client phrase or a vehicle word near an
//! intent word co-occurs with a rental keyword.

pub mod classifier;
pub mod contact;
pub mod error;
pub mod lemma;
pub mod lexicon;
pub mod memo;
pub mod proximity;
pub mod tokenize;
pub mod verdict;

mod words;

pub use classifier::Classifier;
pub use error::AnalysisError;
pub use lemma::{Analyzer, Lemmatizer, MorphyAnalyzer, DEFAULT_CACHE_CAPACITY};
pub use lexicon::Lexicon;
pub use memo::{LruMemoizer, Memoizer, NoopMemoizer};
pub use proximity::has_proximity;
pub use tokenize::tokenize;
pub use verdict::{Rejection, Signals, Verdict};
