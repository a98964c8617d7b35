//! End-to-end classification scenarios over the built-in bilingual lexicon.

use lidbot_core::Language;
use lidbot_filter::{Classifier, Lemmatizer, Rejection, Verdict};

const WINDOW: usize = 3;

fn classifier() -> Classifier {
    Classifier::for_languages(&Language::ALL, Lemmatizer::default())
}

fn rejection(text: &str) -> Rejection {
    match classifier().evaluate(text, WINDOW) {
        Verdict::Rejected(reason) => reason,
        Verdict::Accepted(signals) => panic!("expected rejection for {text:?}, got {signals:?}"),
    }
}

const ACCEPTED: &[&str] = &[
    "Need a car for rent this weekend, no seller info",
    "Looking for a car to rent in Dubai next week",
    "Rent jeep tomorrow",
    "Подскажите, где можно взять машину напрокат на неделю?",
    "Хочу арендовать авто на месяц",
];

#[test]
fn client_request_with_rental_keyword_is_accepted() {
    assert!(classifier().classify("Need a car for rent this weekend, no seller info", WINDOW));
}

#[test]
fn offer_with_phone_is_rejected() {
    let c = classifier();
    assert!(!c.classify("We offer car rental services, call +1 555 1234", WINDOW));
    assert!(matches!(
        c.evaluate("We offer car rental services, call +1 555 1234", WINDOW),
        Verdict::Rejected(Rejection::OfferLanguage { .. })
    ));
}

#[test]
fn apartment_search_is_rejected() {
    assert!(!classifier().classify("Looking for a studio apartment near the beach", WINDOW));
}

#[test]
fn empty_text_is_rejected() {
    assert!(!classifier().classify("", WINDOW));
}

#[test]
fn all_accepted_samples_pass() {
    let c = classifier();
    for text in ACCEPTED {
        let verdict = c.evaluate(text, WINDOW);
        assert!(verdict.is_accepted(), "{text:?} -> {verdict}");
    }
}

#[test]
fn accepted_texts_always_contain_a_quick_stem() {
    let c = classifier();
    for text in ACCEPTED {
        assert!(c.classify(text, WINDOW));
        let lower = text.to_lowercase();
        assert!(
            c.lexicon().quick().iter().any(|stem| lower.contains(stem)),
            "accepted text without quick stem: {text:?}"
        );
    }
}

#[test]
fn banned_terms_win_over_everything() {
    for text in [
        "Need a car for rent, also selling weed",
        "Ищу машину в аренду, казино рядом",
        "need a car for rent 18+",
    ] {
        assert!(
            matches!(rejection(text), Rejection::Banned(_)),
            "{text:?} should hit the banned veto"
        );
    }
}

#[test]
fn banned_term_rejects_otherwise_accepted_text() {
    let c = classifier();
    for text in ACCEPTED {
        let poisoned = format!("{text} mdma");
        assert!(!c.classify(&poisoned, WINDOW), "{poisoned:?} was accepted");
    }
}

#[test]
fn unrelated_chatter_fails_quick_filter() {
    assert_eq!(
        rejection("Good morning everyone, lovely weather"),
        Rejection::NoQuickMatch
    );
}

#[test]
fn russian_real_estate_is_rejected() {
    assert_eq!(
        rejection("Сниму квартиру, нужна машина тоже"),
        Rejection::RealEstate("квартир")
    );
}

#[test]
fn forum_boilerplate_is_rejected() {
    assert_eq!(
        rejection("Ознакомься с правилами: нужна машина в аренду"),
        Rejection::Spam("ознакомься с правилами")
    );
}

#[test]
fn ride_offers_are_rejected() {
    assert_eq!(
        rejection("Need a transfer car for rent from dubai to abu dhabi"),
        Rejection::Taxi("from dubai to")
    );
}

#[test]
fn job_posts_are_rejected() {
    assert_eq!(
        rejection("Hiring a driver, need a car for rent"),
        Rejection::Job("hiring")
    );
}

#[test]
fn toy_cars_are_rejected() {
    assert_eq!(
        rejection("Нужна детская машинка игрушка напрокат"),
        Rejection::ToyCar
    );
}

#[test]
fn russian_offer_is_rejected() {
    match rejection("Сдам машину в аренду, звоните") {
        Rejection::OfferLanguage { count, .. } => assert!(count >= 2, "count {count}"),
        other => panic!("expected offer veto, got {other:?}"),
    }
}

#[test]
fn links_and_phones_are_rejected() {
    assert_eq!(
        rejection("Need a car for rent, my number 050 123 4567"),
        Rejection::ContactInfo
    );
    assert_eq!(
        rejection("Need a car for rent, details at https://example.com/post"),
        Rejection::ContactInfo
    );
}

#[test]
fn missing_rental_keyword_is_rejected() {
    match rejection("Need a car tomorrow") {
        Rejection::NoRentalKeyword(signals) => assert!(signals.client_phrase),
        other => panic!("expected no-rental rejection, got {other:?}"),
    }
}

#[test]
fn window_controls_intent_detection() {
    let c = classifier();
    assert!(c.classify("Rent jeep tomorrow", 1));
    assert!(!c.classify("Rent jeep tomorrow", 0));
}

#[test]
fn english_only_lexicon_ignores_russian_requests() {
    let english = Classifier::for_languages(&[Language::English], Lemmatizer::default());
    assert_eq!(
        english.evaluate("Подскажите, где можно взять машину напрокат на неделю?", WINDOW),
        Verdict::Rejected(Rejection::NoQuickMatch)
    );
    assert!(english.classify("Need a car for rent this weekend, no seller info", WINDOW));
}

#[test]
fn classifier_is_shareable_across_threads() {
    let c = std::sync::Arc::new(classifier());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = std::sync::Arc::clone(&c);
            std::thread::spawn(move || {
                for text in ACCEPTED {
                    assert!(c.classify(text, WINDOW));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

const RUSSIAN_HEADLINES: &[&str] = &[
    "Аренда авто в Дубае",
    "Аренда машины",
    "Аренда авто",
    "Прокат машин в Дубае",
    "Аренда джипов",
    "Аренда джипов и седанов",
    "Аренда машин над морем",
];

#[test]
fn russian_rental_headlines_without_a_request_are_rejected() {
    for text in RUSSIAN_HEADLINES {
        match rejection(text) {
            Rejection::NoIntent(signals) => {
                assert!(signals.rental_keyword, "{text:?} should still see a rental keyword");
                assert!(!signals.client_phrase, "{text:?}");
                assert!(!signals.intent_near_vehicle, "{text:?}");
            }
            other => panic!("expected no-intent rejection for {text:?}, got {other:?}"),
        }
    }
}

#[test]
fn rental_noun_is_not_an_intent_word() {
    let c = classifier();
    let lemmatizer = c.lemmatizer();
    assert!(c.lexicon().rental().contains(&lemmatizer.lemma("аренда")));
    assert!(!c.lexicon().intent().contains(&lemmatizer.lemma("аренда")));
    assert!(!c.lexicon().intent().contains(&lemmatizer.lemma("над")));
}

#[test]
fn inflected_rental_verb_still_signals_intent() {
    match classifier().evaluate("Арендую авто на выходные", WINDOW) {
        Verdict::Accepted(signals) => assert!(signals.intent_near_vehicle),
        other => panic!("expected acceptance, got {other:?}"),
    }
}
