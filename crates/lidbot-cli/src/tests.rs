use lidbot_filter::{Classifier, Rejection, Verdict};

use super::*;

#[test]
fn parses_run_command() {
    let cli = Cli::try_parse_from(["lidbot", "run"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Run));
}

#[test]
fn parses_channels_command() {
    let cli = Cli::try_parse_from(["lidbot", "channels"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Channels));
}

#[test]
fn classify_without_text_reads_stdin() {
    let cli = Cli::try_parse_from(["lidbot", "classify"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Classify {
            text: None,
            window: None,
            explain: false
        }
    ));
}

#[test]
fn classify_with_text_window_and_explain() {
    let cli = Cli::try_parse_from([
        "lidbot",
        "classify",
        "need a car for rent",
        "--window",
        "5",
        "--explain",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Classify {
            text: Some(ref t),
            window: Some(5),
            explain: true
        } if t == "need a car for rent"
    ));
}

#[test]
fn classify_rejects_negative_window() {
    assert!(Cli::try_parse_from(["lidbot", "classify", "x", "--window", "-1"]).is_err());
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["lidbot"]).is_err());
}

#[test]
fn verdict_formatting() {
    let classifier = Classifier::default();
    let accepted = classifier.evaluate("Need a car for rent this weekend, no seller info", 3);
    assert_eq!(classify::format_verdict(&accepted, false), "accept");

    let rejected = Verdict::Rejected(Rejection::ContactInfo);
    assert_eq!(classify::format_verdict(&rejected, false), "reject");
    assert_eq!(
        classify::format_verdict(&rejected, true),
        "reject\trejected: phone number or link"
    );
}

mod forwarding {
    use lidbot_core::{ChatMessage, Language};
    use lidbot_filter::Classifier;
    use lidbot_telegram::{BotClient, ChatTargets, Delivery, Notifier};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::forward::{LeadForwarder, Outcome};

    const MONITORED: i64 = -100_500;
    const DEST: i64 = -100_900;
    const LEAD: &str = "Need a car for rent this weekend, no seller info";

    fn forwarder(server: &MockServer) -> LeadForwarder {
        let client = BotClient::with_base_url("123:abc", 5, &server.uri())
            .expect("client construction should not fail");
        let targets = ChatTargets {
            chat_ids: vec![MONITORED],
            resolved_usernames: vec!["dubaicars".to_owned()],
            ..ChatTargets::default()
        };
        LeadForwarder::new(
            targets,
            Classifier::default(),
            Notifier::new(client, Some(DEST), None),
            3,
            Language::English,
        )
    }

    fn message(chat_id: i64, text: &str) -> ChatMessage {
        ChatMessage {
            raw_text: text.to_owned(),
            chat_title: "Dubai Cars".to_owned(),
            chat_username: Some("dubaicars".to_owned()),
            chat_id,
            message_id: 77,
        }
    }

    fn sent() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": { "message_id": 1, "chat": { "id": DEST, "type": "supergroup" } }
        }))
    }

    #[tokio::test]
    async fn unmonitored_chat_is_ignored_without_sending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(sent())
            .expect(0)
            .mount(&server)
            .await;

        let outcome = forwarder(&server).handle(&message(-100_123, LEAD)).await;
        assert_eq!(outcome, Outcome::Unmonitored);
    }

    #[tokio::test]
    async fn rejected_message_is_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(sent())
            .expect(0)
            .mount(&server)
            .await;

        let outcome = forwarder(&server)
            .handle(&message(MONITORED, "Rent a car, call +971 50 123 4567"))
            .await;
        assert_eq!(outcome, Outcome::Rejected);
    }

    #[tokio::test]
    async fn accepted_message_is_rendered_and_sent_to_destination() {
        let server = MockServer::start().await;
        let forwarder = forwarder(&server);
        let lead = message(MONITORED, LEAD);
        let html = forwarder.render(&lead);
        assert!(html.contains("https://t.me/dubaicars/77"), "missing link: {html}");
        assert!(html.contains("<b>Dubai Cars</b>"), "missing title: {html}");

        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_partial_json(serde_json::json!({
                "chat_id": DEST,
                "text": html,
                "parse_mode": "HTML"
            })))
            .respond_with(sent())
            .expect(1)
            .mount(&server)
            .await;

        let outcome = forwarder.handle(&lead).await;
        assert_eq!(outcome, Outcome::Forwarded(Delivery::Primary));
    }
}
