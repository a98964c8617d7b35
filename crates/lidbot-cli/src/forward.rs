//! Per-message pipeline: chat filter, classification, rendering, delivery.

use lidbot_core::{AppConfig, ChatMessage, Language};
use lidbot_filter::Classifier;
use lidbot_telegram::{build_notification, message_link, ChatTargets, Delivery, Notifier};

/// What happened to one incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The chat is not one of the monitored targets.
    Unmonitored,
    Rejected,
    Forwarded(Delivery),
}

pub(crate) struct LeadForwarder {
    targets: ChatTargets,
    classifier: Classifier,
    notifier: Notifier,
    window: usize,
    language: Language,
}

impl LeadForwarder {
    pub(crate) fn new(
        targets: ChatTargets,
        classifier: Classifier,
        notifier: Notifier,
        window: usize,
        language: Language,
    ) -> Self {
        Self {
            targets,
            classifier,
            notifier,
            window,
            language,
        }
    }

    pub(crate) fn from_app_config(
        targets: ChatTargets,
        classifier: Classifier,
        notifier: Notifier,
        config: &AppConfig,
    ) -> Self {
        Self::new(
            targets,
            classifier,
            notifier,
            config.proximity_window,
            config.language,
        )
    }

    pub(crate) fn chat_count(&self) -> usize {
        self.targets.chat_ids.len()
    }

    pub(crate) async fn handle(&self, message: &ChatMessage) -> Outcome {
        if !self.targets.contains(message.chat_id) {
            tracing::trace!(chat_id = message.chat_id, "ignoring unmonitored chat");
            return Outcome::Unmonitored;
        }
        if !self.classifier.classify(&message.raw_text, self.window) {
            return Outcome::Rejected;
        }

        let delivery = self.notifier.notify(&self.render(message)).await;
        tracing::info!(
            chat_id = message.chat_id,
            message_id = message.message_id,
            ?delivery,
            "lead forwarded"
        );
        Outcome::Forwarded(delivery)
    }

    pub(crate) fn render(&self, message: &ChatMessage) -> String {
        let link = message_link(
            message.chat_username.as_deref(),
            message.chat_id,
            message.message_id,
        );
        build_notification(
            self.language,
            &message.chat_title,
            &message.raw_text,
            link.as_deref(),
        )
    }
}
