//! Notification bridge.
//!
//! The core reports status, progress, and errors through a one-way sink;
//! presentation (modal dialogs, auto-dismissing toasts) belongs to the
//! embedding application. Calls are send-and-continue: the core never
//! waits for a dismissal, so its control flow is independent of
//! presentation timing.

use std::sync::Mutex;

/// Visual style of a transient toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral progress information.
    Info,
    /// A completed operation.
    Success,
    /// A recoverable error.
    Error,
}

/// One-way sink for user-facing notifications.
///
/// Implementations must not block: the core calls these from the middle
/// of capture and submission flows.
pub trait Notifier: Send + Sync {
    /// Presents a modal-style notification, dismissed by the user.
    fn modal(&self, title: &str, message: &str);

    /// Presents a toast-style notification that self-dismisses.
    fn toast(&self, message: &str, kind: ToastKind);
}

/// Notifier that writes every notification to the tracing log.
///
/// Used by the demo binary and by any headless embedding.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn modal(&self, title: &str, message: &str) {
        tracing::info!(title, message, "Modal notification");
    }

    fn toast(&self, message: &str, kind: ToastKind) {
        tracing::info!(?kind, message, "Toast notification");
    }
}

/// A recorded notification event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A modal with title and message.
    Modal {
        /// Modal title.
        title: String,
        /// Modal body.
        message: String,
    },
    /// A toast with message and kind.
    Toast {
        /// Toast body.
        message: String,
        /// Toast style.
        kind: ToastKind,
    },
}

/// Notifier that records events in memory.
///
/// Lets tests and diagnostics assert on the exact notification sequence
/// a flow produced.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded events in order.
    pub fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Returns only the recorded modals as (title, message) pairs.
    pub fn modals(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Notification::Modal { title, message } => Some((title, message)),
                Notification::Toast { .. } => None,
            })
            .collect()
    }

    /// Returns only the recorded toast messages in order.
    pub fn toasts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Notification::Toast { message, .. } => Some(message),
                Notification::Modal { .. } => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn modal(&self, title: &str, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(Notification::Modal {
                title: title.to_string(),
                message: message.to_string(),
            });
        }
    }

    fn toast(&self, message: &str, kind: ToastKind) {
        if let Ok(mut events) = self.events.lock() {
            events.push(Notification::Toast {
                message: message.to_string(),
                kind,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_preserves_order() {
        let notifier = RecordingNotifier::new();
        notifier.toast("first", ToastKind::Info);
        notifier.modal("Success", "done");
        notifier.toast("second", ToastKind::Success);

        let events = notifier.events();
        assert_eq!(events.len(), 3);
        assert_eq!(notifier.toasts(), vec!["first", "second"]);
        assert_eq!(
            notifier.modals(),
            vec![("Success".to_string(), "done".to_string())]
        );
    }
}
