//! Recording email sink.

use std::sync::Mutex;

use fintrack_shared::email::{EmailError, EmailSink};

/// A message captured by [`MemoryMailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Email sink that records messages instead of sending them.
///
/// Used for assertions in tests and for running the engines without an
/// SMTP relay.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    outbox: Mutex<Vec<OutboundEmail>>,
}

impl MemoryMailer {
    /// Creates an empty mailer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded message, in send order.
    #[must_use]
    pub fn outbox(&self) -> Vec<OutboundEmail> {
        self.outbox.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Discards all recorded messages.
    pub fn clear(&self) {
        self.outbox.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl EmailSink for MemoryMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        self.outbox
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(OutboundEmail {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outbox_preserves_send_order() {
        let mailer = MemoryMailer::new();
        mailer.send("a@example.com", "first", "1").await.unwrap();
        mailer.send("b@example.com", "second", "2").await.unwrap();

        let outbox = mailer.outbox();
        assert_eq!(outbox.len(), 2);
        assert_eq!(outbox[0].subject, "first");
        assert_eq!(outbox[1].to, "b@example.com");

        mailer.clear();
        assert!(mailer.outbox().is_empty());
    }
}
