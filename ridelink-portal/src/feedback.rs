use tokio::sync::broadcast;

/// Message for the global success/error surface. Rendering is the UI
/// shell's concern; components only publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

/// Command channel behind the "show success/error" surface. Cheap to
/// clone; publishing with no subscribers is fine.
#[derive(Clone)]
pub struct FeedbackChannel {
    tx: broadcast::Sender<Feedback>,
}

impl FeedbackChannel {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Feedback> {
        self.tx.subscribe()
    }

    pub fn success(&self, message: impl Into<String>) {
        let _ = self.tx.send(Feedback::Success(message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        let _ = self.tx.send(Feedback::Error(message.into()));
    }
}

impl Default for FeedbackChannel {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_and_subscribe() {
        let channel = FeedbackChannel::new(4);
        let mut rx = channel.subscribe();

        channel.success("Booking confirmed");
        channel.error("Something went wrong");

        assert_eq!(
            rx.recv().await.unwrap(),
            Feedback::Success("Booking confirmed".to_string())
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            Feedback::Error("Something went wrong".to_string())
        );
    }

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let channel = FeedbackChannel::new(4);
        channel.error("nobody listening");
    }
}
