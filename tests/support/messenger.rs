use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mintscope::domain::{ChatId, OutboundMessage};
use mintscope::error::{Error, Result};
use mintscope::port::Messenger;

/// A `send_message` call that was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat: ChatId,
    pub message: OutboundMessage,
}

/// An `answer_callback` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub callback_id: String,
    pub text: Option<String>,
}

/// Thread-safe messenger that records everything it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingMessenger {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    answers: Arc<Mutex<Vec<Answer>>>,
    failing_sends: Arc<AtomicUsize>,
    fail_answers: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `count` sends before recording again.
    pub fn failing_first_sends(count: usize) -> Self {
        let messenger = Self::default();
        messenger.failing_sends.store(count, Ordering::SeqCst);
        messenger
    }

    /// Reject every callback acknowledgement.
    pub fn failing_answers() -> Self {
        Self {
            fail_answers: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().expect("lock sent messages").clone()
    }

    pub fn answers(&self) -> Vec<Answer> {
        self.answers.lock().expect("lock answers").clone()
    }

    pub fn only_text(&self) -> String {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one message, got {sent:?}");
        sent[0].message.text.clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(&self, chat: ChatId, message: OutboundMessage) -> Result<()> {
        let rejected = self
            .failing_sends
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if rejected {
            return Err(Error::Upstream("send rejected".into()));
        }
        self.sent
            .lock()
            .expect("lock sent messages")
            .push(SentMessage { chat, message });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        if self.fail_answers {
            return Err(Error::Upstream("answer rejected".into()));
        }
        self.answers.lock().expect("lock answers").push(Answer {
            callback_id: callback_id.to_string(),
            text: text.map(ToOwned::to_owned),
        });
        Ok(())
    }
}
