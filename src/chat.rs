//! Chat
//!
//! The assistant screen is a mock: every message gets one of two canned replies, delivered
//! after a fixed delay by whoever owns the timer. Nothing here depends on a reply arriving.

use std::time::Duration;

use tracing::debug;

use crate::i18n::Catalog;

/// How long the bot "types" before a reply is delivered.
pub const REPLY_DELAY: Duration = Duration::from_secs(1);

/// Minimum press length before the mic button counts as recording.
pub const HOLD_THRESHOLD: Duration = Duration::from_millis(150);

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    /// The guest
    User,

    /// The assistant
    Bot,
}

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Session-unique, increasing id
    pub id: u64,

    /// Who wrote it
    pub author: Author,

    /// Message text
    pub text: String,
}

/// A bot reply waiting for its timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Delay before delivery
    pub delay: Duration,

    /// Reply text
    pub text: String,
}

impl PendingReply {
    fn after_delay(text: &str) -> Self {
        Self {
            delay: REPLY_DELAY,
            text: text.to_string(),
        }
    }
}

/// Chat history for one session. Lost on reload.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    /// Start a session with the welcome message.
    pub fn new(catalog: &Catalog) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: 0,
        };

        session.push(Author::Bot, catalog.chat.welcome.clone());

        session
    }

    /// Post the guest's typed message.
    ///
    /// Blank input is ignored and yields `None`; otherwise the trimmed text is appended and
    /// the canned reply is returned for the caller to deliver after its delay.
    pub fn submit(&mut self, input: &str, catalog: &Catalog) -> Option<PendingReply> {
        let text = input.trim();

        if text.is_empty() {
            return None;
        }

        self.push(Author::User, text.to_string());

        Some(PendingReply::after_delay(&catalog.chat.reply))
    }

    /// Post the placeholder for a finished voice recording and return the acknowledgement.
    pub fn submit_voice(&mut self, catalog: &Catalog) -> PendingReply {
        self.push(Author::User, catalog.chat.voice_message.clone());

        PendingReply::after_delay(&catalog.chat.voice_reply)
    }

    /// Append a bot reply whose timer fired. Returns the new message id.
    pub fn deliver(&mut self, reply: PendingReply) -> u64 {
        self.push(Author::Bot, reply.text)
    }

    /// Messages in posting order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, author: Author, text: String) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);

        debug!(id, ?author, "chat message posted");

        self.messages.push(ChatMessage { id, author, text });

        id
    }
}

/// Press-and-hold tracking for the mic button.
///
/// Timestamps are offsets from any fixed origin (for example `performance.now()`), which keeps
/// this usable where `Instant` is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoiceHold {
    pressed_at: Option<Duration>,
}

impl VoiceHold {
    /// Button went down.
    pub fn press(&mut self, at: Duration) {
        self.pressed_at = Some(at);
    }

    /// Whether the current press has lasted long enough to count as recording.
    pub fn is_recording(&self, now: Duration) -> bool {
        self.pressed_at
            .is_some_and(|pressed_at| now.saturating_sub(pressed_at) >= HOLD_THRESHOLD)
    }

    /// Button went up (or the pointer left). Returns whether a recording just finished.
    pub fn release(&mut self, at: Duration) -> bool {
        let recording = self.is_recording(at);
        self.pressed_at = None;

        recording
    }
}
