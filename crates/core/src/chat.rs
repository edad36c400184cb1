//! Concierge chat session: an append-only message log with a single in-flight reply.

use chrono::Local;
use tracing::{debug, warn};

use crate::backend::Concierge;
use crate::types::{ChatAuthor, ChatContext, ChatMessage};

/// Opening line of every session.
pub fn greeting(context: &ChatContext) -> String {
    let category = if context.category.is_empty() {
        "exploring".to_string()
    } else {
        context.category.to_lowercase()
    };
    let city = if context.city.is_empty() { "your city" } else { context.city.as_str() };
    format!(
        "Hey there! \u{1F44B} I'm your personal vibe concierge. I see you're interested in \
         {category} in {city}. What kind of experience are you looking for today?"
    )
}

/// A reply the session is waiting on. Hand `prompt` and `context` to a [`Concierge`],
/// then give the answer back through [`ChatSession::finish_reply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub prompt: String,
    pub context: ChatContext,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    context: ChatContext,
    messages: Vec<ChatMessage>,
    next_id: u64,
    waiting: bool,
}

impl ChatSession {
    /// Start a session seeded with the page's context. The greeting is the first message.
    pub fn new(context: ChatContext) -> Self {
        let mut session = Self {
            context,
            messages: Vec::new(),
            next_id: 1,
            waiting: false,
        };
        let text = greeting(&session.context);
        session.push(ChatAuthor::Bot, text);
        session
    }

    pub fn context(&self) -> &ChatContext {
        &self.context
    }

    /// Follow the page after a new search or tag change. Later replies use `context`;
    /// the greeting already in the log is left as it was.
    pub fn set_context(&mut self, context: ChatContext) {
        if self.context != context {
            debug!(city = %context.city, category = %context.category, "Chat context updated");
            self.context = context;
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// A reply is pending; the input should be disabled.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    fn push(&mut self, author: ChatAuthor, content: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            author,
            content,
            timestamp: Local::now(),
        });
    }

    /// Append the user's message and mark a reply as pending.
    ///
    /// Returns `None` for blank input or while a previous reply is still pending.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingReply> {
        if self.waiting {
            debug!("Concierge busy, message dropped");
            return None;
        }
        if text.trim().is_empty() {
            return None;
        }
        self.push(ChatAuthor::User, text.to_string());
        self.waiting = true;
        Some(PendingReply {
            prompt: text.to_string(),
            context: self.context.clone(),
        })
    }

    /// Append the concierge's answer and leave the waiting state.
    pub fn finish_reply(&mut self, pending: PendingReply, outcome: Result<String, String>) {
        match outcome {
            Ok(content) => self.push(ChatAuthor::Bot, content),
            Err(e) => warn!(error = %e, prompt = %pending.prompt, "Concierge reply failed"),
        }
        self.waiting = false;
    }

    /// Send `text` and wait for the concierge. Returns false when the send was refused.
    pub async fn send_message(&mut self, concierge: &dyn Concierge, text: &str) -> bool {
        let Some(pending) = self.begin_send(text) else {
            return false;
        };
        let outcome = concierge.reply(&pending.prompt, &pending.context).await;
        self.finish_reply(pending, outcome);
        true
    }
}
