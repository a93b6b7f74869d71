//! Simulated research assistant conversation.
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

pub const GREETING: &str = "HELLO! I'M YOUR AI RESEARCH ASSISTANT. ASK ME ANYTHING ABOUT MARKET TRENDS, COMPETITORS, OR VALIDATION STRATEGIES.";
pub const CANNED_REPLY: &str =
    "ANALYZING YOUR REQUEST... BASED ON CURRENT MARKET DATA, HERE ARE MY INSIGHTS:";

/// Shortcut prompts offered under the input box
pub const QUICK_ACTIONS: [&str; 4] = ["MARKET SIZE", "COMPETITORS", "TRENDS", "VALIDATION"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub author: Author,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    EmptyMessage,
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::EmptyMessage => write!(f, "Message must not be blank"),
        }
    }
}

impl std::error::Error for ChatError {}

#[derive(Debug, Clone)]
pub struct ResearchChat {
    reply_delay: Duration,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ResearchChat {
    pub fn new(reply_delay: Duration) -> Self {
        let mut chat = Self {
            reply_delay,
            messages: Vec::new(),
            next_id: 1,
        };
        chat.push(Author::Ai, GREETING.to_string());
        chat
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, author: Author, content: String) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            author,
            content,
            sent_at: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    /// Wait the reply delay, then append the user's message and the canned answer.
    ///
    /// Returns the new messages: the user's, then the assistant's.
    pub async fn send(&mut self, text: &str) -> Result<Vec<ChatMessage>, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        debug!("Chat: user asked {:?}", text);
        tokio::time::sleep(self.reply_delay).await;

        // Both land together, so a request dropped mid-delay leaves no unanswered question
        let question = self.push(Author::User, text.to_string());
        let reply = self.push(Author::Ai, CANNED_REPLY.to_string());

        Ok(vec![question, reply])
    }
}
