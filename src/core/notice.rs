//! Inline error and transient success notices.
//!
//! The board holds at most one error and one transient message. Showing a
//! new message replaces the previous one; the ticket returned by
//! [`StatusBoard::show_message`] only ever removes the message it was
//! issued for.

use std::time::{Duration, Instant};

/// Identifies one shown message for its scheduled removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    ticket: NoticeTicket,
    expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct StatusBoard {
    ttl: Duration,
    error: Option<String>,
    message: Option<Notice>,
    next_ticket: u64,
}

impl StatusBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            error: None,
            message: None,
            next_ticket: 0,
        }
    }

    /// Replace the current error. It stays until [`clear_error`](Self::clear_error).
    pub fn show_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show a transient message; it expires `ttl` after `now`.
    pub fn show_message(&mut self, msg: impl Into<String>, now: Instant) -> NoticeTicket {
        self.next_ticket += 1;
        let ticket = NoticeTicket(self.next_ticket);
        self.message = Some(Notice {
            text: msg.into(),
            ticket,
            expires_at: now + self.ttl,
        });
        ticket
    }

    /// Scheduled removal. No-op when the ticket's message was already
    /// replaced or removed.
    pub fn expire(&mut self, ticket: NoticeTicket) {
        if self.message.as_ref().is_some_and(|m| m.ticket == ticket) {
            self.message = None;
        }
    }

    /// Drop the message if its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(ticket) = self
            .message
            .as_ref()
            .filter(|m| now >= m.expires_at)
            .map(|m| m.ticket)
        {
            self.expire(ticket);
        }
    }

    pub fn visible_message(&self, now: Instant) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|m| now < m.expires_at)
            .map(|m| m.text.as_str())
    }
}
