//! Toast notifications
//!
//! A [`Notifier`] pushes cards into a [`ToastContainer`] when one is attached
//! and otherwise falls back to a log line. Cards expire after 2.5 seconds.

use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::ToastKind;

/// How long a card stays up before it is removed
pub const TOAST_LIFETIME: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: &'static str,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= TOAST_LIFETIME
    }
}

/// Stack of visible toast cards, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastContainer {
    cards: Vec<Toast>,
    next_id: u64,
}

impl ToastContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: String, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.cards.push(Toast {
            id,
            kind,
            title: kind.title(),
            message,
            created_at: now,
        });
        id
    }

    /// Remove a card by id; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.cards.retain(|card| card.id != id);
    }

    pub fn dismiss_latest(&mut self) {
        self.cards.pop();
    }

    /// Drop every card older than [`TOAST_LIFETIME`]
    pub fn expire(&mut self, now: Instant) {
        self.cards.retain(|card| !card.is_expired(now));
    }

    pub fn cards(&self) -> &[Toast] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Shows notifications as toast cards, or logs them when no container exists
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    container: Option<ToastContainer>,
}

impl Notifier {
    pub fn with_container() -> Self {
        Self {
            container: Some(ToastContainer::new()),
        }
    }

    /// Log-only notifier for headless runs
    pub fn headless() -> Self {
        Self { container: None }
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        match self.container.as_mut() {
            Some(container) => {
                container.push(kind, message, Instant::now());
            }
            None => match kind {
                ToastKind::Error => error!("[{}] {}", kind.as_str(), message),
                _ => info!("[{}] {}", kind.as_str(), message),
            },
        }
    }

    pub fn container(&self) -> Option<&ToastContainer> {
        self.container.as_ref()
    }

    pub fn container_mut(&mut self) -> Option<&mut ToastContainer> {
        self.container.as_mut()
    }
}
