//! Transient messages shown over the board

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays up unless told otherwise
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Oldest toasts are dropped beyond this many
const CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub style: MessageStyle,
    /// `None` stays until cleared
    expires_at: Option<Instant>,
}

impl Toast {
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.expires_at.is_none()
    }
}

/// Queue of toasts, newest last
#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
}

impl Toasts {
    /// Show a message for `duration`, or until cleared if `None`
    pub fn show_message(
        &mut self,
        text: impl Into<String>,
        style: MessageStyle,
        duration: Option<Duration>,
    ) {
        self.show_message_at(text, style, duration, Instant::now());
    }

    pub fn show_message_at(
        &mut self,
        text: impl Into<String>,
        style: MessageStyle,
        duration: Option<Duration>,
        now: Instant,
    ) {
        self.items.push_back(Toast {
            text: text.into(),
            style,
            expires_at: duration.map(|d| now + d),
        });

        while self.items.len() > CAPACITY {
            self.items.pop_front();
        }
    }

    /// Drop expired toasts; returns `true` if any were removed
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items
            .retain(|toast| toast.expires_at.is_none_or(|deadline| deadline > now));
        self.items.len() != before
    }

    /// Earliest pending expiry
    #[must_use]
    pub fn next_expiry(&self) -> Option<Instant> {
        self.items.iter().filter_map(|t| t.expires_at).min()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
