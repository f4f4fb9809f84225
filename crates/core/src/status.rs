use std::time::{Duration, Instant};

use crate::STATUS_CLEAR_AFTER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient feedback shown after an action; clears itself after
/// [`STATUS_CLEAR_AFTER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    shown_at: Instant,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self { text: text.into(), kind, shown_at: Instant::now() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= STATUS_CLEAR_AFTER
    }

    /// Time left before the message clears, zero once expired.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        STATUS_CLEAR_AFTER.saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}
