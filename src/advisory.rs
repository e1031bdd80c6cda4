//! Toast advisories emitted towards the presentation layer.
//!
//! Fire-and-forget: the core queues them, the presentation drains and
//! renders them; no return value is consumed.

use serde::Serialize;

use crate::models::notification::NotificationType;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub title: String,
    pub message: String,
    pub severity: NotificationType,
}

impl Advisory {
    pub fn success(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity: NotificationType::Success,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity: NotificationType::Error,
        }
    }
}

#[derive(Default)]
pub struct AdvisoryQueue {
    pending: Vec<Advisory>,
}

impl AdvisoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, advisory: Advisory) {
        self.pending.push(advisory);
    }

    /// Hand all pending advisories to the presentation layer.
    pub fn drain(&mut self) -> Vec<Advisory> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
