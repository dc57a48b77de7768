//! Toast notifications shown alongside the connection view. Independent of the
//! consent state machine; the CLI feeds it from store events.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{error::RejectionCode, protocol::ConnectionEvent};
use uuid::Uuid;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);
pub const DEFAULT_MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationConfig {
    pub duration: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    visible: Vec<Notification>,
    max_visible: usize,
    default_duration: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE, DEFAULT_DURATION)
    }
}

impl NotificationCenter {
    pub fn new(max_visible: usize, default_duration: Duration) -> Self {
        Self {
            visible: Vec::new(),
            max_visible: max_visible.max(1),
            default_duration,
        }
    }

    pub fn show(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: Option<String>,
        config: NotificationConfig,
    ) -> String {
        self.show_at(kind, title, message, config, Instant::now())
    }

    /// Newest first; anything beyond `max_visible` is dropped immediately.
    pub fn show_at(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: Option<String>,
        config: NotificationConfig,
        now: Instant,
    ) -> String {
        let id = format!("notif-{}", Uuid::new_v4().simple());
        let duration = config.duration.unwrap_or(self.default_duration);
        self.visible.insert(
            0,
            Notification {
                id: id.clone(),
                kind,
                title: title.into(),
                message,
                timestamp: Utc::now(),
                expires_at: now + duration,
            },
        );
        self.visible.truncate(self.max_visible);
        id
    }

    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }

    pub fn clear_all(&mut self) {
        self.visible.clear();
    }

    /// Auto-dismiss: drops every notification whose deadline has passed.
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.visible.len();
        self.visible.retain(|n| n.expires_at > now);
        before - self.visible.len()
    }

    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }
}

pub fn notification_for(event: &ConnectionEvent) -> (NotificationKind, String, Option<String>) {
    match event {
        ConnectionEvent::ObligationFulfilled {
            obligation_id,
            artefact,
        } => (
            NotificationKind::Success,
            "Resource shared".to_string(),
            Some(format!(
                "{} selected for {obligation_id}; consent artefact {} generated",
                artefact.resource_name, artefact.id
            )),
        ),
        ConnectionEvent::ConsentApproved { obligation_id } => (
            NotificationKind::Success,
            "Consent approved".to_string(),
            Some(format!("Obligation {obligation_id} approved")),
        ),
        ConnectionEvent::ConsentRejected { obligation_id } => (
            NotificationKind::Warning,
            "Consent rejected".to_string(),
            Some(format!("Obligation {obligation_id} rejected")),
        ),
        ConnectionEvent::ConnectionRevoked => (
            NotificationKind::Warning,
            "Connection revoked".to_string(),
            Some("No data flows without an active connection".to_string()),
        ),
        ConnectionEvent::ConnectionRestored => (
            NotificationKind::Info,
            "Connection restored".to_string(),
            None,
        ),
        ConnectionEvent::ConnectionReset => (
            NotificationKind::Info,
            "Demo reset".to_string(),
            Some("Connection restored to its initial state".to_string()),
        ),
        ConnectionEvent::ActionRejected(rejection) => {
            let kind = match rejection.code {
                RejectionCode::ResourceNotFound => NotificationKind::Error,
                RejectionCode::ConnectionNotEstablished
                | RejectionCode::ObligationNotFound
                | RejectionCode::InvalidTransition => NotificationKind::Warning,
            };
            (
                kind,
                "Action not applied".to_string(),
                Some(rejection.message.clone()),
            )
        }
    }
}

#[cfg(test)]
#[path = "tests/notifications_tests.rs"]
mod tests;
