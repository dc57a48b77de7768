//! View-local state of the demo client around the shared connection store.

use std::time::Instant;

use anyhow::Context;
use client_core::{notification_for, ConnectionStore, NotificationCenter, NotificationConfig};
use shared::{
    domain::{ObligationId, Role},
    protocol::{ConnectionAction, ConnectionEvent},
};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::warn;

use crate::{
    commands::{ReplCommand, Tab, HELP},
    config::Settings,
    render::{render_artefact, render_connection, render_notifications, render_resources},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

pub struct Session {
    store: ConnectionStore,
    events: broadcast::Receiver<ConnectionEvent>,
    notifications: NotificationCenter,
    role: Role,
    tab: Tab,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        let store = ConnectionStore::new();
        let events = store.subscribe_events();
        Self {
            store,
            events,
            notifications: NotificationCenter::new(
                settings.max_notifications,
                settings.notification_duration,
            ),
            role: settings.current_role,
            tab: settings.active_tab,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[cfg(test)]
    pub fn store(&self) -> &ConnectionStore {
        &self.store
    }

    pub async fn execute(&mut self, command: ReplCommand) -> anyhow::Result<Step> {
        let output = match command {
            ReplCommand::Quit => return Ok(Step::Quit),
            ReplCommand::Help => HELP.to_string(),
            ReplCommand::Show => self.render_view().await,
            ReplCommand::Json => {
                let snapshot = self.store.snapshot().await;
                serde_json::to_string_pretty(&*snapshot).context("failed to encode connection")?
            }
            ReplCommand::SwitchRole(role) => {
                self.role = role.unwrap_or_else(|| self.role.counterpart());
                self.render_view().await
            }
            ReplCommand::SwitchTab(tab) => {
                self.tab = tab;
                self.render_view().await
            }
            ReplCommand::Dismiss => {
                self.notifications.clear_all();
                "notifications cleared".to_string()
            }
            ReplCommand::Resources(obligation_id) => {
                let snapshot = self.store.snapshot().await;
                match snapshot.obligation(&obligation_id) {
                    Some(obligation) => render_resources(&snapshot, obligation),
                    None => format!("no obligation {obligation_id}"),
                }
            }
            ReplCommand::Artefact(obligation_id) => self.render_artefact(&obligation_id).await,
            ReplCommand::Dispatch(action) => {
                self.dispatch(action).await;
                self.render_view().await
            }
        };
        Ok(Step::Continue(output))
    }

    /// Rejections are reported through notifications, not as errors.
    pub async fn dispatch(&mut self, action: ConnectionAction) {
        let _ = self.store.dispatch(action).await;
        self.drain_events();
    }

    fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    let (kind, title, message) = notification_for(&event);
                    self.notifications
                        .show(kind, title, message, NotificationConfig::default());
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "consent: notification feed lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    pub async fn render_view(&mut self) -> String {
        self.notifications.prune_expired(Instant::now());
        let snapshot = self.store.snapshot().await;
        let mut out = render_notifications(self.notifications.visible());
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_connection(&snapshot, self.role, self.tab));
        out
    }

    async fn render_artefact(&self, obligation_id: &ObligationId) -> String {
        let snapshot = self.store.snapshot().await;
        match snapshot.obligation(obligation_id) {
            Some(obligation) => match &obligation.consent_artefact {
                Some(artefact) => render_artefact(artefact, self.role),
                None => format!(
                    "obligation {obligation_id} is {:?}; no artefact yet",
                    obligation.status
                ),
            },
            None => format!("no obligation {obligation_id}"),
        }
    }

    #[cfg(test)]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
