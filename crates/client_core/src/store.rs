use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::{
    domain::Connection,
    error::{TransitionError, TransitionRejection},
    protocol::{ConnectionAction, ConnectionEvent},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{error, info, warn};

use crate::{reducer::try_reduce_at, seed::initial_connection};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Owner of the single live [`Connection`]. Dispatches are serialized through
/// one lock; readers get immutable snapshots that later dispatches never touch.
pub struct ConnectionStore {
    current: Mutex<Arc<Connection>>,
    events: broadcast::Sender<ConnectionEvent>,
}

impl Default for ConnectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionStore {
    pub fn new() -> Self {
        Self::with_connection(initial_connection())
    }

    pub fn with_connection(connection: Connection) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            current: Mutex::new(Arc::new(connection)),
            events,
        }
    }

    pub async fn snapshot(&self) -> Arc<Connection> {
        self.current.lock().await.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ConnectionEvent> {
        self.events.subscribe()
    }

    pub async fn dispatch(
        &self,
        action: ConnectionAction,
    ) -> Result<Arc<Connection>, TransitionError> {
        self.dispatch_at(action, Utc::now()).await
    }

    /// Applies `action` against the current connection. A rejected action leaves
    /// the stored snapshot untouched and is published as `ActionRejected`.
    pub async fn dispatch_at(
        &self,
        action: ConnectionAction,
        now: DateTime<Utc>,
    ) -> Result<Arc<Connection>, TransitionError> {
        let mut guard = self.current.lock().await;
        let result = try_reduce_at(&guard, &action, now);
        match result {
            Ok(next) => {
                let next = Arc::new(next);
                *guard = next.clone();
                drop(guard);
                info!(
                    action = action.name(),
                    connection_id = %next.id,
                    status = ?next.status,
                    "consent: action applied"
                );
                if let Some(event) = applied_event(&action, &next) {
                    let _ = self.events.send(event);
                }
                Ok(next)
            }
            Err(err) => {
                drop(guard);
                if err.is_invariant_violation() {
                    error!(action = action.name(), error = %err, "consent: invariant violation");
                } else {
                    warn!(action = action.name(), error = %err, "consent: action rejected");
                }
                let _ = self
                    .events
                    .send(ConnectionEvent::ActionRejected(TransitionRejection::from(
                        err.clone(),
                    )));
                Err(err)
            }
        }
    }
}

fn applied_event(action: &ConnectionAction, next: &Connection) -> Option<ConnectionEvent> {
    let event = match action {
        ConnectionAction::SelectResource { obligation_id, .. } => {
            let artefact = next.obligation(obligation_id)?.consent_artefact.clone()?;
            ConnectionEvent::ObligationFulfilled {
                obligation_id: obligation_id.clone(),
                artefact,
            }
        }
        ConnectionAction::ApproveConsent { obligation_id } => ConnectionEvent::ConsentApproved {
            obligation_id: obligation_id.clone(),
        },
        ConnectionAction::RejectConsent { obligation_id } => ConnectionEvent::ConsentRejected {
            obligation_id: obligation_id.clone(),
        },
        ConnectionAction::RevokeConnection => ConnectionEvent::ConnectionRevoked,
        ConnectionAction::RestoreConnection => ConnectionEvent::ConnectionRestored,
        ConnectionAction::Reset => ConnectionEvent::ConnectionReset,
    };
    Some(event)
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
