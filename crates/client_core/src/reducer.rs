//! Pure transition function over [`Connection`] values.
//!
//! [`try_reduce_at`] reports why an action did not apply; [`reduce`] and
//! [`reduce_at`] absorb every rejection and hand back a value equal to the
//! input, which is what the presentation layer dispatches through.

use chrono::{DateTime, Utc};
use shared::{
    domain::{Connection, ConnectionStatus, Obligation, ObligationId, ObligationStatus},
    error::{RejectionCode, TransitionError},
    protocol::ConnectionAction,
};
use tracing::{debug, error};

use crate::{artefact::generate_consent_artefact, seed::initial_connection};

pub fn reduce(state: &Connection, action: &ConnectionAction) -> Connection {
    reduce_at(state, action, Utc::now())
}

pub fn reduce_at(state: &Connection, action: &ConnectionAction, now: DateTime<Utc>) -> Connection {
    match try_reduce_at(state, action, now) {
        Ok(next) => next,
        Err(err) => {
            if err.is_invariant_violation() {
                error!(action = action.name(), error = %err, "consent: invariant violation, action ignored");
            } else {
                debug!(action = action.name(), error = %err, "consent: action ignored");
            }
            state.clone()
        }
    }
}

pub fn try_reduce(
    state: &Connection,
    action: &ConnectionAction,
) -> Result<Connection, TransitionError> {
    try_reduce_at(state, action, Utc::now())
}

pub fn try_reduce_at(
    state: &Connection,
    action: &ConnectionAction,
    now: DateTime<Utc>,
) -> Result<Connection, TransitionError> {
    match action {
        ConnectionAction::SelectResource {
            obligation_id,
            resource_id,
        } => {
            let obligation =
                obligation_in_status(state, obligation_id, ObligationStatus::Pending)?;
            let artefact = generate_consent_artefact(state, obligation, resource_id, now)?;
            Ok(with_obligation(state, obligation_id, |obl| Obligation {
                status: ObligationStatus::Fulfilled,
                selected_resource_id: Some(resource_id.clone()),
                consent_artefact: Some(artefact.clone()),
                ..obl.clone()
            }))
        }
        ConnectionAction::ApproveConsent { obligation_id } => {
            decide(state, obligation_id, ObligationStatus::Approved)
        }
        ConnectionAction::RejectConsent { obligation_id } => {
            decide(state, obligation_id, ObligationStatus::Rejected)
        }
        ConnectionAction::RevokeConnection => Ok(with_status(state, ConnectionStatus::Revoked)),
        ConnectionAction::RestoreConnection => {
            Ok(with_status(state, ConnectionStatus::Established))
        }
        ConnectionAction::Reset => Ok(initial_connection()),
    }
}

fn decide(
    state: &Connection,
    obligation_id: &ObligationId,
    outcome: ObligationStatus,
) -> Result<Connection, TransitionError> {
    obligation_in_status(state, obligation_id, ObligationStatus::Fulfilled)?;
    Ok(with_obligation(state, obligation_id, |obl| Obligation {
        status: outcome,
        ..obl.clone()
    }))
}

/// Checks connection status, obligation existence and source status, in that order.
fn obligation_in_status<'a>(
    state: &'a Connection,
    obligation_id: &ObligationId,
    required: ObligationStatus,
) -> Result<&'a Obligation, TransitionError> {
    if !state.is_established() {
        return Err(TransitionError::new(
            RejectionCode::ConnectionNotEstablished,
            format!("connection {} is {:?}", state.id, state.status),
        ));
    }
    let obligation = state.obligation(obligation_id).ok_or_else(|| {
        TransitionError::new(
            RejectionCode::ObligationNotFound,
            format!("obligation {obligation_id} not found in connection {}", state.id),
        )
    })?;
    if obligation.status != required {
        return Err(TransitionError::new(
            RejectionCode::InvalidTransition,
            format!(
                "obligation {obligation_id} is {:?}, expected {required:?}",
                obligation.status
            ),
        ));
    }
    Ok(obligation)
}

fn with_obligation(
    state: &Connection,
    obligation_id: &ObligationId,
    update: impl Fn(&Obligation) -> Obligation,
) -> Connection {
    let mut next = state.clone();
    for obligation in next.obligations.iter_mut().filter(|o| &o.id == obligation_id) {
        *obligation = update(obligation);
    }
    next
}

fn with_status(state: &Connection, status: ConnectionStatus) -> Connection {
    let mut next = state.clone();
    next.status = status;
    next
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
