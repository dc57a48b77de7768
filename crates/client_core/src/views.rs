//! Read-only projections the presentation layer derives from a snapshot.

use serde::Serialize;
use shared::domain::{Connection, Obligation, ObligationStatus, Resource, Role};

/// "Shared by me": obligations where `role` is the data provider.
pub fn providing(connection: &Connection, role: Role) -> Vec<&Obligation> {
    connection
        .obligations
        .iter()
        .filter(|o| o.provider_role == role)
        .collect()
}

/// "From partner": obligations where `role` receives the data.
pub fn receiving(connection: &Connection, role: Role) -> Vec<&Obligation> {
    connection
        .obligations
        .iter()
        .filter(|o| o.provider_role != role)
        .collect()
}

/// The provider locker's catalogue, the only resources a selection may offer.
pub fn selectable_resources<'a>(
    connection: &'a Connection,
    obligation: &Obligation,
) -> &'a [Resource] {
    &connection.party(obligation.provider_role).locker.resources
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ObligationSummary {
    pub total: usize,
    pub pending: usize,
    pub fulfilled: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl ObligationSummary {
    pub fn of(connection: &Connection) -> Self {
        connection
            .obligations
            .iter()
            .fold(Self::default(), |mut summary, obligation| {
                summary.total += 1;
                match obligation.status {
                    ObligationStatus::Pending => summary.pending += 1,
                    ObligationStatus::Fulfilled => summary.fulfilled += 1,
                    ObligationStatus::Approved => summary.approved += 1,
                    ObligationStatus::Rejected => summary.rejected += 1,
                }
                summary
            })
    }

    /// Obligations with a live artefact: fulfilled and awaiting a decision, or approved.
    pub fn active(&self) -> usize {
        self.fulfilled + self.approved
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ObligationControls {
    pub can_select_resource: bool,
    pub can_decide: bool,
    pub can_view_artefact: bool,
}

/// Controls `role` may use on `obligation`. Viewing an artefact stays possible
/// while the connection is revoked; everything that mutates does not.
pub fn available_controls(
    connection: &Connection,
    role: Role,
    obligation: &Obligation,
) -> ObligationControls {
    let established = connection.is_established();
    let is_provider = obligation.provider_role == role;
    ObligationControls {
        can_select_resource: established
            && is_provider
            && obligation.status == ObligationStatus::Pending,
        can_decide: established
            && !is_provider
            && obligation.status == ObligationStatus::Fulfilled,
        can_view_artefact: obligation.consent_artefact.is_some(),
    }
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
