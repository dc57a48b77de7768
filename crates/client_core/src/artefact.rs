use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Months, Utc};
use shared::{
    domain::{ArtefactId, ConsentArtefact, Connection, Obligation, ResourceId},
    error::{RejectionCode, TransitionError},
};

pub const CONSENT_CONDITIONS: [&str; 4] = [
    "Data will be used only for the stated purpose",
    "Data must not be shared with third parties",
    "Access expires after the validity period",
    "Data owner can revoke consent at any time",
];

/// Same day of the following month, clamped to that month's last day
/// (Jan 31 becomes Feb 28, or Feb 29 in a leap year).
pub fn one_month_after(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.checked_add_months(Months::new(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

static ARTEFACT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// `ca-<obligation>-<unix millis>-<seq>`. The sequence is process-wide, so ids
/// stay distinct across resets and within the same millisecond.
pub fn artefact_id(obligation: &Obligation, now: DateTime<Utc>) -> ArtefactId {
    let seq = ARTEFACT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ArtefactId(format!(
        "ca-{}-{}-{seq}",
        obligation.id,
        now.timestamp_millis()
    ))
}

/// Builds the artefact binding `resource_id` to `obligation`. The resource must
/// come from the provider's locker.
pub fn generate_consent_artefact(
    connection: &Connection,
    obligation: &Obligation,
    resource_id: &ResourceId,
    now: DateTime<Utc>,
) -> Result<ConsentArtefact, TransitionError> {
    let owner_role = obligation.provider_role;
    let locker = &connection.party(owner_role).locker;
    let resource = locker.resource(resource_id).ok_or_else(|| {
        TransitionError::new(
            RejectionCode::ResourceNotFound,
            format!(
                "resource {resource_id} is not in {owner_role} locker {} for obligation {}",
                locker.id, obligation.id
            ),
        )
    })?;

    Ok(ConsentArtefact {
        id: artefact_id(obligation, now),
        connection_id: connection.id.clone(),
        obligation_id: obligation.id.clone(),
        owner_role,
        receiver_role: obligation.receiver_role(),
        purpose: obligation.purpose.clone(),
        resource_id: resource.id.clone(),
        resource_name: resource.name.clone(),
        valid_from: now,
        valid_until: one_month_after(now),
        conditions: CONSENT_CONDITIONS.iter().map(|c| c.to_string()).collect(),
        created_at: now,
    })
}

#[cfg(test)]
#[path = "tests/artefact_tests.rs"]
mod tests;
