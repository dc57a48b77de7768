use super::*;
use shared::{domain::ObligationId, protocol::ConnectionAction};

use crate::{reducer::reduce, seed::initial_connection};

fn ids(obligations: &[&Obligation]) -> Vec<String> {
    obligations.iter().map(|o| o.id.to_string()).collect()
}

#[test]
fn provider_and_receiver_filters_partition_obligations() {
    let connection = initial_connection();

    assert_eq!(ids(&providing(&connection, Role::Guest)), vec!["obl-1", "obl-2"]);
    assert_eq!(ids(&receiving(&connection, Role::Guest)), vec!["obl-3"]);
    assert_eq!(ids(&providing(&connection, Role::Host)), vec!["obl-3"]);
    assert_eq!(ids(&receiving(&connection, Role::Host)), vec!["obl-1", "obl-2"]);
}

#[test]
fn summary_counts_fulfilled_and_approved_as_active() {
    let seed = initial_connection();
    let summary = ObligationSummary::of(&seed);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.pending, 3);
    assert_eq!(summary.active(), 0);

    let state = [
        ConnectionAction::select_resource("obl-1", "kr-1"),
        ConnectionAction::approve("obl-1"),
        ConnectionAction::select_resource("obl-2", "kr-2"),
        ConnectionAction::select_resource("obl-3", "lr-1"),
        ConnectionAction::reject("obl-3"),
    ]
    .iter()
    .fold(seed, |acc, action| reduce(&acc, action));

    let summary = ObligationSummary::of(&state);
    assert_eq!(summary.pending, 0);
    assert_eq!(summary.fulfilled, 1);
    assert_eq!(summary.approved, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.active(), 2);
}

#[test]
fn controls_follow_role_and_status() {
    let seed = initial_connection();
    let obl1 = seed
        .obligation(&ObligationId::from("obl-1"))
        .expect("obligation");

    let guest = available_controls(&seed, Role::Guest, obl1);
    assert!(guest.can_select_resource);
    assert!(!guest.can_decide);
    assert!(!guest.can_view_artefact);

    let host = available_controls(&seed, Role::Host, obl1);
    assert!(!host.can_select_resource);
    assert!(!host.can_decide);

    let fulfilled = reduce(&seed, &ConnectionAction::select_resource("obl-1", "kr-1"));
    let obl1 = fulfilled
        .obligation(&ObligationId::from("obl-1"))
        .expect("obligation");
    let host = available_controls(&fulfilled, Role::Host, obl1);
    assert!(host.can_decide);
    assert!(host.can_view_artefact);
    assert!(!available_controls(&fulfilled, Role::Guest, obl1).can_decide);
}

#[test]
fn revoked_connection_only_allows_viewing() {
    let state = [
        ConnectionAction::select_resource("obl-1", "kr-1"),
        ConnectionAction::RevokeConnection,
    ]
    .iter()
    .fold(initial_connection(), |acc, action| reduce(&acc, action));

    for obligation in &state.obligations {
        for role in [Role::Host, Role::Guest] {
            let controls = available_controls(&state, role, obligation);
            assert!(!controls.can_select_resource);
            assert!(!controls.can_decide);
            assert_eq!(
                controls.can_view_artefact,
                obligation.consent_artefact.is_some()
            );
        }
    }
}

#[test]
fn selectable_resources_come_from_provider_locker() {
    let connection = initial_connection();
    let obl3 = connection
        .obligation(&ObligationId::from("obl-3"))
        .expect("obligation");
    let names: Vec<&str> = selectable_resources(&connection, obl3)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(names, vec!["lr-1", "lr-2", "lr-3", "lr-4"]);
}
