use super::*;
use shared::domain::{ObligationId, ResourceId};

#[test]
fn seed_has_fixed_shape() {
    let connection = initial_connection();

    assert_eq!(connection.id.as_str(), "conn-1");
    assert_eq!(connection.status, ConnectionStatus::Established);
    assert_eq!(connection.host.organization.name, "LIC Insurance");
    assert_eq!(connection.guest.organization.name, "Kaveri Hospital");
    assert_eq!(connection.host.locker.resources.len(), 4);
    assert_eq!(connection.guest.locker.resources.len(), 5);
    assert_eq!(connection.host.locker.owner, connection.host.organization);
    assert_eq!(connection.guest.locker.owner, connection.guest.organization);
}

#[test]
fn seed_obligations_start_pending() {
    let connection = initial_connection();
    let roles: Vec<Role> = connection
        .obligations
        .iter()
        .map(|o| o.provider_role)
        .collect();
    assert_eq!(roles, vec![Role::Guest, Role::Guest, Role::Host]);

    for (index, obligation) in connection.obligations.iter().enumerate() {
        assert_eq!(obligation.sno as usize, index + 1);
        assert_eq!(obligation.status, ObligationStatus::Pending);
        assert_eq!(obligation.transaction_type, TransactionType::Share);
        assert!(obligation.selected_resource_id.is_none());
        assert!(obligation.consent_artefact.is_none());
    }
}

#[test]
fn resource_ids_are_unique_within_each_locker() {
    let connection = initial_connection();
    for party in [&connection.host, &connection.guest] {
        let mut ids: Vec<&ResourceId> = party.locker.resources.iter().map(|r| &r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), party.locker.resources.len());
    }
}

#[test]
fn every_call_returns_an_independent_value() {
    let mut first = initial_connection();
    let second = initial_connection();
    assert_eq!(first, second);

    first.obligations[0].status = ObligationStatus::Approved;
    first.host.locker.resources.clear();

    let third = initial_connection();
    assert_eq!(second, third);
    assert_eq!(
        third
            .obligation(&ObligationId::from("obl-1"))
            .map(|o| o.status),
        Some(ObligationStatus::Pending)
    );
}
