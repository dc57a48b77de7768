//! Plain-text rendering of connection snapshots.

use std::fmt::Write as _;

use client_core::{
    available_controls, providing, receiving, selectable_resources, Notification,
    NotificationKind, ObligationSummary,
};
use shared::domain::{ConsentArtefact, Connection, ConnectionStatus, Obligation, Role};

use crate::commands::Tab;

pub fn render_connection(connection: &Connection, role: Role, tab: Tab) -> String {
    let mut out = String::new();
    let me = connection.party(role);
    let partner = connection.party(role.counterpart());
    let summary = ObligationSummary::of(connection);

    let _ = writeln!(out, "{} [{}]", connection.name, status_label(connection.status));
    let _ = writeln!(out, "  {}", connection.description);
    let _ = writeln!(
        out,
        "  you: {} ({}, {})   partner: {} ({})",
        me.organization.name,
        me.organization.kind,
        role,
        partner.organization.name,
        partner.organization.kind
    );
    let _ = writeln!(
        out,
        "  pending: {}   active: {}   rejected: {}",
        summary.pending,
        summary.active(),
        summary.rejected
    );

    let (label, obligations) = match tab {
        Tab::Shared => ("Shared by me".to_string(), providing(connection, role)),
        Tab::Received => (
            format!("From {}", partner.organization.name),
            receiving(connection, role),
        ),
    };
    let _ = writeln!(out, "\n{label} ({})", obligations.len());
    if obligations.is_empty() {
        let _ = writeln!(out, "  no obligations");
    }
    for obligation in obligations {
        render_obligation_line(&mut out, connection, role, obligation);
    }
    out
}

fn render_obligation_line(
    out: &mut String,
    connection: &Connection,
    role: Role,
    obligation: &Obligation,
) {
    let controls = available_controls(connection, role, obligation);
    let mut actions = Vec::new();
    if controls.can_select_resource {
        actions.push("select");
    }
    if controls.can_decide {
        actions.push("approve/reject");
    }
    if controls.can_view_artefact {
        actions.push("artefact");
    }
    let selected = obligation
        .selected_resource_id
        .as_ref()
        .map(|id| format!(" -> {id}"))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "  {}. [{}] {:<28} {:?}{}  {}",
        obligation.sno,
        obligation.id,
        obligation.name,
        obligation.status,
        selected,
        if actions.is_empty() {
            String::new()
        } else {
            format!("({})", actions.join(", "))
        }
    );
    let _ = writeln!(out, "     purpose: {}", obligation.purpose);
}

pub fn render_resources(connection: &Connection, obligation: &Obligation) -> String {
    let mut out = String::new();
    let provider = connection.party(obligation.provider_role);
    let _ = writeln!(
        out,
        "Select resource for {} from {}",
        obligation.name, provider.locker.name
    );
    for resource in selectable_resources(connection, obligation) {
        let _ = writeln!(
            out,
            "  {:<6} {:<28} {:?} {}",
            resource.id, resource.name, resource.kind, resource.size
        );
    }
    out
}

pub fn render_artefact(artefact: &ConsentArtefact, viewer: Role) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Consent artefact {}", artefact.id);
    let _ = writeln!(out, "  obligation: {}", artefact.obligation_id);
    let _ = writeln!(
        out,
        "  owner: {}   receiver: {}   viewing as: {}",
        artefact.owner_role, artefact.receiver_role, viewer
    );
    let _ = writeln!(out, "  purpose: {}", artefact.purpose);
    let _ = writeln!(
        out,
        "  resource: {} ({})",
        artefact.resource_name, artefact.resource_id
    );
    let _ = writeln!(
        out,
        "  valid: {} .. {}",
        artefact.valid_from.format("%Y-%m-%d %H:%M UTC"),
        artefact.valid_until.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out, "  conditions:");
    for condition in &artefact.conditions {
        let _ = writeln!(out, "    - {condition}");
    }
    out
}

pub fn render_notifications(notifications: &[Notification]) -> String {
    let mut out = String::new();
    for notification in notifications {
        let tag = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warn",
            NotificationKind::Error => "error",
        };
        let _ = write!(out, "[{tag}] {}", notification.title);
        if let Some(message) = &notification.message {
            let _ = write!(out, ": {message}");
        }
        out.push('\n');
    }
    out
}

fn status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Established => "established",
        ConnectionStatus::Pending => "pending",
        ConnectionStatus::Revoked => "revoked",
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
