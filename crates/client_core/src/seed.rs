//! Canned starting point of the demo: LIC Insurance (host) linked with
//! Kaveri Hospital (guest), three pending obligations.

use shared::domain::{
    Connection, ConnectionStatus, Locker, Obligation, ObligationStatus, Organization, Party,
    Resource, ResourceKind, Role, TransactionType,
};

pub const SEED_CONNECTION_ID: &str = "conn-1";

struct OrganizationSeed {
    id: &'static str,
    name: &'static str,
    kind: &'static str,
}

struct LockerSeed {
    id: &'static str,
    name: &'static str,
    resources: &'static [(&'static str, &'static str, ResourceKind, &'static str)],
}

struct ObligationSeed {
    id: &'static str,
    name: &'static str,
    purpose: &'static str,
    provider_role: Role,
}

const LIC: OrganizationSeed = OrganizationSeed {
    id: "org-lic",
    name: "LIC Insurance",
    kind: "Insurance Provider",
};

const KAVERI: OrganizationSeed = OrganizationSeed {
    id: "org-kaveri",
    name: "Kaveri Hospital",
    kind: "Healthcare Provider",
};

const LIC_LOCKER: LockerSeed = LockerSeed {
    id: "locker-lic",
    name: "Kaveri Hospital Insurance Claims",
    resources: &[
        ("lr-1", "Policy Document #A2024", ResourceKind::Pdf, "2.1 MB"),
        ("lr-2", "Claim Form Template", ResourceKind::Pdf, "340 KB"),
        ("lr-3", "Coverage Details", ResourceKind::Text, "28 KB"),
        ("lr-4", "Premium Payment Receipt", ResourceKind::Pdf, "156 KB"),
    ],
};

const KAVERI_LOCKER: LockerSeed = LockerSeed {
    id: "locker-kaveri",
    name: "Health Records Locker",
    resources: &[
        ("kr-1", "Insurance Claim Receipt", ResourceKind::Pdf, "620 KB"),
        ("kr-2", "Chest X-Ray Report", ResourceKind::Image, "3.4 MB"),
        ("kr-3", "CBC Blood Test Report", ResourceKind::Pdf, "980 KB"),
        ("kr-4", "Treatment Summary", ResourceKind::Text, "12 KB"),
        ("kr-5", "Patient Medical History", ResourceKind::Pdf, "1.2 MB"),
    ],
};

const OBLIGATIONS: &[ObligationSeed] = &[
    ObligationSeed {
        id: "obl-1",
        name: "Insurance Claim Receipt",
        purpose: "Claiming Insurance for Patient Data",
        provider_role: Role::Guest,
    },
    ObligationSeed {
        id: "obl-2",
        name: "Medical Records Request",
        purpose: "Verification of Treatment History",
        provider_role: Role::Guest,
    },
    ObligationSeed {
        id: "obl-3",
        name: "Policy Coverage Information",
        purpose: "Patient Coverage Verification",
        provider_role: Role::Host,
    },
];

/// Builds a fresh seed connection. Every call constructs new values, so no two
/// returned connections share any substructure.
pub fn initial_connection() -> Connection {
    Connection {
        id: SEED_CONNECTION_ID.into(),
        name: "LIC Policy Link".to_string(),
        description:
            "Sharing policy coverage details for cashless treatment authorization.".to_string(),
        status: ConnectionStatus::Established,
        host: party(&LIC, &LIC_LOCKER),
        guest: party(&KAVERI, &KAVERI_LOCKER),
        obligations: OBLIGATIONS
            .iter()
            .zip(1u32..)
            .map(|(seed, sno)| obligation(seed, sno))
            .collect(),
    }
}

fn organization(seed: &OrganizationSeed) -> Organization {
    Organization {
        id: seed.id.into(),
        name: seed.name.to_string(),
        kind: seed.kind.to_string(),
    }
}

fn party(org: &OrganizationSeed, locker: &LockerSeed) -> Party {
    Party {
        organization: organization(org),
        locker: Locker {
            id: locker.id.into(),
            name: locker.name.to_string(),
            owner: organization(org),
            resources: locker
                .resources
                .iter()
                .map(|(id, name, kind, size)| Resource {
                    id: (*id).into(),
                    name: (*name).to_string(),
                    kind: *kind,
                    size: (*size).to_string(),
                })
                .collect(),
        },
    }
}

fn obligation(seed: &ObligationSeed, sno: u32) -> Obligation {
    Obligation {
        id: seed.id.into(),
        sno,
        name: seed.name.to_string(),
        purpose: seed.purpose.to_string(),
        transaction_type: TransactionType::Share,
        status: ObligationStatus::Pending,
        provider_role: seed.provider_role,
        selected_resource_id: None,
        consent_artefact: None,
    }
}

#[cfg(test)]
#[path = "tests/seed_tests.rs"]
mod tests;
