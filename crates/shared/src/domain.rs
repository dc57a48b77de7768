use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

id_newtype!(ConnectionId);
id_newtype!(OrganizationId);
id_newtype!(LockerId);
id_newtype!(ResourceId);
id_newtype!(ObligationId);
id_newtype!(ArtefactId);

/// One of the two fixed participant slots of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Host,
    Guest,
}

impl Role {
    pub fn counterpart(self) -> Self {
        match self {
            Role::Host => Role::Guest,
            Role::Guest => Role::Host,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Host => "HOST",
            Role::Guest => "GUEST",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Pending` is reserved for a connection-request stage; the seed never uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionStatus {
    Established,
    Pending,
    Revoked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObligationStatus {
    Pending,
    Fulfilled,
    Approved,
    Rejected,
}

impl ObligationStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, ObligationStatus::Approved | ObligationStatus::Rejected)
    }

    /// Position in the lifecycle; both decisions share the last rank.
    pub fn rank(self) -> u8 {
        match self {
            ObligationStatus::Pending => 0,
            ObligationStatus::Fulfilled => 1,
            ObligationStatus::Approved | ObligationStatus::Rejected => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Share,
    Stream,
    Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Pdf,
    Image,
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locker {
    pub id: LockerId,
    pub name: String,
    pub owner: Organization,
    pub resources: Vec<Resource>,
}

impl Locker {
    pub fn resource(&self, resource_id: &ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| &r.id == resource_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub organization: Organization,
    pub locker: Locker,
}

/// Immutable permission record created when a provider selects a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentArtefact {
    pub id: ArtefactId,
    pub connection_id: ConnectionId,
    pub obligation_id: ObligationId,
    pub owner_role: Role,
    pub receiver_role: Role,
    pub purpose: String,
    pub resource_id: ResourceId,
    pub resource_name: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub conditions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    pub id: ObligationId,
    pub sno: u32,
    pub name: String,
    pub purpose: String,
    pub transaction_type: TransactionType,
    pub status: ObligationStatus,
    pub provider_role: Role,
    #[serde(default)]
    pub selected_resource_id: Option<ResourceId>,
    #[serde(default)]
    pub consent_artefact: Option<ConsentArtefact>,
}

impl Obligation {
    pub fn receiver_role(&self) -> Role {
        self.provider_role.counterpart()
    }
}

/// Root aggregate: the single relationship between a host and a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub name: String,
    pub description: String,
    pub status: ConnectionStatus,
    pub host: Party,
    pub guest: Party,
    pub obligations: Vec<Obligation>,
}

impl Connection {
    pub fn party(&self, role: Role) -> &Party {
        match role {
            Role::Host => &self.host,
            Role::Guest => &self.guest,
        }
    }

    pub fn obligation(&self, obligation_id: &ObligationId) -> Option<&Obligation> {
        self.obligations.iter().find(|o| &o.id == obligation_id)
    }

    pub fn is_established(&self) -> bool {
        self.status == ConnectionStatus::Established
    }
}
