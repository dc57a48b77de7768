use serde::{Deserialize, Serialize};

use crate::{
    domain::{ConsentArtefact, ObligationId, ResourceId},
    error::TransitionRejection,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ConnectionAction {
    SelectResource {
        obligation_id: ObligationId,
        resource_id: ResourceId,
    },
    ApproveConsent {
        obligation_id: ObligationId,
    },
    RejectConsent {
        obligation_id: ObligationId,
    },
    RevokeConnection,
    RestoreConnection,
    Reset,
}

impl ConnectionAction {
    pub fn select_resource(
        obligation_id: impl Into<ObligationId>,
        resource_id: impl Into<ResourceId>,
    ) -> Self {
        Self::SelectResource {
            obligation_id: obligation_id.into(),
            resource_id: resource_id.into(),
        }
    }

    pub fn approve(obligation_id: impl Into<ObligationId>) -> Self {
        Self::ApproveConsent {
            obligation_id: obligation_id.into(),
        }
    }

    pub fn reject(obligation_id: impl Into<ObligationId>) -> Self {
        Self::RejectConsent {
            obligation_id: obligation_id.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConnectionAction::SelectResource { .. } => "select_resource",
            ConnectionAction::ApproveConsent { .. } => "approve_consent",
            ConnectionAction::RejectConsent { .. } => "reject_consent",
            ConnectionAction::RevokeConnection => "revoke_connection",
            ConnectionAction::RestoreConnection => "restore_connection",
            ConnectionAction::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ConnectionEvent {
    ObligationFulfilled {
        obligation_id: ObligationId,
        artefact: ConsentArtefact,
    },
    ConsentApproved {
        obligation_id: ObligationId,
    },
    ConsentRejected {
        obligation_id: ObligationId,
    },
    ConnectionRevoked,
    ConnectionRestored,
    ConnectionReset,
    ActionRejected(TransitionRejection),
}
