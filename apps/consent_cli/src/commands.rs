//! Line commands typed into the interactive session.

use shared::{
    domain::{ObligationId, ResourceId, Role},
    protocol::ConnectionAction,
};
use thiserror::Error;

/// Which obligation list the view shows; local to the client, not part of the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Shared,
    Received,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Shared => "shared",
            Tab::Received => "received",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Show,
    Json,
    Help,
    Quit,
    SwitchRole(Option<Role>),
    SwitchTab(Tab),
    Resources(ObligationId),
    Artefact(ObligationId),
    Dismiss,
    Dispatch(ConnectionAction),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown role '{0}', expected host or guest")]
    Role(String),
    #[error("unknown tab '{0}', expected shared or received")]
    Tab(String),
}

pub const HELP: &str = "\
commands:
  show                      connection header and current tab
  role [host|guest]         switch (or toggle) the active role
  tab <shared|received>     switch obligation list
  resources <obligation>    resources the provider may select
  select <obligation> <res> share a resource, generating a consent artefact
  approve <obligation>      approve a fulfilled obligation
  reject <obligation>       reject a fulfilled obligation
  artefact <obligation>     show the consent artefact
  revoke | restore          revoke or restore the connection
  reset                     restore the demo seed
  dismiss                   clear notifications
  json                      dump the connection as JSON
  quit";

pub fn parse_role(raw: &str) -> Option<Role> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "host" => Some(Role::Host),
        "guest" => Some(Role::Guest),
        _ => None,
    }
}

pub fn parse_tab(raw: &str) -> Option<Tab> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "shared" => Some(Tab::Shared),
        "received" => Some(Tab::Received),
        _ => None,
    }
}

pub fn parse_command(line: &str) -> Result<ReplCommand, CommandParseError> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(CommandParseError::Empty);
    };
    let args: Vec<&str> = parts.collect();

    let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("show", []) => ReplCommand::Show,
        ("json", []) => ReplCommand::Json,
        ("help" | "?", []) => ReplCommand::Help,
        ("quit" | "exit", []) => ReplCommand::Quit,
        ("dismiss", []) => ReplCommand::Dismiss,
        ("role", []) => ReplCommand::SwitchRole(None),
        ("role", [role]) => ReplCommand::SwitchRole(Some(
            parse_role(role).ok_or_else(|| CommandParseError::Role(role.to_string()))?,
        )),
        ("role", _) => return Err(CommandParseError::Usage("role [host|guest]")),
        ("tab", [tab]) => ReplCommand::SwitchTab(
            parse_tab(tab).ok_or_else(|| CommandParseError::Tab(tab.to_string()))?,
        ),
        ("tab", _) => return Err(CommandParseError::Usage("tab <shared|received>")),
        ("resources", [obligation]) => ReplCommand::Resources(ObligationId::from(*obligation)),
        ("resources", _) => return Err(CommandParseError::Usage("resources <obligation>")),
        ("artefact", [obligation]) => ReplCommand::Artefact(ObligationId::from(*obligation)),
        ("artefact", _) => return Err(CommandParseError::Usage("artefact <obligation>")),
        ("select", [obligation, resource]) => {
            ReplCommand::Dispatch(ConnectionAction::SelectResource {
                obligation_id: ObligationId::from(*obligation),
                resource_id: ResourceId::from(*resource),
            })
        }
        ("select", _) => return Err(CommandParseError::Usage("select <obligation> <resource>")),
        ("approve", [obligation]) => {
            ReplCommand::Dispatch(ConnectionAction::approve(*obligation))
        }
        ("approve", _) => return Err(CommandParseError::Usage("approve <obligation>")),
        ("reject", [obligation]) => ReplCommand::Dispatch(ConnectionAction::reject(*obligation)),
        ("reject", _) => return Err(CommandParseError::Usage("reject <obligation>")),
        ("revoke", []) => ReplCommand::Dispatch(ConnectionAction::RevokeConnection),
        ("restore", []) => ReplCommand::Dispatch(ConnectionAction::RestoreConnection),
        ("reset", []) => ReplCommand::Dispatch(ConnectionAction::Reset),
        ("revoke" | "restore" | "reset", _) => {
            return Err(CommandParseError::Usage("revoke | restore | reset take no arguments"))
        }
        (other, _) => return Err(CommandParseError::Unknown(other.to_string())),
    };

    Ok(command)
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
