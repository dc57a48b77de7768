use super::*;

#[test]
fn parses_dispatch_commands() {
    assert_eq!(
        parse_command("select obl-1 kr-1"),
        Ok(ReplCommand::Dispatch(ConnectionAction::select_resource(
            "obl-1", "kr-1"
        )))
    );
    assert_eq!(
        parse_command("  APPROVE   obl-3 "),
        Ok(ReplCommand::Dispatch(ConnectionAction::approve("obl-3")))
    );
    assert_eq!(
        parse_command("reject obl-2"),
        Ok(ReplCommand::Dispatch(ConnectionAction::reject("obl-2")))
    );
    assert_eq!(
        parse_command("revoke"),
        Ok(ReplCommand::Dispatch(ConnectionAction::RevokeConnection))
    );
    assert_eq!(
        parse_command("restore"),
        Ok(ReplCommand::Dispatch(ConnectionAction::RestoreConnection))
    );
    assert_eq!(
        parse_command("reset"),
        Ok(ReplCommand::Dispatch(ConnectionAction::Reset))
    );
}

#[test]
fn parses_view_commands() {
    assert_eq!(parse_command("role"), Ok(ReplCommand::SwitchRole(None)));
    assert_eq!(
        parse_command("role Guest"),
        Ok(ReplCommand::SwitchRole(Some(Role::Guest)))
    );
    assert_eq!(
        parse_command("tab received"),
        Ok(ReplCommand::SwitchTab(Tab::Received))
    );
    assert_eq!(
        parse_command("artefact obl-1"),
        Ok(ReplCommand::Artefact(ObligationId::from("obl-1")))
    );
    assert_eq!(parse_command("exit"), Ok(ReplCommand::Quit));
}

#[test]
fn reports_usage_and_unknown_input() {
    assert_eq!(parse_command("   "), Err(CommandParseError::Empty));
    assert_eq!(
        parse_command("select obl-1"),
        Err(CommandParseError::Usage("select <obligation> <resource>"))
    );
    assert_eq!(
        parse_command("role auditor"),
        Err(CommandParseError::Role("auditor".into()))
    );
    assert_eq!(
        parse_command("tab archive"),
        Err(CommandParseError::Tab("archive".into()))
    );
    assert_eq!(
        parse_command("delete obl-1"),
        Err(CommandParseError::Unknown("delete".into()))
    );
}
