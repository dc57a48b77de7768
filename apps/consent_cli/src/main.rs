use std::{
    fs,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::{domain::Role, protocol::ConnectionAction};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;
mod session;

use commands::{parse_command, parse_role, ReplCommand};
use config::load_settings;
use session::{Session, Step};

#[derive(Parser, Debug)]
#[command(about = "Consent-driven data sharing demo between a host and a guest organization")]
struct Args {
    /// Settings file (defaults to ./consent_cli.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Role to view the connection as; overrides the config file.
    #[arg(long, value_parser = parse_role_arg)]
    role: Option<Role>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the seeded connection.
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Replay a JSON array of actions and print the resulting view.
    Script { path: PathBuf },
    /// Interactive session reading commands from stdin.
    Repl,
}

fn parse_role_arg(raw: &str) -> Result<Role, String> {
    parse_role(raw).ok_or_else(|| format!("unknown role '{raw}', expected host or guest"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(role) = args.role {
        settings.current_role = role;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(?settings, "consent: settings loaded");

    let mut session = Session::new(&settings);
    match args.command.unwrap_or(Command::Repl) {
        Command::Show { json } => {
            let command = if json { ReplCommand::Json } else { ReplCommand::Show };
            if let Step::Continue(output) = session.execute(command).await? {
                println!("{output}");
            }
        }
        Command::Script { path } => run_script(&mut session, &path).await?,
        Command::Repl => run_repl(&mut session).await?,
    }

    Ok(())
}

async fn run_script(session: &mut Session, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read script '{}'", path.display()))?;
    let actions: Vec<ConnectionAction> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid action script '{}'", path.display()))?;
    info!(count = actions.len(), script = %path.display(), "consent: replaying script");

    for action in actions {
        session.dispatch(action).await;
    }
    println!("{}", session.render_view().await);
    Ok(())
}

async fn run_repl(session: &mut Session) -> Result<()> {
    println!("{}", session.render_view().await);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}/{}> ", session.role(), session.tab().label());
        std::io::stdout().flush().context("failed to flush stdout")?;
        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match session.execute(command).await? {
            Step::Continue(output) => println!("{output}"),
            Step::Quit => break,
        }
    }

    Ok(())
}
