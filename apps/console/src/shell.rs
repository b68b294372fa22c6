//! Interactive form loop. Lines from stdin drive the controller while a
//! background subscriber redraws the panel after every state change.

use std::sync::Arc;

use anyhow::Result;
use client_core::{
    view::render_panel, ControllerEvent, CreateDraft, UpdateDraft, UserController,
};
use shared::domain::UserId;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast::error::RecvError,
    task::JoinHandle,
};
use tracing::warn;

pub const HELP: &str = "\
commands:
  add [name...] [email]           create a user
  update <id> [name...] [email]   update a user
  delete <id>                     delete a user
  list                            print the panel
  reload                          fetch the list again
  help                            show this text
  quit                            leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(CreateDraft),
    Update(UpdateDraft),
    Delete(UserId),
    List,
    Reload,
    Help,
    Quit,
}

/// Name tokens are joined with single spaces; the last token is the email.
/// Missing fields are sent empty.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match verb {
        "add" => {
            let (name, email) = name_and_email(&args);
            ShellCommand::Add(CreateDraft::new(name, email))
        }
        "update" => {
            let Some((id, rest)) = args.split_first() else {
                return Err("usage: update <id> [name...] [email]".into());
            };
            let (name, email) = name_and_email(rest);
            ShellCommand::Update(UpdateDraft::new(*id, name, email))
        }
        "delete" => match args.as_slice() {
            [id] => ShellCommand::Delete(
                id.parse()
                    .map_err(|_| format!("{id:?} is not a user id"))?,
            ),
            _ => return Err("usage: delete <id>".into()),
        },
        "list" => ShellCommand::List,
        "reload" => ShellCommand::Reload,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    Ok(Some(command))
}

fn name_and_email(args: &[&str]) -> (String, String) {
    match args.split_last() {
        Some((email, name)) => (name.join(" "), email.to_string()),
        None => (String::new(), String::new()),
    }
}

pub async fn run(controller: Arc<UserController>) -> Result<()> {
    let renderer = spawn_renderer(controller.clone());

    if let Err(err) = controller.load().await {
        eprintln!("{err}");
    }
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        let outcome = match command {
            ShellCommand::Add(draft) => controller.submit_create(draft).await.map(|_| ()),
            ShellCommand::Update(draft) => controller.submit_update(draft).await,
            ShellCommand::Delete(user_id) => controller.delete(user_id).await,
            ShellCommand::Reload => controller.load().await,
            ShellCommand::List => {
                let state = controller.snapshot().await;
                println!("{}", render_panel(&controller.config().backend_name, &state));
                Ok(())
            }
            ShellCommand::Help => {
                println!("{HELP}");
                Ok(())
            }
            ShellCommand::Quit => break,
        };
        if let Err(err) = outcome {
            eprintln!("{err}");
        }
    }

    renderer.abort();
    Ok(())
}

fn spawn_renderer(controller: Arc<UserController>) -> JoinHandle<()> {
    let mut events = controller.subscribe();
    let backend_name = controller.config().backend_name.clone();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ControllerEvent::StateChanged(state)) => {
                    println!("{}", render_panel(&backend_name, &state));
                }
                // Reported by the command loop from the returned error.
                Ok(ControllerEvent::OperationFailed { .. }) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "panel renderer fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
