use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{view::render_panel, CreateDraft, UpdateDraft, UserController};
use shared::domain::UserId;
use tracing_subscriber::EnvFilter;

mod config;
mod shell;

#[derive(Parser, Debug)]
#[command(about = "Manage users on a REST backend")]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8080
    #[arg(long)]
    api_base: Option<String>,
    /// Backend label used in routes and the panel header
    #[arg(long)]
    backend: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Create {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    Update {
        #[arg(long)]
        id: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    Delete {
        id: i64,
    },
    /// Interactive form loop
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = config::load_settings().with_overrides(cli.api_base, cli.backend);
    let client_config = settings
        .client_config()
        .context("invalid client configuration")?;
    let controller = UserController::http(client_config)?;

    if let Command::Shell = cli.command {
        return shell::run(controller).await;
    }

    controller.load().await?;
    match cli.command {
        Command::List | Command::Shell => {}
        Command::Create { name, email } => {
            controller
                .set_create_draft(CreateDraft::new(name, email))
                .await;
            let created = controller.create().await?;
            println!("created user_id={}", created.id);
        }
        Command::Update { id, name, email } => {
            controller
                .set_update_draft(UpdateDraft::new(id, name, email))
                .await;
            controller.update().await?;
        }
        Command::Delete { id } => {
            controller.delete(UserId(id)).await?;
        }
    }

    let state = controller.snapshot().await;
    println!("{}", render_panel(&controller.config().backend_name, &state));
    Ok(())
}
