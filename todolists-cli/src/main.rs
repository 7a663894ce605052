//! todolists CLI - manage todo lists stored in PostgreSQL
//!
//! Every invocation opens one connection, runs one command and closes the
//! connection again, even when the command fails.
//!
//! Connection target:
//! - `--database-url`, when given, in either environment
//! - production (`APP_ENV=production` or `--env production`): `DATABASE_URL`
//! - development (default): the local `todo-lists` database

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use todolists_store::{with_store, DatabaseConfig, Environment};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod title;

use commands::{Command, Output};

#[derive(Parser, Debug)]
#[command(
    name = "todolists",
    author,
    version,
    about = "Manage todo lists and their todos"
)]
struct Cli {
    /// Deployment environment (default: APP_ENV / RACK_ENV, else development)
    #[arg(long = "env", value_name = "ENV", global = true)]
    environment: Option<Environment>,

    /// Connection string; overrides the environment in either mode
    #[arg(long, value_name = "URL", global = true)]
    database_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing().ok();
    let cli = Cli::parse();

    let environment = cli.environment.unwrap_or_else(Environment::from_env);
    let config = match cli.database_url {
        Some(url) => DatabaseConfig::from_url(url),
        None => DatabaseConfig::from_env(environment)
            .context("failed to resolve database configuration")?,
    };
    info!("using {} ({})", config, environment);

    let command = cli.command;
    let output = with_store(&config, move |store| {
        Box::pin(async move { commands::execute(store, command).await })
    })
    .await
    .context("database operation failed")?;

    if let Output::ListNotFound { missing_list } = output {
        bail!("list {} not found", missing_list);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", commands::render_text(&output));
    }

    Ok(())
}
