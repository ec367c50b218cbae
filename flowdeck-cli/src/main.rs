//! Flowdeck CLI - manage workflows on n8n-compatible servers.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use flowdeck_client::{ConnectionConfig, Scheme};

/// Flowdeck - workflow server management from the terminal.
#[derive(Parser)]
#[command(name = "flowdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Connection flags shared by every subcommand.
#[derive(Args)]
struct ConnectionArgs {
    /// Server host
    #[arg(short = 'H', long, default_value = "localhost")]
    host: String,

    /// Server port (omitted from the URL when not given)
    #[arg(short, long)]
    port: Option<u16>,

    /// Use plain HTTP instead of HTTPS
    #[arg(long)]
    insecure: bool,

    /// API key; falls back to the FLOWDECK_API_KEY environment variable
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Preferred API base path
    #[arg(long, default_value = "/rest")]
    base_path: String,
}

impl ConnectionArgs {
    /// Turn the parsed flags into client connection settings.
    fn into_config(self) -> ConnectionConfig {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("FLOWDECK_API_KEY").ok());

        let mut config = ConnectionConfig::new(self.host).with_base_path(self.base_path);
        if self.insecure {
            config = config.with_scheme(Scheme::Http);
        }
        if let Some(port) = self.port {
            config = config.with_port(port.to_string());
        }
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Workflow management
    Workflows {
        #[command(subcommand)]
        action: WorkflowsAction,
    },

    /// List recent executions
    Executions {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Restrict to executions of this workflow
        #[arg(short, long)]
        workflow: Option<i64>,

        /// Maximum number of executions to fetch
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
}

#[derive(Subcommand)]
enum WorkflowsAction {
    /// List workflows
    List {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Activate a workflow
    Activate {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Workflow identifier
        id: i64,
    },

    /// Deactivate a workflow
    Deactivate {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Workflow identifier
        id: i64,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Respect RUST_LOG when set, otherwise derive the filter from -v.
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| filter.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Workflows { action } => match action {
            WorkflowsAction::List { connection } => {
                commands::workflows::list(connection.into_config()).await
            }
            WorkflowsAction::Activate { connection, id } => {
                commands::workflows::set_active(connection.into_config(), id, true).await
            }
            WorkflowsAction::Deactivate { connection, id } => {
                commands::workflows::set_active(connection.into_config(), id, false).await
            }
        },
        Commands::Executions {
            connection,
            workflow,
            limit,
        } => commands::executions::list(connection.into_config(), workflow, limit).await,
    }
}
