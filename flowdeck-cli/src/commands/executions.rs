//! Execution commands - list recent executions.

use anyhow::{Context, Result};
use flowdeck_client::{Client, ConnectionConfig};

/// Run the execution list command.
pub async fn list(config: ConnectionConfig, workflow_id: Option<i64>, limit: u32) -> Result<()> {
    tracing::info!(host = %config.host, workflow_id, limit, "listing executions");

    let client = Client::new(config)?;
    let executions = client
        .list_executions(workflow_id, limit)
        .await
        .context("failed to list executions")?;

    println!(
        "{:<12} {:<10} {:<12} {:<26} STOPPED",
        "ID", "WORKFLOW", "STATUS", "STARTED"
    );
    for execution in &executions {
        let workflow = execution
            .workflow_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "{:<12} {:<10} {:<12} {:<26} {}",
            execution.id,
            workflow,
            execution.status.as_deref().unwrap_or("-"),
            execution.started_at.as_deref().unwrap_or("-"),
            execution.stopped_at.as_deref().unwrap_or("-")
        );
    }
    println!();
    println!("{} execution(s)", executions.len());

    Ok(())
}
