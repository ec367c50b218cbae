//! Workflow commands - list and toggle workflows.

use anyhow::{Context, Result};
use flowdeck_client::{Client, ConnectionConfig};

/// Run the workflow list command.
pub async fn list(config: ConnectionConfig) -> Result<()> {
    tracing::info!(host = %config.host, "listing workflows");

    let client = Client::new(config)?;
    let mut workflows = client
        .list_workflows()
        .await
        .context("failed to list workflows")?;

    // The server reports workflows in its own order; sort by name for display.
    workflows.sort_by(|a, b| {
        a.name
            .as_deref()
            .unwrap_or("")
            .cmp(b.name.as_deref().unwrap_or(""))
    });

    println!("{:<8} {:<8} NAME", "ID", "ACTIVE");
    for workflow in &workflows {
        let active = match workflow.active {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        println!(
            "{:<8} {:<8} {}",
            workflow.id,
            active,
            workflow.name.as_deref().unwrap_or("Untitled")
        );
    }
    println!();
    println!("{} workflow(s)", workflows.len());

    Ok(())
}

/// Run the workflow activate/deactivate command.
pub async fn set_active(config: ConnectionConfig, id: i64, active: bool) -> Result<()> {
    let verb = if active { "activate" } else { "deactivate" };
    tracing::info!(host = %config.host, id, "workflow {}", verb);

    let client = Client::new(config)?;
    client
        .set_workflow_active(id, active)
        .await
        .with_context(|| format!("failed to {} workflow {}", verb, id))?;

    println!(
        "Workflow {} {}",
        id,
        if active { "activated" } else { "deactivated" }
    );

    Ok(())
}
