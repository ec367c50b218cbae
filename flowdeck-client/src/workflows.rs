//! Workflow operations.

use serde_json::json;

use crate::client::Client;
use crate::decode::decode_listing;
use crate::error::{ClientError, Result};
use crate::transport::{Method, Transport};
use crate::types::WorkflowSummary;

/// Envelope keys under which server variants wrap workflow listings.
const WORKFLOW_KEYS: [&str; 2] = ["workflows", "data"];

impl<T: Transport> Client<T> {
    /// List workflows.
    ///
    /// # Returns
    ///
    /// Workflows in the order the server reported them; callers sort if
    /// they need a particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if no base path answers, authentication fails,
    /// or the payload matches none of the known response shapes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use flowdeck_client::{Client, ConnectionConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new(ConnectionConfig::new("n8n.example.com"))?;
    /// for workflow in client.list_workflows().await? {
    ///     println!(
    ///         "{}: {}",
    ///         workflow.id,
    ///         workflow.name.as_deref().unwrap_or("Untitled")
    ///     );
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_workflows(&self) -> Result<Vec<WorkflowSummary>> {
        let outcome = self.perform("workflows", Method::Get, None).await?;
        let workflows = decode_listing(&outcome.body, &WORKFLOW_KEYS)?;
        tracing::debug!(count = workflows.len(), "listed workflows");
        Ok(workflows)
    }

    /// Activate or deactivate a workflow.
    ///
    /// Tries the dedicated `POST workflows/{id}/activate` (or
    /// `.../deactivate`) endpoint first. Servers without it get the
    /// update as `PUT workflows/{id}` with an `active` flag, then `PATCH`
    /// on the same path as the last resort. The first attempt that
    /// succeeds ends the operation; no response body is required.
    ///
    /// # Arguments
    ///
    /// * `workflow_id` - Workflow identifier
    /// * `active` - Desired active state
    ///
    /// # Errors
    ///
    /// An authentication failure on the first attempt propagates
    /// immediately. Otherwise, once every fallback is exhausted, the
    /// error from the final `PATCH` attempt surfaces.
    pub async fn set_workflow_active(&self, workflow_id: i64, active: bool) -> Result<()> {
        let action = if active { "activate" } else { "deactivate" };
        let path = format!("workflows/{}/{}", workflow_id, action);

        match self.perform(&path, Method::Post, None).await {
            Ok(_) => {}
            Err(ClientError::AuthenticationRequired) => {
                return Err(ClientError::AuthenticationRequired);
            }
            Err(error) => {
                tracing::debug!(
                    workflow_id,
                    error = %error,
                    "activation endpoint unavailable, updating the workflow instead"
                );
                let body = serde_json::to_vec(&json!({ "active": active }))
                    .map_err(|e| ClientError::Transport(Box::new(e)))?;
                let update_path = format!("workflows/{}", workflow_id);

                if self
                    .perform(&update_path, Method::Put, Some(&body))
                    .await
                    .is_err()
                {
                    self.perform(&update_path, Method::Patch, Some(&body)).await?;
                }
            }
        }

        tracing::debug!(workflow_id, active, "workflow state updated");
        Ok(())
    }
}
