//! Execution operations.

use crate::client::Client;
use crate::decode::decode_listing;
use crate::error::Result;
use crate::transport::{Method, Transport};
use crate::types::ExecutionSummary;

/// Envelope keys under which server variants wrap execution listings.
const EXECUTION_KEYS: [&str; 2] = ["executions", "data"];

impl<T: Transport> Client<T> {
    /// List recent executions, optionally scoped to one workflow.
    ///
    /// With a workflow id the per-workflow endpoint
    /// `workflows/{id}/executions` is tried first; that shape takes no
    /// limit parameter and only ever returns a bare array. Any failure
    /// there, probe or decode, falls back once to the query form
    /// `executions?workflowId={id}&limit={limit}`. Without a workflow id
    /// the query form `executions?limit={limit}` is used directly.
    ///
    /// # Arguments
    ///
    /// * `workflow_id` - Restrict to executions of this workflow
    /// * `limit` - Maximum number of results for the query-form endpoints
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
    /// let executions = client.list_executions(Some(3), 20).await?;
    /// for execution in executions {
    ///     println!("{}: {:?}", execution.id, execution.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_executions(
        &self,
        workflow_id: Option<i64>,
        limit: u32,
    ) -> Result<Vec<ExecutionSummary>> {
        let mut path = format!("executions?limit={}", limit);

        if let Some(id) = workflow_id {
            let scoped = format!("workflows/{}/executions", id);
            match self.perform(&scoped, Method::Get, None).await {
                Ok(outcome) => {
                    if let Ok(executions) =
                        serde_json::from_slice::<Vec<ExecutionSummary>>(&outcome.body)
                    {
                        return Ok(executions);
                    }
                    tracing::debug!(
                        workflow_id = id,
                        "per-workflow executions shape not recognized, falling back"
                    );
                }
                Err(error) => {
                    tracing::debug!(
                        workflow_id = id,
                        error = %error,
                        "per-workflow executions endpoint unavailable, falling back"
                    );
                }
            }
            path = format!("executions?workflowId={}&limit={}", id, limit);
        }

        let outcome = self.perform(&path, Method::Get, None).await?;
        let executions = decode_listing(&outcome.body, &EXECUTION_KEYS)?;
        tracing::debug!(count = executions.len(), "listed executions");
        Ok(executions)
    }
}
