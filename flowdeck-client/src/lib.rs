//! Client for n8n-compatible workflow automation servers.
//!
//! Depending on version and configuration, these servers expose the same
//! logical API under different base paths (`/rest`, `/api/v1`, or the
//! bare root) and, for some mutations, different verbs. Every operation
//! here therefore probes the known variants in a fixed order, aborting
//! early on authentication failure, and normalizes whatever payload
//! shape comes back into one internal model.
//!
//! # Features
//!
//! - Connection settings resolved into an endpoint with builder-style
//!   construction
//! - Base-path probing with a pinned fallback order
//! - API key authentication (`X-N8N-API-KEY` header)
//! - Workflow listing and activation/deactivation with verb fallback
//! - Execution listing, globally or per workflow
//! - Tolerant decoding across bare-array, enveloped, and loosely typed
//!   payloads
//!
//! # Example
//!
//! ```no_run
//! use flowdeck_client::{Client, ConnectionConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectionConfig::new("n8n.example.com")
//!     .with_port("5678")
//!     .with_api_key(std::env::var("FLOWDECK_API_KEY")?);
//! let client = Client::new(config)?;
//!
//! for workflow in client.list_workflows().await? {
//!     println!(
//!         "{} {}",
//!         workflow.id,
//!         workflow.name.as_deref().unwrap_or("Untitled")
//!     );
//! }
//!
//! // Turn a workflow on; the client falls back across API variants.
//! client.set_workflow_active(3, true).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`:
//!
//! ```no_run
//! # use flowdeck_client::{Client, ClientError, ConnectionConfig};
//! # async fn example() -> Result<(), ClientError> {
//! # let client = Client::new(ConnectionConfig::new("n8n.example.com"))?;
//! match client.list_workflows().await {
//!     Ok(workflows) => println!("{} workflows", workflows.len()),
//!     Err(ClientError::AuthenticationRequired) => println!("check the API key"),
//!     Err(e) => println!("error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod decode;
mod error;
mod executions;
mod transport;
mod types;
mod workflows;

// Re-export the main types
pub use client::Client;
pub use config::{ConnectionConfig, Scheme};
pub use error::{ClientError, Result};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};
pub use types::{ExecutionSummary, WorkflowSummary};
