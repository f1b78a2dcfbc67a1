//! MCP server exposing the contacts bridge.
//!
//! This module provides the MCP protocol server that lets a scripting host (any
//! MCP client) list contacts and look one up by address.

pub mod handlers;

pub use handlers::ContactsMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contacts MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects.
pub async fn run_server(server: ContactsMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
