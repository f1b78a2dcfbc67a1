//! MCP tool handlers for the contacts bridge.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::bridge::ContactBridge;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes contact lookups to a scripting host.
#[derive(Clone)]
pub struct ContactsMcpServer {
    bridge: Arc<ContactBridge>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contacts-bridge".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact lookup bridge - lists the user's contacts and finds a contact by email address or phone number.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FindContactToolParams {
    /// Email address, phone number, or other text to look up
    query: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(message: &'static str) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(message),
        data: None,
    }
}

#[tool_router]
impl ContactsMcpServer {
    /// Create a new contacts MCP server over the given bridge.
    pub fn new(bridge: Arc<ContactBridge>) -> Self {
        Self {
            bridge,
            tool_router: Self::tool_router(),
        }
    }

    /// List every contact in the user's contact store.
    #[tool(
        description = "List every contact in the user's contact store. Each contact has a name and its addresses: all email addresses first, then all phone numbers."
    )]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let contacts = self.bridge.list_contacts().await.map_err(|e| {
            tracing::error!("list_contacts failed: {}", e);
            to_mcp_error(e)
        })?;

        tracing::info!("list_contacts returned {} contacts", contacts.len());
        let json_response = serde_json::to_string_pretty(&contacts).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Find the first contact matching an address.
    #[tool(
        description = "Find the contact that owns an email address or phone number. Returns the first matching contact, or null when no contact matches."
    )]
    async fn find_contact(
        &self,
        params: Parameters<FindContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        if params.query.trim().is_empty() {
            return Err(invalid_params("query cannot be empty"));
        }

        let contact = self
            .bridge
            .find_contact(&params.query)
            .await
            .map_err(|e| {
                tracing::error!("find_contact failed: {}", e);
                to_mcp_error(e)
            })?;

        tracing::debug!("find_contact matched: {}", contact.is_some());
        let json_response = serde_json::to_string_pretty(&contact).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
