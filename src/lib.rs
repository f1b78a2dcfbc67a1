//! Contacts Bridge - async contact lookups from a contacts store for scripting hosts.
//!
//! Two operations are exposed: list every contact, and find the first contact
//! matching an address. Each runs its blocking store call on a worker thread and
//! delivers one result (or one error) back to the caller.
//!
//! # Architecture
//!
//! - **models**: Provider-side records and the host-facing `Contact`/`Address`
//! - **providers**: The `ContactProvider`/`ContactStore` capability and its implementations
//! - **client**: Synchronous HTTP client for the Dex Personal CRM API
//! - **bridge**: Dispatch, blocking fetch, projection, and callback delivery
//! - **server**: MCP server exposing the bridge as tools
//! - **config** / **error**: Environment configuration and error types

pub mod bridge;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod server;

pub use bridge::{ContactBridge, HostContext, PendingRequest, RequestKind};
pub use client::DexClient;
pub use config::{Config, ProviderKind};
pub use error::{BridgeError, BridgeResult, ConfigError, ProviderError, ProviderResult};
pub use models::{Address, AddressType, Contact, PlatformContact};
pub use providers::{ContactProvider, ContactStore, DexContactProvider, MemoryContactProvider};
pub use server::ContactsMcpServer;
