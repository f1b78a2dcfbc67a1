//! The contact bridge: dispatch, fetch, project, deliver.
//!
//! [`ContactBridge`] accepts a request, schedules exactly one blocking fetch on
//! the runtime's blocking pool, and hands back a [`PendingRequest`] right away.
//! Awaiting the request projects the provider's records into [`Contact`]s on the
//! awaiting task. [`HostContext`] layers completion callbacks on top for hosts
//! that want them, delivering every callback on one control thread.

pub mod fetcher;
mod host;
pub mod projector;
mod request;

pub use host::HostContext;
pub use request::{PendingRequest, RequestKind};

use crate::error::{BridgeError, BridgeResult};
use crate::models::Contact;
use crate::providers::ContactProvider;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Entry point for contact lookups.
///
/// Requests share nothing but the provider handle; any number may be in flight
/// at once and they complete in whatever order their fetches finish.
#[derive(Clone)]
pub struct ContactBridge {
    provider: Arc<dyn ContactProvider>,
    runtime: Handle,
    next_request_id: Arc<AtomicU64>,
}

impl ContactBridge {
    /// Create a bridge that schedules work on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::NoRuntime` when called outside a tokio runtime.
    pub fn new(provider: Arc<dyn ContactProvider>) -> BridgeResult<Self> {
        let runtime = Handle::try_current().map_err(|e| BridgeError::NoRuntime(e.to_string()))?;
        Ok(Self::with_runtime(provider, runtime))
    }

    /// Create a bridge that schedules work on an explicit runtime.
    ///
    /// Requests can then be dispatched from threads that are not part of any
    /// runtime.
    pub fn with_runtime(provider: Arc<dyn ContactProvider>, runtime: Handle) -> Self {
        Self {
            provider,
            runtime,
            next_request_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// List every contact in the store.
    ///
    /// The fetch starts immediately; the returned request resolves to the
    /// projected contacts in store order.
    pub fn list_contacts(&self) -> PendingRequest<Vec<Contact>> {
        let id = self.next_id();
        let provider = Arc::clone(&self.provider);

        tracing::debug!(request_id = id, "Dispatching list_contacts");
        let fetch = self
            .runtime
            .spawn_blocking(move || fetcher::fetch_all(provider.as_ref()));

        PendingRequest::new(id, RequestKind::ListContacts, fetch, projector::project_all)
    }

    /// Find the first contact matching `query`.
    ///
    /// The query is handed to the provider untouched. The request resolves to
    /// `None` when nothing matches and to the first match otherwise.
    pub fn find_contact(&self, query: &str) -> PendingRequest<Option<Contact>> {
        let id = self.next_id();
        let provider = Arc::clone(&self.provider);
        let query = query.to_string();

        tracing::debug!(request_id = id, query = %query, "Dispatching find_contact");
        let fetch = self
            .runtime
            .spawn_blocking(move || fetcher::fetch_matching(provider.as_ref(), &query));

        PendingRequest::new(id, RequestKind::FindContact, fetch, projector::project_first)
    }

    fn next_id(&self) -> u64 {
        self.next_request_id.fetch_add(1, Ordering::Relaxed)
    }
}
