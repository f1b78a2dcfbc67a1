//! The future handed back by every dispatched contact request.

use crate::error::{BridgeError, BridgeResult, ProviderResult};
use crate::models::PlatformContact;
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tokio::task::JoinHandle;

/// Which operation a request is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    ListContacts,
    FindContact,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::ListContacts => write!(f, "list_contacts"),
            RequestKind::FindContact => write!(f, "find_contact"),
        }
    }
}

/// A contact request whose fetch is already running on a blocking worker.
///
/// Awaiting it yields the projected result exactly once. Projection happens on
/// the task doing the awaiting, so results are built on the caller's context and
/// not on the worker. Dropping the request does not stop the fetch; the worker
/// runs to completion and its result is discarded.
#[must_use = "a contact request delivers nothing unless it is awaited"]
pub struct PendingRequest<T> {
    id: u64,
    kind: RequestKind,
    fetch: JoinHandle<ProviderResult<Vec<PlatformContact>>>,
    project: fn(Vec<PlatformContact>) -> T,
}

impl<T> PendingRequest<T> {
    pub(crate) fn new(
        id: u64,
        kind: RequestKind,
        fetch: JoinHandle<ProviderResult<Vec<PlatformContact>>>,
        project: fn(Vec<PlatformContact>) -> T,
    ) -> Self {
        Self {
            id,
            kind,
            fetch,
            project,
        }
    }

    /// Identifier used to correlate log lines for this request.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

impl<T> Future for PendingRequest<T> {
    type Output = BridgeResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let joined = ready!(self.fetch.poll_unpin(cx));

        let outcome = match joined {
            Ok(Ok(records)) => {
                tracing::debug!(
                    request_id = self.id,
                    kind = %self.kind,
                    records = records.len(),
                    "Projecting contact records"
                );
                Ok((self.project)(records))
            }
            Ok(Err(e)) => {
                tracing::warn!(request_id = self.id, kind = %self.kind, "Provider failed: {}", e);
                Err(BridgeError::Provider(e))
            }
            Err(e) => {
                tracing::error!(request_id = self.id, kind = %self.kind, "Worker failed: {}", e);
                Err(BridgeError::Worker(e.to_string()))
            }
        };

        Poll::Ready(outcome)
    }
}

impl<T> fmt::Debug for PendingRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRequest")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("finished", &self.fetch.is_finished())
            .finish()
    }
}
