//! Callback delivery on the host's control thread.

use crate::bridge::ContactBridge;
use crate::error::BridgeResult;
use crate::models::Contact;
use std::future::Future;
use tokio::task::LocalSet;

/// Callback-style front end for hosts driven from a single control thread.
///
/// Each call dispatches its fetch immediately and queues delivery on a
/// [`LocalSet`]. Completions run only while the host drives the context with
/// [`run_until`](Self::run_until) or [`run_until_idle`](Self::run_until_idle),
/// and always on the thread doing the driving. Completions therefore do not have
/// to be `Send` and can hold host state such as `Rc` handles.
///
/// Every completion is invoked exactly once, with either the result or the
/// error that ended its request.
pub struct HostContext {
    bridge: ContactBridge,
    local: LocalSet,
}

impl HostContext {
    pub fn new(bridge: ContactBridge) -> Self {
        Self {
            bridge,
            local: LocalSet::new(),
        }
    }

    /// The bridge requests are dispatched through.
    pub fn bridge(&self) -> &ContactBridge {
        &self.bridge
    }

    /// List every contact and pass the outcome to `completion`.
    pub fn list_contacts<F>(&self, completion: F)
    where
        F: FnOnce(BridgeResult<Vec<Contact>>) + 'static,
    {
        let request = self.bridge.list_contacts();
        self.local.spawn_local(async move {
            completion(request.await);
        });
    }

    /// Find the first contact matching `query` and pass the outcome to `completion`.
    ///
    /// `Ok(None)` means nothing matched.
    pub fn find_contact<F>(&self, query: &str, completion: F)
    where
        F: FnOnce(BridgeResult<Option<Contact>>) + 'static,
    {
        let request = self.bridge.find_contact(query);
        self.local.spawn_local(async move {
            completion(request.await);
        });
    }

    /// Drive pending completions until `future` resolves.
    pub async fn run_until<F: Future>(&self, future: F) -> F::Output {
        self.local.run_until(future).await
    }

    /// Drive the context until every queued completion has run.
    pub async fn run_until_idle(self) {
        self.local.await;
    }
}
