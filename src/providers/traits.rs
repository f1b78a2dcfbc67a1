use crate::error::ProviderResult;
use crate::models::PlatformContact;

/// Capability to open a platform contact store.
///
/// Implementations are called from blocking worker threads and may block for as
/// long as the underlying platform needs.
pub trait ContactProvider: Send + Sync {
    /// Open a handle to the contact store.
    ///
    /// The handle is owned by a single request and dropped when that request's
    /// fetch finishes.
    fn open_store(&self) -> ProviderResult<Box<dyn ContactStore>>;
}

/// An open handle to a contact store.
pub trait ContactStore: Send {
    /// Every contact in the store, in store order.
    fn list_all(&self) -> ProviderResult<Vec<PlatformContact>>;

    /// Contacts matching `query` under the store's own matching rules, in store order.
    ///
    /// An empty result is not an error.
    fn find_by_query(&self, query: &str) -> ProviderResult<Vec<PlatformContact>>;
}
