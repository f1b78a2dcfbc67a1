//! Blocking provider calls, run on the runtime's blocking pool.
//!
//! Each call opens its own store handle and drops it before returning.

use crate::error::ProviderResult;
use crate::models::PlatformContact;
use crate::providers::ContactProvider;

/// Open the store and list every contact.
pub fn fetch_all(provider: &dyn ContactProvider) -> ProviderResult<Vec<PlatformContact>> {
    let store = provider.open_store()?;
    store.list_all()
}

/// Open the store and run a text query against it.
pub fn fetch_matching(
    provider: &dyn ContactProvider,
    query: &str,
) -> ProviderResult<Vec<PlatformContact>> {
    let store = provider.open_store()?;
    store.find_by_query(query)
}
