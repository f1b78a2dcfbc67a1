use crate::error::{ProviderError, ProviderResult};
use crate::models::PlatformContact;
use crate::providers::query::matches_query;
use crate::providers::traits::{ContactProvider, ContactStore};
use std::path::Path;
use std::sync::Arc;

/// Contact provider backed by a fixed, in-memory collection.
///
/// Used for the `fixture` provider kind and as a stand-in store in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryContactProvider {
    contacts: Arc<Vec<PlatformContact>>,
    unavailable: Option<String>,
}

impl MemoryContactProvider {
    /// Create a provider holding the given contacts in store order.
    pub fn new(contacts: Vec<PlatformContact>) -> Self {
        Self {
            contacts: Arc::new(contacts),
            unavailable: None,
        }
    }

    /// Load contacts from a JSON fixture file containing an array of records.
    pub fn from_json_file(path: impl AsRef<Path>) -> ProviderResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let contacts: Vec<PlatformContact> = serde_json::from_str(&raw)?;

        tracing::info!(
            "Loaded {} fixture contacts from {}",
            contacts.len(),
            path.display()
        );
        Ok(Self::new(contacts))
    }

    /// A provider whose store can never be opened.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            contacts: Arc::default(),
            unavailable: Some(reason.into()),
        }
    }

    /// Number of contacts held.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl ContactProvider for MemoryContactProvider {
    fn open_store(&self) -> ProviderResult<Box<dyn ContactStore>> {
        if let Some(reason) = &self.unavailable {
            return Err(ProviderError::StoreUnavailable(reason.clone()));
        }

        Ok(Box::new(MemoryContactStore {
            contacts: Arc::clone(&self.contacts),
        }))
    }
}

/// Store handle sharing the provider's snapshot.
struct MemoryContactStore {
    contacts: Arc<Vec<PlatformContact>>,
}

impl ContactStore for MemoryContactStore {
    fn list_all(&self) -> ProviderResult<Vec<PlatformContact>> {
        Ok(self.contacts.as_ref().clone())
    }

    fn find_by_query(&self, query: &str) -> ProviderResult<Vec<PlatformContact>> {
        Ok(self
            .contacts
            .iter()
            .filter(|contact| matches_query(contact, query))
            .cloned()
            .collect())
    }
}
