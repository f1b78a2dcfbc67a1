use crate::client::DexClient;
use crate::error::{ProviderError, ProviderResult};
use crate::models::PlatformContact;
use crate::providers::query::matches_query;
use crate::providers::traits::{ContactProvider, ContactStore};
use std::sync::Arc;

/// Contact provider backed by the Dex Personal CRM API.
///
/// Dex has a native search for email addresses only. Other queries fall back to
/// listing every contact and filtering client-side.
#[derive(Clone)]
pub struct DexContactProvider {
    client: Arc<DexClient>,
    page_size: usize,
}

impl DexContactProvider {
    /// Create a new provider with the given client and listing page size.
    pub fn new(client: DexClient, page_size: usize) -> Self {
        Self {
            client: Arc::new(client),
            page_size: page_size.max(1),
        }
    }
}

impl ContactProvider for DexContactProvider {
    fn open_store(&self) -> ProviderResult<Box<dyn ContactStore>> {
        if !self.client.has_credentials() {
            return Err(ProviderError::StoreUnavailable(
                "Dex API key is not configured".to_string(),
            ));
        }

        Ok(Box::new(DexContactStore {
            client: Arc::clone(&self.client),
            page_size: self.page_size,
        }))
    }
}

struct DexContactStore {
    client: Arc<DexClient>,
    page_size: usize,
}

impl DexContactStore {
    /// Fetch every contact, one page at a time.
    ///
    /// Stops on a short or empty page, or on a page whose ids repeat the
    /// previous page, which is what a server ignoring `offset` returns.
    fn fetch_all_contacts(&self) -> ProviderResult<Vec<PlatformContact>> {
        let mut all_contacts = Vec::new();
        let mut previous_ids: Vec<String> = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.client.get_contacts(self.page_size, offset)?;
            if page.is_empty() {
                break;
            }

            let page_ids: Vec<String> = page.iter().map(|contact| contact.id.clone()).collect();
            if page_ids == previous_ids {
                tracing::warn!(offset, "Dex returned the same page twice; stopping");
                break;
            }

            let count = page.len();
            all_contacts.extend(page.into_iter().map(PlatformContact::from));

            if count < self.page_size {
                break;
            }
            previous_ids = page_ids;
            offset += self.page_size;
        }

        tracing::debug!("Fetched {} contacts from Dex", all_contacts.len());
        Ok(all_contacts)
    }
}

impl ContactStore for DexContactStore {
    fn list_all(&self) -> ProviderResult<Vec<PlatformContact>> {
        self.fetch_all_contacts()
    }

    fn find_by_query(&self, query: &str) -> ProviderResult<Vec<PlatformContact>> {
        if query.contains('@') {
            let contacts = self.client.search_contacts_by_email(query)?;
            return Ok(contacts.into_iter().map(PlatformContact::from).collect());
        }

        Ok(self
            .fetch_all_contacts()?
            .into_iter()
            .filter(|contact| matches_query(contact, query))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_store_requires_api_key() {
        let client = DexClient::with_base_url("https://api.example.com".to_string(), String::new());
        let provider = DexContactProvider::new(client, 100);

        assert!(matches!(
            provider.open_store(),
            Err(ProviderError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let client = DexClient::with_base_url("https://api.example.com".to_string(), "k".into());
        let provider = DexContactProvider::new(client, 0);
        assert_eq!(provider.page_size, 1);
    }
}
