//! HTTP client for reading contacts from the Dex Personal CRM API.
//!
//! This is a synchronous client. It is only ever called from a blocking worker
//! thread (see `bridge::fetcher`), never from the async runtime directly.

use crate::config::Config;
use crate::error::{ProviderError, ProviderResult};
use crate::models::PlatformContact;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Email address entry for a contact (from API).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct EmailEntry {
    email: String,
}

/// Phone number entry for a contact (from API).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct PhoneEntry {
    #[serde(rename = "phone_number")]
    phone: String,
}

/// Custom deserializer for emails that converts from API format to Vec<String>
fn deserialize_emails<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<EmailEntry>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.email)
        .collect())
}

/// Custom deserializer for phones that converts from API format to Vec<String>
fn deserialize_phones<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<PhoneEntry>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|p| p.phone)
        .collect())
}

/// A contact record as the Dex API returns it.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DexContact {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(deserialize_with = "deserialize_emails")]
    pub emails: Vec<String>,
    #[serde(deserialize_with = "deserialize_phones")]
    pub phones: Vec<String>,
}

impl DexContact {
    /// Full name composed from first and last name.
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last).trim().to_string(),
            (Some(first), None) => first.trim().to_string(),
            (None, Some(last)) => last.trim().to_string(),
            (None, None) => String::new(),
        }
    }
}

impl From<DexContact> for PlatformContact {
    fn from(contact: DexContact) -> Self {
        PlatformContact {
            full_name: contact.full_name(),
            emails: contact.emails,
            phones: contact.phones,
        }
    }
}

/// Response wrapper for the Dex contacts API endpoint.
#[derive(Debug, Deserialize)]
struct ContactsResponse {
    contacts: Vec<DexContact>,
}

/// Response wrapper for paginated search endpoints.
#[derive(Debug, Deserialize)]
struct PaginatedResponse<T> {
    data: Vec<T>,
}

/// HTTP client for the Dex Personal CRM API.
#[derive(Clone)]
pub struct DexClient {
    /// Base URL for the Dex API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl DexClient {
    /// Create a new DexClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.dex_api_url.clone(),
            api_key: config.dex_api_key.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a DexClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self::new(&Config {
            dex_api_url: base_url,
            dex_api_key: api_key,
            ..Default::default()
        })
    }

    /// Whether the client carries credentials at all.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication and return the body.
    fn get(&self, path: &str) -> ProviderResult<String> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .agent
            .get(&url)
            .set("x-hasura-dex-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => tracing::debug!(
                "GET {} - status {} in {:?}",
                url,
                response.status(),
                start.elapsed()
            ),
            Err(e) => tracing::warn!("GET {} - error after {:?}: {}", url, start.elapsed(), e),
        }

        result?
            .into_string()
            .map_err(|e| ProviderError::HttpError(e.to_string()))
    }

    /// Map a ureq error to a ProviderError.
    fn map_error(&self, error: ureq::Error) -> ProviderError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => ProviderError::Unauthorized,
                    429 => ProviderError::RateLimitExceeded,
                    _ => ProviderError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ProviderError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ProviderError::Timeout
                } else {
                    ProviderError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Get one page of contacts.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of contacts to return
    /// * `offset` - Number of contacts to skip (for pagination)
    pub fn get_contacts(&self, limit: usize, offset: usize) -> ProviderResult<Vec<DexContact>> {
        let path = format!("/contacts?limit={}&offset={}", limit, offset);
        let body = self.get(&path)?;

        let response: ContactsResponse = serde_json::from_str(&body)?;
        Ok(response.contacts)
    }

    /// Search contacts by email.
    ///
    /// The endpoint answers either with a paginated `{"data": [...]}` envelope or
    /// with a bare array.
    pub fn search_contacts_by_email(&self, email: &str) -> ProviderResult<Vec<DexContact>> {
        let path = format!("/contacts/search?email={}", urlencoding::encode(email));
        let body = self.get(&path)?;

        if let Ok(paginated) = serde_json::from_str::<PaginatedResponse<DexContact>>(&body) {
            return Ok(paginated.data);
        }
        Ok(serde_json::from_str::<Vec<DexContact>>(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = DexClient::with_base_url(
            "https://api.example.com".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client.build_url("/contacts"),
            "https://api.example.com/contacts"
        );
        assert_eq!(
            client.build_url("contacts"),
            "https://api.example.com/contacts"
        );

        let client_with_slash = DexClient::with_base_url(
            "https://api.example.com/".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client_with_slash.build_url("/contacts"),
            "https://api.example.com/contacts"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            dex_api_url: "https://api.getdex.com".to_string(),
            dex_api_key: "test-key-123".to_string(),
            ..Default::default()
        };

        let client = DexClient::new(&config);
        assert_eq!(client.base_url, "https://api.getdex.com");
        assert!(client.has_credentials());
        assert!(!DexClient::with_base_url("http://x".into(), " ".into()).has_credentials());
    }

    #[test]
    fn test_dex_contact_into_platform_contact() {
        let contact: DexContact = serde_json::from_str(
            r#"{
                "id": "c1",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "emails": [{"email": "ada@x.com"}],
                "phones": [{"phone_number": "555-1234"}, {"phone_number": "555-5678"}]
            }"#,
        )
        .unwrap();

        let platform = PlatformContact::from(contact);
        assert_eq!(platform.full_name, "Ada Lovelace");
        assert_eq!(platform.emails, vec!["ada@x.com"]);
        assert_eq!(platform.phones, vec!["555-1234", "555-5678"]);
    }

    #[test]
    fn test_dex_contact_tolerates_null_lists_and_partial_names() {
        let contact: DexContact =
            serde_json::from_str(r#"{"id": "c2", "last_name": "Hopper", "emails": null}"#)
                .unwrap();

        assert_eq!(contact.full_name(), "Hopper");
        assert!(contact.emails.is_empty());
        assert!(contact.phones.is_empty());
    }
}
