//! Contact records as returned by a contact provider.

use serde::{Deserialize, Serialize};

/// A contact as the provider's store reports it.
///
/// Emails and phone numbers are opaque strings in store order; the bridge never
/// normalizes or validates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PlatformContact {
    /// Display name as composed by the store
    pub full_name: String,

    /// Email addresses, in store order
    pub emails: Vec<String>,

    /// Phone numbers, in store order
    pub phones: Vec<String>,
}

impl PlatformContact {
    /// Create a platform contact from its parts.
    pub fn new(
        full_name: impl Into<String>,
        emails: impl IntoIterator<Item = impl Into<String>>,
        phones: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            emails: emails.into_iter().map(Into::into).collect(),
            phones: phones.into_iter().map(Into::into).collect(),
        }
    }
}
