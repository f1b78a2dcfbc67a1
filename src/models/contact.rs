//! Host-facing contact record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of address a contact can be reached at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Email,
    Phone,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressType::Email => write!(f, "email"),
            AddressType::Phone => write!(f, "phone"),
        }
    }
}

/// A single way of reaching a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Raw value from the store (email address or phone number)
    pub value: String,

    /// Value shown to the user; currently always the raw value
    pub display_value: String,

    /// Whether this is an email address or a phone number
    #[serde(rename = "type")]
    pub address_type: AddressType,
}

impl Address {
    /// Create an address whose display value mirrors its raw value.
    pub fn new(value: impl Into<String>, address_type: AddressType) -> Self {
        let value = value.into();
        Self {
            display_value: value.clone(),
            value,
            address_type,
        }
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self::new(value, AddressType::Email)
    }

    pub fn phone(value: impl Into<String>) -> Self {
        Self::new(value, AddressType::Phone)
    }
}

/// A contact as delivered to the host.
///
/// Built fresh for every response and never mutated afterwards. `addresses`
/// lists every email first, then every phone number, each group in store order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Full display name
    pub name: String,

    /// Email addresses followed by phone numbers
    pub addresses: Vec<Address>,
}
