//! Mapping from provider records to host-facing contacts.
//!
//! Everything here is pure. It runs on whichever task awaits the request, never
//! on the blocking worker that fetched the records.

use crate::models::{Address, Contact, PlatformContact};

/// Project one provider record: emails first, then phones, each in store order.
pub fn project_contact(source: &PlatformContact) -> Contact {
    let addresses = source
        .emails
        .iter()
        .map(|email| Address::email(email.as_str()))
        .chain(source.phones.iter().map(|phone| Address::phone(phone.as_str())))
        .collect();

    Contact {
        name: source.full_name.clone(),
        addresses,
    }
}

/// Project a whole collection, preserving length and order.
pub fn project_all(records: Vec<PlatformContact>) -> Vec<Contact> {
    records.iter().map(project_contact).collect()
}

/// Project only the first record; any further matches are discarded.
pub fn project_first(records: Vec<PlatformContact>) -> Option<Contact> {
    records.first().map(project_contact)
}
