//! Text matching shared by providers whose backend has no native search.

use crate::models::PlatformContact;

/// Whether a contact matches a free-text query.
///
/// A query containing `@` is an email address and matches only an email equal
/// to it, ignoring case. Any other query matches a phone number with exactly
/// the same digits, so `"555 123 4567"` finds `"(555) 123-4567"`, or a full
/// name containing the query, ignoring case.
pub fn matches_query(contact: &PlatformContact, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }

    if needle.contains('@') {
        return contact
            .emails
            .iter()
            .any(|email| email.trim().to_lowercase() == needle);
    }

    let query_digits = digits(&needle);
    if !query_digits.is_empty()
        && contact
            .phones
            .iter()
            .any(|phone| digits(phone) == query_digits)
    {
        return true;
    }

    contact.full_name.to_lowercase().contains(&needle)
}

fn digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}
