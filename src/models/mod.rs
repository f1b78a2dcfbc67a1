//! Data models for the contacts bridge.
//!
//! `platform` holds the records a contact provider hands back; `contact` holds the
//! host-neutral records delivered to callers.

pub mod contact;
pub mod platform;

pub use contact::{Address, AddressType, Contact};
pub use platform::PlatformContact;
