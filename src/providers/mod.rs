//! Contact providers: the platform stores the bridge reads from.

mod dex_contact_provider;
mod memory_contact_provider;
mod query;
mod traits;

pub use dex_contact_provider::DexContactProvider;
pub use memory_contact_provider::MemoryContactProvider;
pub use query::matches_query;
pub use traits::{ContactProvider, ContactStore};
