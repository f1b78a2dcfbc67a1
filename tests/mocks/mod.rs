mod mock_contact_provider;

#[allow(unused_imports)]
pub use mock_contact_provider::{sample_contact, MockContactProvider};
