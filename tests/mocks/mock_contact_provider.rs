use contacts_bridge::error::{ProviderError, ProviderResult};
use contacts_bridge::models::PlatformContact;
use contacts_bridge::providers::{ContactProvider, ContactStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

/// Build a platform contact from string slices.
#[allow(dead_code)]
pub fn sample_contact(name: &str, emails: &[&str], phones: &[&str]) -> PlatformContact {
    PlatformContact::new(name, emails.iter().copied(), phones.iter().copied())
}

/// Mock contact provider for testing.
///
/// Holds contacts in store order, tracks method calls and open store handles,
/// and can be told to fail or to hold a query until the test releases it.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactProvider {
    contacts: Arc<Mutex<Vec<PlatformContact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    queries: Arc<Mutex<Vec<String>>>,
    open_failure: Arc<Mutex<Option<String>>>,
    open_panic: Arc<Mutex<Option<String>>>,
    query_failure: Arc<Mutex<Option<String>>>,
    gates: Arc<Mutex<HashMap<String, mpsc::Receiver<()>>>>,
    open_handles: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockContactProvider {
    /// Create a new empty MockContactProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider holding the given contacts.
    pub fn with_contacts(contacts: Vec<PlatformContact>) -> Self {
        let provider = Self::new();
        provider.add_contacts(contacts);
        provider
    }

    /// Append contacts in store order.
    pub fn add_contacts(&self, contacts_list: Vec<PlatformContact>) {
        self.contacts.lock().unwrap().extend(contacts_list);
    }

    /// Make every subsequent `open_store` fail.
    pub fn fail_open(&self, reason: &str) {
        *self.open_failure.lock().unwrap() = Some(reason.to_string());
    }

    /// Make every subsequent `open_store` panic with `message`.
    pub fn panic_on_open(&self, message: &str) {
        *self.open_panic.lock().unwrap() = Some(message.to_string());
    }

    /// Make every subsequent query fail after the store opens.
    pub fn fail_queries(&self, reason: &str) {
        *self.query_failure.lock().unwrap() = Some(reason.to_string());
    }

    /// Clear configured failures.
    pub fn recover(&self) {
        *self.open_failure.lock().unwrap() = None;
        *self.open_panic.lock().unwrap() = None;
        *self.query_failure.lock().unwrap() = None;
    }

    /// Block the next `find_by_query(query)` until the returned sender fires or is dropped.
    pub fn hold_query(&self, query: &str) -> mpsc::Sender<()> {
        let (release, gate) = mpsc::channel();
        self.gates.lock().unwrap().insert(query.to_string(), gate);
        release
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Queries received by `find_by_query`, in arrival order.
    pub fn received_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Store handles currently open.
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactProvider for MockContactProvider {
    fn open_store(&self) -> ProviderResult<Box<dyn ContactStore>> {
        self.track_call("open_store");

        // Cloned out first so the panic does not poison the mutex.
        let panic_message = self.open_panic.lock().unwrap().clone();
        if let Some(message) = panic_message {
            panic!("{message}");
        }

        if let Some(reason) = self.open_failure.lock().unwrap().clone() {
            return Err(ProviderError::StoreUnavailable(reason));
        }

        self.open_handles.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockContactStore {
            provider: self.clone(),
        }))
    }
}

struct MockContactStore {
    provider: MockContactProvider,
}

impl MockContactStore {
    fn check_failure(&self) -> ProviderResult<()> {
        match self.provider.query_failure.lock().unwrap().clone() {
            Some(reason) => Err(ProviderError::QueryFailed(reason)),
            None => Ok(()),
        }
    }
}

impl ContactStore for MockContactStore {
    fn list_all(&self) -> ProviderResult<Vec<PlatformContact>> {
        self.provider.track_call("list_all");
        self.check_failure()?;

        Ok(self.provider.contacts.lock().unwrap().clone())
    }

    fn find_by_query(&self, query: &str) -> ProviderResult<Vec<PlatformContact>> {
        self.provider.track_call("find_by_query");
        self.provider.queries.lock().unwrap().push(query.to_string());

        let gate = self.provider.gates.lock().unwrap().remove(query);
        if let Some(gate) = gate {
            // A dropped sender releases the gate too.
            let _ = gate.recv();
        }

        self.check_failure()?;

        let contacts = self.provider.contacts.lock().unwrap();
        Ok(contacts
            .iter()
            .filter(|contact| {
                contact.full_name.contains(query)
                    || contact.emails.iter().any(|e| e == query)
                    || contact.phones.iter().any(|p| p == query)
            })
            .cloned()
            .collect())
    }
}

impl Drop for MockContactStore {
    fn drop(&mut self) {
        self.provider.open_handles.fetch_sub(1, Ordering::SeqCst);
    }
}
