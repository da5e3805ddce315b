use address_book::error::{AddressBookError, AddressBookResult};
use address_book::storage::{TextSink, TextSource};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock text store for testing.
///
/// Keeps stored text in memory, can be told to fail reads or writes, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStore {
    text: Arc<Mutex<Option<String>>>,
    fail_io: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockStore {
    /// Create a store with nothing in it; reads report NotFound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `text`.
    pub fn with_text(text: &str) -> Self {
        let store = Self::new();
        *store.text.lock().unwrap() = Some(text.to_string());
        store
    }

    /// Make every following read and write fail with an I/O error.
    pub fn fail_io(&self) {
        *self.fail_io.lock().unwrap() = true;
    }

    /// Current stored text, if any.
    pub fn contents(&self) -> Option<String> {
        self.text.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn record_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn io_failure(&self) -> Option<AddressBookError> {
        if *self.fail_io.lock().unwrap() {
            Some(AddressBookError::Io(io::Error::new(
                io::ErrorKind::Other,
                "mock I/O failure",
            )))
        } else {
            None
        }
    }
}

impl TextSource for MockStore {
    fn location(&self) -> String {
        "mock store".to_string()
    }

    fn read_text(&self) -> AddressBookResult<String> {
        self.record_call("read_text");
        if let Some(err) = self.io_failure() {
            return Err(err);
        }
        self.contents()
            .ok_or_else(|| AddressBookError::NotFound("mock store".to_string()))
    }
}

impl TextSink for MockStore {
    fn location(&self) -> String {
        "mock store".to_string()
    }

    fn write_text(&self, text: &str) -> AddressBookResult<()> {
        self.record_call("write_text");
        if let Some(err) = self.io_failure() {
            return Err(err);
        }
        *self.text.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
