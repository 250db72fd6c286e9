use super::VerseSource;
use crate::error::{Result, VerseError};
use crate::model::{QueryKey, Verse};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Canned {
    Verses(Vec<Verse>),
    NetworkFailure(String),
    DecodeFailure(String),
}

/// Serves canned responses. Keys without a canned response return no verses,
/// as the real API does for references it does not know.
#[derive(Debug, Default)]
pub struct InMemorySource {
    responses: HashMap<String, Canned>,
    calls: RefCell<Vec<String>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verses(mut self, key: &str, verses: Vec<Verse>) -> Self {
        self.responses
            .insert(key.to_string(), Canned::Verses(verses));
        self
    }

    pub fn with_network_failure(mut self, key: &str, message: &str) -> Self {
        self.responses
            .insert(key.to_string(), Canned::NetworkFailure(message.to_string()));
        self
    }

    pub fn with_decode_failure(mut self, key: &str, message: &str) -> Self {
        self.responses
            .insert(key.to_string(), Canned::DecodeFailure(message.to_string()));
        self
    }

    /// Query keys requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl VerseSource for InMemorySource {
    fn fetch_verses(&self, key: &QueryKey) -> Result<Vec<Verse>> {
        self.calls.borrow_mut().push(key.to_string());
        match self.responses.get(key.as_str()) {
            Some(Canned::Verses(verses)) => Ok(verses.clone()),
            Some(Canned::NetworkFailure(msg)) => Err(VerseError::Network(msg.clone())),
            Some(Canned::DecodeFailure(msg)) => Err(VerseError::Decode(msg.clone())),
            None => Ok(Vec::new()),
        }
    }
}
