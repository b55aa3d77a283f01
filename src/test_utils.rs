//! Test utilities for the scraper
//!
//! In-memory transport and pacing doubles so extraction and collection can
//! be tested against fixed markup without network access or sleeping.
//!
//! Also compiled into the integration tests (`tests/common`), so every path
//! goes through the parent module's imports.

use super::{FetchError, Pacer, PacingWindow, Transport};
use std::cell::RefCell;
use std::collections::HashMap;

/// Serves canned bodies keyed by URL (plus query string) and records every call
#[derive(Debug, Default)]
pub struct FixtureTransport {
    pages: HashMap<String, Result<String, FetchError>>,
    calls: RefCell<Vec<String>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_failure(mut self, url: &str, error: FetchError) -> Self {
        self.pages.insert(url.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn request_key(url: &str, query: &[(&str, &str)]) -> String {
        if query.is_empty() {
            return url.to_string();
        }
        let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{url}?{}", pairs.join("&"))
    }
}

impl Transport for FixtureTransport {
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, FetchError> {
        let key = Self::request_key(url, query);
        self.calls.borrow_mut().push(key.clone());
        match self.pages.get(&key) {
            Some(Ok(body)) => Ok(body.clone().into_bytes()),
            Some(Err(e)) => Err(e.clone()),
            None => Err(FetchError::status(&key, 404)),
        }
    }
}

/// Records pacing windows instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pauses: RefCell<Vec<PacingWindow>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<PacingWindow> {
        self.pauses.borrow().clone()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&self, window: PacingWindow) {
        self.pauses.borrow_mut().push(window);
    }
}
