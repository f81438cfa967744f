//! In-memory browser location.
//!
//! Stands in for `window.location` + `history.replaceState` outside a
//! browser. Every replace is recorded so callers can see how often the URL
//! was rewritten.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned.

use std::sync::Mutex;

use url::Url;

use crate::ports::BrowserLocation;

pub struct InMemoryLocation {
    state: Mutex<LocationState>,
}

struct LocationState {
    current: Url,
    replacements: Vec<Url>,
}

impl InMemoryLocation {
    /// A page loaded at `url`.
    pub fn new(url: Url) -> Self {
        Self {
            state: Mutex::new(LocationState {
                current: url,
                replacements: Vec::new(),
            }),
        }
    }

    /// URLs passed to `replace_url`, oldest first.
    pub fn replacements(&self) -> Vec<Url> {
        self.state
            .lock()
            .expect("location lock poisoned")
            .replacements
            .clone()
    }
}

impl BrowserLocation for InMemoryLocation {
    fn current_url(&self) -> Url {
        self.state
            .lock()
            .expect("location lock poisoned")
            .current
            .clone()
    }

    fn replace_url(&self, url: Url) {
        let mut state = self.state.lock().expect("location lock poisoned");
        state.current = url.clone();
        state.replacements.push(url);
    }
}
