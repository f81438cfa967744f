//! Browser location port.
//!
//! Abstracts the page URL and the history API so the payment return flow
//! can be driven without a browser.

use url::Url;

/// Port over the visible page URL.
pub trait BrowserLocation: Send + Sync {
    /// The URL the page was loaded with.
    fn current_url(&self) -> Url;

    /// Replace the visible URL without reloading (history `replaceState`).
    fn replace_url(&self, url: Url);
}
