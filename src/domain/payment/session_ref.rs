//! Payment session reference carried back from the checkout redirect.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::domain::foundation::ValidationError;

/// Query parameter that Stripe Checkout appends to the success URL.
pub const SESSION_QUERY_PARAM: &str = "session_id";

/// Opaque identifier correlating a checkout redirect with a payment attempt.
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionRef(String);

impl SessionRef {
    /// Creates a session reference, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(SESSION_QUERY_PARAM));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Extracts the session reference from a page URL's query string.
    ///
    /// Returns `None` when the parameter is absent or blank. If the parameter
    /// appears more than once the first non-blank occurrence wins.
    pub fn from_url(url: &Url) -> Option<Self> {
        url.query_pairs()
            .filter(|(key, _)| key == SESSION_QUERY_PARAM)
            .find_map(|(_, value)| Self::new(value.into_owned()).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionRef {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionRef> for String {
    fn from(value: SessionRef) -> Self {
        value.0
    }
}

impl fmt::Display for SessionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
