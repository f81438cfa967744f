//! Progressive web app manifest.
//!
//! The manifest is static configuration shipped with the crate and served at
//! `/manifest.json`. It is parsed into typed form so the server refuses to
//! start with a broken one.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Manifest bundled with the crate.
pub const BUNDLED_MANIFEST: &str = include_str!("../../assets/manifest.json");

/// One icon descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Space-separated `WxH` list, e.g. `"64x64 32x32"`.
    pub sizes: String,
}

impl ManifestIcon {
    pub fn new(src: impl Into<String>, mime_type: impl Into<String>, sizes: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            mime_type: mime_type.into(),
            sizes: sizes.into(),
        }
    }

    /// True if this icon declares the given `WxH` size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.split_whitespace().any(|s| s == size)
    }
}

/// Web app manifest fields used by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub short_name: String,
    pub name: String,
    pub icons: Vec<ManifestIcon>,
    pub start_url: String,
    pub display: String,
    pub theme_color: String,
    pub background_color: String,
}

impl WebManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses the bundled manifest.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_MANIFEST)
    }

    /// Icon whose `sizes` descriptor is exactly `sizes`.
    pub fn icon(&self, sizes: &str) -> Option<&ManifestIcon> {
        self.icons.iter().find(|icon| icon.sizes == sizes)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.short_name.trim().is_empty() {
            return Err(ValidationError::empty_field("short_name"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.icons.is_empty() {
            return Err(ValidationError::empty_field("icons"));
        }
        if self.start_url.is_empty() {
            return Err(ValidationError::empty_field("start_url"));
        }
        for (field, value) in [
            ("theme_color", &self.theme_color),
            ("background_color", &self.background_color),
        ] {
            if !is_hex_color(value) {
                return Err(ValidationError::invalid_format(field, "expected #rgb or #rrggbb"));
            }
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
