//! Migration runner configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::migration::SplitStrategy;

/// Migration runner configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationConfig {
    /// SQL script to apply
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Table counted by the connectivity check
    #[serde(default = "default_connectivity_table")]
    pub connectivity_table: String,

    /// How the script is split into statements
    #[serde(default)]
    pub split_strategy: SplitStrategy,
}

impl MigrationConfig {
    /// Validate migration configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("MIGRATION_FILE"));
        }
        if !is_valid_table_name(&self.connectivity_table) {
            return Err(ValidationError::InvalidTableName(
                self.connectivity_table.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            connectivity_table: default_connectivity_table(),
            split_strategy: SplitStrategy::default(),
        }
    }
}

fn default_file() -> PathBuf {
    PathBuf::from("supabase/migrations/schema.sql")
}

fn default_connectivity_table() -> String {
    "waitlist".to_string()
}

// The table name ends up in a request path.
fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
