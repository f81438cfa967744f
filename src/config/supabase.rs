//! Supabase configuration

use serde::Deserialize;
use url::Url;

use super::error::ValidationError;
use super::server::Environment;

/// Supabase project configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL (https://<ref>.supabase.co)
    #[serde(default)]
    pub url: String,

    /// Public anon key, used for Edge Function calls
    #[serde(default)]
    pub anon_key: String,

    /// Service role key, required by the migration runner
    #[serde(default)]
    pub service_role_key: String,

    /// Name of the Edge Function that verifies checkout sessions
    #[serde(default = "default_verify_function")]
    pub verify_function: String,
}

impl SupabaseConfig {
    /// Parse the project URL
    pub fn project_url(&self) -> Result<Url, ValidationError> {
        let url = Url::parse(&self.url).map_err(|_| ValidationError::InvalidSupabaseUrl)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidSupabaseUrl);
        }
        Ok(url)
    }

    /// Validate settings shared by every binary
    ///
    /// In production, requires HTTPS for the project URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_URL"));
        }
        let url = self.project_url()?;
        if *environment == Environment::Production && url.scheme() != "https" {
            return Err(ValidationError::SupabaseUrlMustBeHttps);
        }
        if !is_valid_function_name(&self.verify_function) {
            return Err(ValidationError::InvalidFunctionName(
                self.verify_function.clone(),
            ));
        }
        Ok(())
    }

    /// Validate that the anon key is present (payment verification client)
    pub fn validate_anon_key(&self) -> Result<(), ValidationError> {
        if self.anon_key.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_ANON_KEY"));
        }
        Ok(())
    }

    /// Validate that the service role key is present (migration runner)
    pub fn validate_service_role(&self) -> Result<(), ValidationError> {
        if self.service_role_key.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_SERVICE_ROLE_KEY"));
        }
        Ok(())
    }
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            service_role_key: String::new(),
            verify_function: default_verify_function(),
        }
    }
}

fn default_verify_function() -> String {
    "verify-payment".to_string()
}

fn is_valid_function_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
