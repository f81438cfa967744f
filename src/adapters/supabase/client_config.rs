//! Connection settings shared by the Supabase adapters.

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::config::{SupabaseConfig, ValidationError};

/// Supabase project endpoint plus the key used to call it.
///
/// Supabase expects the key twice: as the `apikey` header for the API gateway
/// and as the bearer token that selects the Postgres role.
#[derive(Clone)]
pub struct SupabaseClientConfig {
    base_url: Url,
    api_key: SecretString,
    bearer_token: SecretString,
}

impl SupabaseClientConfig {
    /// Create a configuration where the API key doubles as bearer token.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self {
            base_url: with_trailing_slash(base_url),
            bearer_token: SecretString::new(api_key.clone()),
            api_key: SecretString::new(api_key),
        }
    }

    /// Client for Edge Function calls made with the public anon key.
    pub fn anon(config: &SupabaseConfig) -> Result<Self, ValidationError> {
        config.validate_anon_key()?;
        Ok(Self::new(config.project_url()?, config.anon_key.clone()))
    }

    /// Client for privileged calls made with the service role key.
    pub fn service_role(config: &SupabaseConfig) -> Result<Self, ValidationError> {
        config.validate_service_role()?;
        Ok(Self::new(
            config.project_url()?,
            config.service_role_key.clone(),
        ))
    }

    /// Use a signed-in user's access token as bearer instead of the API key.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = SecretString::new(token.into());
        self
    }

    /// Resolve a path relative to the project URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }

    /// Attach the gateway key and bearer token to a request.
    pub fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.bearer_token.expose_secret())
    }
}

// Url::join replaces the last segment unless the base ends with '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
