//! Supabase adapters.
//!
//! - `SupabaseFunctionsClient` implements `PaymentVerifier` via an Edge Function
//! - `SupabaseSqlClient` implements `SqlExecutor` via PostgREST
//!
//! Keys are held as `secrecy::SecretString` and only exposed when a request
//! is built.

mod client_config;
mod functions_client;
mod sql_client;

pub use client_config::SupabaseClientConfig;
pub use functions_client::SupabaseFunctionsClient;
pub use sql_client::SupabaseSqlClient;
