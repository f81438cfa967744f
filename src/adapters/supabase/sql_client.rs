//! Supabase SQL client for the migration runner.
//!
//! Statements go through the `exec_sql` Postgres function exposed by
//! PostgREST as `POST /rest/v1/rpc/exec_sql`. The project must define it:
//!
//! ```sql
//! create or replace function exec_sql(sql text) returns void
//! language plpgsql security definer as $$ begin execute sql; end $$;
//! ```
//!
//! Row counts use `HEAD /rest/v1/<table>` with `Prefer: count=exact` and read
//! the total from the `Content-Range` header, so nothing is transferred.

use async_trait::async_trait;
use reqwest::header::CONTENT_RANGE;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{SqlError, SqlExecutor};

use super::client_config::SupabaseClientConfig;

#[derive(Debug, Serialize)]
struct ExecSqlRequest<'a> {
    sql: &'a str,
}

/// PostgREST error body.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// SQL executor backed by the Supabase REST API.
pub struct SupabaseSqlClient {
    config: SupabaseClientConfig,
    http_client: reqwest::Client,
}

impl SupabaseSqlClient {
    /// Create a client whose requests time out after `timeout`.
    pub fn with_timeout(config: SupabaseClientConfig, timeout: Duration) -> Result<Self, SqlError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SqlError::Network(e.to_string()))?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn url(&self, path: &str) -> Result<url::Url, SqlError> {
        self.config
            .endpoint(path)
            .map_err(|e| SqlError::UnexpectedResponse(format!("Invalid endpoint URL: {}", e)))
    }
}

#[async_trait]
impl SqlExecutor for SupabaseSqlClient {
    async fn execute(&self, sql: &str) -> Result<(), SqlError> {
        let url = self.url("rest/v1/rpc/exec_sql")?;

        let response = self
            .config
            .authorize(self.http_client.post(url))
            .json(&ExecSqlRequest { sql })
            .send()
            .await
            .map_err(|e| SqlError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(rejection(status, &body))
    }

    async fn count_rows(&self, table: &str) -> Result<u64, SqlError> {
        let mut url = self.url(&format!("rest/v1/{}", table))?;
        url.query_pairs_mut().append_pair("select", "*");

        let response = self
            .config
            .authorize(self.http_client.head(url))
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| SqlError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // HEAD responses carry no body.
            return Err(rejection(status, ""));
        }

        let range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| SqlError::UnexpectedResponse("Missing Content-Range header".into()))?;

        parse_content_range_total(range).ok_or_else(|| {
            SqlError::UnexpectedResponse(format!("Unparseable Content-Range: {}", range))
        })
    }
}

fn rejection(status: StatusCode, body: &str) -> SqlError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            let message = match err.details.filter(|d| !d.is_empty()) {
                Some(details) => format!("{} ({})", err.message, details),
                None => err.message,
            };
            SqlError::Rejected {
                message,
                code: err.code,
                hint: err.hint,
            }
        }
        Err(_) if body.trim().is_empty() => {
            SqlError::rejected(format!("HTTP {}", status.as_u16()))
        }
        Err(_) => SqlError::rejected(format!("HTTP {}: {}", status.as_u16(), body.trim())),
    }
}

/// Total from a `Content-Range` value such as `0-24/318` or `*/0`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.trim().parse().ok()
}
