//! Google service-account authentication and the Sheets values API
//!
//! Both the calendar and spreadsheet integrations authenticate as a service
//! account: a short-lived RS256 assertion is exchanged at the OAuth token
//! endpoint for a bearer token, which is cached per scope until shortly
//! before it expires.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const JWT_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Assertions are valid for one hour (the maximum Google accepts).
const ASSERTION_TTL_SECS: i64 = 3600;

/// Refresh a cached token this long before it actually expires.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

pub const SCOPE_SHEETS: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const SCOPE_SHEETS_READONLY: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
pub const SCOPE_CALENDAR_READONLY: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Errors from Google authentication or API calls
#[derive(Debug, Error)]
pub enum GoogleError {
    #[error("Failed to sign service-account assertion: {0}")]
    Assertion(#[from] jsonwebtoken::errors::Error),

    #[error("Google API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Google API returned status {0}")]
    Status(u16),
}

/// Service-account credentials supplied via environment variables.
#[derive(Debug, Clone)]
pub struct ServiceAccountKey {
    pub client_email: String,
    private_key_pem: String,
}

impl ServiceAccountKey {
    /// `private_key` as handed out by the env var, with literal `\n`
    /// sequences standing in for newlines.
    pub fn new(client_email: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            client_email: client_email.into(),
            private_key_pem: private_key.into().replace("\\n", "\n"),
        }
    }

    fn encoding_key(&self) -> Result<EncodingKey, jsonwebtoken::errors::Error> {
        EncodingKey::from_rsa_pem(self.private_key_pem.as_bytes())
    }
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Mints and caches bearer tokens, one per scope.
pub struct GoogleAuthenticator {
    http: reqwest::Client,
    key: ServiceAccountKey,
    tokens: RwLock<HashMap<String, CachedToken>>,
}

impl GoogleAuthenticator {
    pub fn new(http: reqwest::Client, key: ServiceAccountKey) -> Self {
        Self {
            http,
            key,
            tokens: RwLock::new(HashMap::new()),
        }
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    /// Bearer token for `scope`, minted on demand.
    pub async fn bearer_token(&self, scope: &str) -> Result<String, GoogleError> {
        {
            let tokens = self.tokens.read().await;
            if let Some(cached) = tokens.get(scope) {
                if cached.expires_at.saturating_duration_since(Instant::now()) > EXPIRY_MARGIN {
                    return Ok(cached.token.clone());
                }
            }
        }

        let minted = self.exchange(scope).await?;

        let mut tokens = self.tokens.write().await;
        tokens.insert(scope.to_string(), minted.clone());
        Ok(minted.token)
    }

    async fn exchange(&self, scope: &str) -> Result<CachedToken, GoogleError> {
        let now = chrono::Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope,
            aud: TOKEN_URL,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        };
        let assertion = jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.key.encoding_key()?,
        )?;

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&[("grant_type", JWT_GRANT_TYPE), ("assertion", &assertion)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GoogleError::Status(response.status().as_u16()));
        }

        let body: TokenResponse = response.json().await?;

        tracing::debug!(scope, expires_in = body.expires_in, "Minted Google token");

        Ok(CachedToken {
            token: body.access_token,
            expires_at: Instant::now() + Duration::from_secs(body.expires_in),
        })
    }
}

// ============================================================================
// Sheets values API
// ============================================================================

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    updates: AppendUpdates,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    updated_range: String,
}

/// Thin client for the Sheets `values.get` / `values.append` endpoints.
pub struct SheetsClient {
    http: reqwest::Client,
    auth: std::sync::Arc<GoogleAuthenticator>,
    spreadsheet_id: String,
}

impl SheetsClient {
    pub fn new(
        http: reqwest::Client,
        auth: std::sync::Arc<GoogleAuthenticator>,
        spreadsheet_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            auth,
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    /// All rows of `range`, as formatted strings.
    pub async fn values_get(&self, range: &str) -> Result<Vec<Vec<String>>, GoogleError> {
        let token = self.auth.bearer_token(SCOPE_SHEETS_READONLY).await?;

        let url = format!(
            "{}/{}/values/{}",
            SHEETS_BASE_URL,
            self.spreadsheet_id,
            encode_range(range)
        );
        let response = self.http.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(GoogleError::Status(response.status().as_u16()));
        }

        let body: ValueRange = response.json().await?;
        Ok(body.values)
    }

    /// Append one row to `range`, returning the range Google reports it
    /// landed in (e.g. `VolunteerSignups!A12:K12`).
    pub async fn values_append(&self, range: &str, row: Vec<String>) -> Result<String, GoogleError> {
        let token = self.auth.bearer_token(SCOPE_SHEETS).await?;

        let url = format!(
            "{}/{}/values/{}:append",
            SHEETS_BASE_URL,
            self.spreadsheet_id,
            encode_range(range)
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&serde_json::json!({ "values": [row] }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GoogleError::Status(response.status().as_u16()));
        }

        let body: AppendResponse = response.json().await?;
        Ok(body.updates.updated_range)
    }
}

/// Ranges name a sheet tab, which may contain spaces (`Form Responses 1!A:Z`).
fn encode_range(range: &str) -> String {
    range.replace(' ', "%20")
}
