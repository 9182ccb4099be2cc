//! Contentful Management API Client
//!
//! The one write path: fetch an entry at its current version, rewrite the
//! locale-scoped `spots` field, and republish. The version header makes the
//! update optimistic - a concurrent edit surfaces as a 409, which the caller
//! treats as a best-effort miss rather than retrying.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::domain::repository::{CapacityRepository, SpotsUpdate};
use crate::error::{ContentError, ContentResult};

const MANAGEMENT_BASE_URL: &str = "https://api.contentful.com";
const VERSION_HEADER: &str = "X-Contentful-Version";

#[derive(Debug, Deserialize)]
struct ManagedEntry {
    sys: ManagedSys,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ManagedSys {
    version: i64,
}

/// Write client for the management API.
pub struct ContentfulManagementClient {
    http: reqwest::Client,
    space_id: String,
    environment: String,
    management_token: String,
    locale: String,
}

impl ContentfulManagementClient {
    pub fn new(
        http: reqwest::Client,
        space_id: impl Into<String>,
        environment: impl Into<String>,
        management_token: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            http,
            space_id: space_id.into(),
            environment: environment.into(),
            management_token: management_token.into(),
            locale: locale.into(),
        }
    }

    fn entry_url(&self, entry_id: &str) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries/{}",
            MANAGEMENT_BASE_URL, self.space_id, self.environment, entry_id
        )
    }

    async fn get_entry(&self, entry_id: &str) -> ContentResult<ManagedEntry> {
        let response = self
            .http
            .get(self.entry_url(entry_id))
            .bearer_auth(&self.management_token)
            .send()
            .await?;

        match response.status().as_u16() {
            404 => Err(ContentError::NotFound),
            status if !response.status().is_success() => Err(ContentError::UpstreamStatus(status)),
            _ => Ok(response.json().await?),
        }
    }

    async fn put_fields(
        &self,
        entry_id: &str,
        version: i64,
        fields: &Map<String, Value>,
    ) -> ContentResult<ManagedEntry> {
        let response = self
            .http
            .put(self.entry_url(entry_id))
            .bearer_auth(&self.management_token)
            .header(VERSION_HEADER, version)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        match response.status().as_u16() {
            409 => Err(ContentError::VersionConflict),
            404 => Err(ContentError::NotFound),
            status if !response.status().is_success() => Err(ContentError::UpstreamStatus(status)),
            _ => Ok(response.json().await?),
        }
    }

    async fn publish(&self, entry_id: &str, version: i64) -> ContentResult<()> {
        let response = self
            .http
            .put(format!("{}/published", self.entry_url(entry_id)))
            .bearer_auth(&self.management_token)
            .header(VERSION_HEADER, version)
            .send()
            .await?;

        match response.status().as_u16() {
            409 => Err(ContentError::VersionConflict),
            status if !response.status().is_success() => Err(ContentError::UpstreamStatus(status)),
            _ => Ok(()),
        }
    }

    /// Locale-scoped field value: `fields.spots` is `{"en-US": n}`.
    fn locale_int(&self, fields: &Map<String, Value>, name: &str) -> i64 {
        fields
            .get(name)
            .and_then(|locales| locales.get(&self.locale))
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }
}

impl CapacityRepository for ContentfulManagementClient {
    async fn decrement_spots(&self, entry_id: &str) -> ContentResult<SpotsUpdate> {
        let entry = self.get_entry(entry_id).await?;

        let previous = self.locale_int(&entry.fields, "spots");
        if previous <= 0 {
            return Ok(SpotsUpdate::SoldOut);
        }
        let current = previous - 1;

        let mut fields = entry.fields;
        fields.insert("spots".to_string(), json!({ &self.locale: current }));

        let updated = self.put_fields(entry_id, entry.sys.version, &fields).await?;
        self.publish(entry_id, updated.sys.version).await?;

        Ok(SpotsUpdate::Updated { previous, current })
    }
}
