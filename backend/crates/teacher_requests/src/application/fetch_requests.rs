//! Fetch Teacher Requests Use Case

use std::sync::Arc;

use chrono::Utc;
use platform::cache::TtlCache;
use serde::Serialize;

use crate::application::config::TeacherRequestsConfig;
use crate::domain::roster::{ResponseRow, TeacherRoster, WishlistItem};
use crate::domain::source::ResponseSource;
use crate::error::{TeacherRequestsError, TeacherRequestsResult};

/// The processed, cacheable response payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRequestsPayload {
    pub requests: Vec<ResponseRow>,
    pub anonymous_items: Vec<WishlistItem>,
    pub total_teachers: usize,
    pub last_updated: String,
}

/// Fetch Teacher Requests Use Case
///
/// A full sheet read per request would burn through the Sheets quota, so the
/// assembled payload is cached and every caller inside the TTL gets the same
/// snapshot, `lastUpdated` included.
pub struct FetchTeacherRequestsUseCase<S>
where
    S: ResponseSource,
{
    source: Option<Arc<S>>,
    cache: Arc<TtlCache<TeacherRequestsPayload>>,
    config: Arc<TeacherRequestsConfig>,
}

impl<S> FetchTeacherRequestsUseCase<S>
where
    S: ResponseSource,
{
    pub fn new(
        source: Option<Arc<S>>,
        cache: Arc<TtlCache<TeacherRequestsPayload>>,
        config: Arc<TeacherRequestsConfig>,
    ) -> Self {
        Self {
            source,
            cache,
            config,
        }
    }

    pub async fn execute(&self) -> TeacherRequestsResult<TeacherRequestsPayload> {
        if let Some(cached) = self.cache.get(self.config.cache_ttl).await {
            tracing::debug!("Serving cached teacher requests");
            return Ok(cached);
        }

        let source = self
            .source
            .as_ref()
            .ok_or(TeacherRequestsError::NotConfigured)?;
        let rows = source.rows().await?;

        let roster = TeacherRoster::assemble(rows, &self.config.consent_column)
            .ok_or(TeacherRequestsError::Empty)?;

        tracing::info!(
            total = roster.total_teachers,
            public = roster.requests.len(),
            anonymous_items = roster.anonymous_items.len(),
            "Assembled teacher roster"
        );

        let payload = TeacherRequestsPayload {
            requests: roster.requests,
            anonymous_items: roster.anonymous_items,
            total_teachers: roster.total_teachers,
            last_updated: Utc::now().to_rfc3339(),
        };
        self.cache.store(payload.clone()).await;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeSource {
        rows: Vec<Vec<String>>,
        calls: Mutex<u32>,
    }

    impl FakeSource {
        fn new(rows: Vec<Vec<String>>) -> Self {
            Self {
                rows,
                calls: Mutex::new(0),
            }
        }
    }

    impl ResponseSource for FakeSource {
        async fn rows(&self) -> TeacherRequestsResult<Vec<Vec<String>>> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.rows.clone())
        }
    }

    fn config() -> Arc<TeacherRequestsConfig> {
        Arc::new(TeacherRequestsConfig {
            consent_column: "Share?".to_string(),
            ..TeacherRequestsConfig::default()
        })
    }

    fn sample_rows() -> Vec<Vec<String>> {
        vec![
            vec!["Name".to_string(), "Share?".to_string()],
            vec!["Ms. Lee".to_string(), "Yes".to_string()],
        ]
    }

    #[tokio::test]
    async fn test_second_call_within_ttl_hits_cache() {
        let source = Arc::new(FakeSource::new(sample_rows()));
        let use_case = FetchTeacherRequestsUseCase::new(
            Some(source.clone()),
            Arc::new(TtlCache::new()),
            config(),
        );

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(*source.calls.lock().unwrap(), 1);
        // Cached snapshot, timestamp included.
        assert_eq!(first.last_updated, second.last_updated);
    }

    #[tokio::test]
    async fn test_unconfigured_source_errors() {
        let use_case = FetchTeacherRequestsUseCase::<FakeSource>::new(
            None,
            Arc::new(TtlCache::new()),
            config(),
        );
        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, TeacherRequestsError::NotConfigured));
    }

    #[tokio::test]
    async fn test_empty_sheet_errors() {
        let source = Arc::new(FakeSource::new(Vec::new()));
        let use_case =
            FetchTeacherRequestsUseCase::new(Some(source), Arc::new(TtlCache::new()), config());
        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, TeacherRequestsError::Empty));
    }

    #[tokio::test]
    async fn test_payload_field_names() {
        let source = Arc::new(FakeSource::new(sample_rows()));
        let use_case =
            FetchTeacherRequestsUseCase::new(Some(source), Arc::new(TtlCache::new()), config());

        let payload = use_case.execute().await.unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["totalTeachers"], 1);
        assert!(json["anonymousItems"].as_array().unwrap().is_empty());
        assert!(json.get("lastUpdated").is_some());
        assert_eq!(json["requests"][0]["Name"], "Ms. Lee");
    }
}
