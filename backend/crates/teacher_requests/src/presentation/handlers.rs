//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use kernel::envelope::Envelope;
use platform::cache::TtlCache;

use crate::application::config::TeacherRequestsConfig;
use crate::application::fetch_requests::{FetchTeacherRequestsUseCase, TeacherRequestsPayload};
use crate::error::TeacherRequestsResult;
use crate::infra::sheets::SheetsResponseSource;

/// Shared state for teacher-request handlers
#[derive(Clone)]
pub struct TeacherRequestsAppState {
    pub source: Option<Arc<SheetsResponseSource>>,
    pub cache: Arc<TtlCache<TeacherRequestsPayload>>,
    pub config: Arc<TeacherRequestsConfig>,
}

/// GET /api/teacher-requests
pub async fn get_teacher_requests(
    State(state): State<TeacherRequestsAppState>,
) -> TeacherRequestsResult<Json<Envelope<TeacherRequestsPayload>>> {
    let use_case = FetchTeacherRequestsUseCase::new(
        state.source.clone(),
        state.cache.clone(),
        state.config.clone(),
    );

    let payload = use_case.execute().await?;

    Ok(Json(Envelope::success(payload)))
}
