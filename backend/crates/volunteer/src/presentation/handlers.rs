//! HTTP Handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{ConnectInfo, FromRequest, Request, State};
use axum::http::header;
use content::ContentfulManagementClient;
use kernel::envelope::Envelope;
use platform::client::client_identifier;
use platform::rate_limit::InMemoryRateLimitStore;

use crate::application::config::{MAX_BODY_BYTES, SignupConfig};
use crate::application::list_signups::ListSignupsUseCase;
use crate::application::submit_signup::SubmitSignupUseCase;
use crate::error::{SignupError, SignupResult};
use crate::infra::resend::ResendMailer;
use crate::infra::sheets_log::SheetsSignupLog;
use crate::presentation::dto::{SignupListDto, SignupReportDto, SignupRequest};

/// Shared state for volunteer handlers
///
/// Any sink may be absent in a partially configured environment; the
/// orchestrator reports the gap instead of refusing the signup.
#[derive(Clone)]
pub struct VolunteerAppState {
    pub limiter: Arc<InMemoryRateLimitStore>,
    pub log: Option<Arc<SheetsSignupLog>>,
    pub mailer: Option<Arc<ResendMailer>>,
    pub capacity: Option<Arc<ContentfulManagementClient>>,
    pub config: Arc<SignupConfig>,
}

/// POST /api/volunteer/signup
///
/// Takes the raw request so the declared size can be rejected before the
/// body is read.
pub async fn submit_signup(
    State(state): State<VolunteerAppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
) -> SignupResult<Json<Envelope<SignupReportDto>>> {
    let declared_length = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    if declared_length.is_some_and(|length| length > MAX_BODY_BYTES) {
        return Err(SignupError::PayloadTooLarge);
    }

    let client_key = client_identifier(request.headers(), Some(addr.ip()));

    let Json(req) = Json::<SignupRequest>::from_request(request, &())
        .await
        .map_err(|_| SignupError::Validation("Invalid request body".to_string()))?;

    let use_case = SubmitSignupUseCase::new(
        state.limiter.clone(),
        state.log.clone(),
        state.mailer.clone(),
        state.capacity.clone(),
        state.config.clone(),
    );

    let outcome = use_case.execute(&client_key, req.into()).await?;

    Ok(Json(Envelope::success(SignupReportDto::from(outcome))))
}

/// GET /api/volunteer/signups
pub async fn list_signups(
    State(state): State<VolunteerAppState>,
) -> SignupResult<Json<Envelope<SignupListDto>>> {
    let use_case = ListSignupsUseCase::new(state.log.clone());
    let rows = use_case.execute().await?;

    Ok(Json(Envelope::success(SignupListDto::from_rows(rows))))
}
