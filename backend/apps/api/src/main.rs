//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are each module's
//! own error type.
//!
//! Every upstream integration is optional: missing credentials produce a
//! `None` client and the affected endpoints degrade (fallback content,
//! disabled sinks) instead of preventing startup.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router, http,
    http::{Method, header},
};
use content::{
    ContentConfig, ContentfulDeliveryClient, ContentfulManagementClient, StaticFallback,
    content_router, presentation::handlers::ContentAppState,
};
use events::{
    EventsConfig, GoogleCalendarClient, events_router, presentation::handlers::EventsAppState,
};
use platform::cache::TtlCache;
use platform::google::{GoogleAuthenticator, ServiceAccountKey, SheetsClient};
use platform::rate_limit::InMemoryRateLimitStore;
use teacher_requests::{
    SheetsResponseSource, TeacherRequestsConfig, application::config::DEFAULT_RANGE,
    presentation::handlers::TeacherRequestsAppState, teacher_requests_router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use volunteer::{
    ResendMailer, SheetsSignupLog, SignupConfig, presentation::handlers::VolunteerAppState,
    volunteer_router,
};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 31180;
const DEFAULT_LOCALE: &str = "en-US";
const RATE_LIMIT_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "api=info,content=info,events=info,volunteer=info,teacher_requests=info,tower_http=info"
                .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // One connection pool for every upstream API
    let http = reqwest::Client::new();

    // Contentful clients
    let space_id = env_nonempty("CONTENTFUL_SPACE_ID");
    let environment =
        env_nonempty("CONTENTFUL_ENVIRONMENT").unwrap_or_else(|| "master".to_string());

    let delivery = match (&space_id, env_nonempty("CONTENTFUL_ACCESS_TOKEN")) {
        (Some(space), Some(token)) => Some(Arc::new(ContentfulDeliveryClient::new(
            http.clone(),
            space.clone(),
            environment.clone(),
            token,
        ))),
        _ => None,
    };
    let management = match (&space_id, env_nonempty("CONTENTFUL_MANAGEMENT_TOKEN")) {
        (Some(space), Some(token)) => Some(Arc::new(ContentfulManagementClient::new(
            http.clone(),
            space.clone(),
            environment.clone(),
            token,
            DEFAULT_LOCALE,
        ))),
        _ => None,
    };

    // Google service account
    let google_auth = match (
        env_nonempty("GOOGLE_SERVICE_ACCOUNT_EMAIL"),
        env_nonempty("GOOGLE_PRIVATE_KEY"),
    ) {
        (Some(email), Some(key)) => Some(Arc::new(GoogleAuthenticator::new(
            http.clone(),
            ServiceAccountKey::new(email, key),
        ))),
        _ => None,
    };

    let sheets = match (&google_auth, env_nonempty("GOOGLE_SHEETS_ID")) {
        (Some(auth), Some(sheet_id)) => {
            Some(Arc::new(SheetsClient::new(http.clone(), auth.clone(), sheet_id)))
        }
        _ => None,
    };

    tracing::info!(
        contentful_delivery = delivery.is_some(),
        contentful_management = management.is_some(),
        google_account = google_auth.as_deref().map(GoogleAuthenticator::client_email),
        sheets = sheets.is_some(),
        "Upstream integrations"
    );

    // Content
    let content_state = ContentAppState {
        delivery,
        management: management.clone(),
        config: Arc::new(ContentConfig::default()),
        fallback: Arc::new(StaticFallback),
    };

    // Events
    let calendar = google_auth
        .as_ref()
        .map(|auth| Arc::new(GoogleCalendarClient::new(http.clone(), auth.clone())));
    let events_state = EventsAppState {
        calendar,
        config: Arc::new(EventsConfig {
            calendar_id: env_nonempty("GOOGLE_CALENDAR_ID"),
            ..EventsConfig::default()
        }),
    };

    // Volunteer
    let limiter = Arc::new(InMemoryRateLimitStore::new());
    limiter.clone().spawn_sweeper(RATE_LIMIT_SWEEP_INTERVAL);

    let signup_log = sheets.as_ref().map(|sheets| {
        Arc::new(SheetsSignupLog::new(
            sheets.clone(),
            volunteer::infra::sheets_log::DEFAULT_RANGE,
        ))
    });
    let mailer = env_nonempty("RESEND_API_KEY").map(|api_key| {
        let from = env_nonempty("EMAIL_FROM")
            .unwrap_or_else(|| SignupConfig::default().email_from);
        Arc::new(ResendMailer::new(http.clone(), api_key, from))
    });
    let signup_config = SignupConfig {
        pto_email: env_nonempty("PTO_EMAIL").unwrap_or_else(|| SignupConfig::default().pto_email),
        ..SignupConfig::default()
    };
    let volunteer_state = VolunteerAppState {
        limiter,
        log: signup_log,
        mailer,
        capacity: management,
        config: Arc::new(signup_config),
    };

    // Teacher requests
    let response_source = sheets
        .as_ref()
        .map(|sheets| Arc::new(SheetsResponseSource::new(sheets.clone(), DEFAULT_RANGE)));
    let teacher_state = TeacherRequestsAppState {
        source: response_source,
        cache: Arc::new(TtlCache::new()),
        config: Arc::new(TeacherRequestsConfig::default()),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]));

    // Build router
    let api = content_router(content_state)
        .merge(events_router(events_state))
        .merge(volunteer_router(volunteer_state))
        .merge(teacher_requests_router(teacher_state));

    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env_nonempty("PORT")
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Present-and-nonempty environment lookup; blank values read as unset.
fn env_nonempty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
