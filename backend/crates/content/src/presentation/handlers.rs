//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::header;
use axum::response::IntoResponse;
use kernel::envelope::Envelope;

use crate::application::config::ContentConfig;
use crate::application::decrement_spots::DecrementSpotsUseCase;
use crate::application::fallback::FallbackProvider;
use crate::application::list_fundraisers::ListFundraisersUseCase;
use crate::application::list_news::ListNewsUseCase;
use crate::application::list_opportunities::ListOpportunitiesUseCase;
use crate::application::resolve_article::ResolveArticleUseCase;
use crate::error::{ContentError, ContentResult};
use crate::infra::contentful::ContentfulDeliveryClient;
use crate::infra::management::ContentfulManagementClient;
use crate::presentation::dto::{
    ArticleDto, FundraiserDto, OpportunityDto, SpotsUpdateDto, UpdateSpotsRequest,
};

/// Shared state for content handlers
///
/// Either client may be absent in a partially configured environment; the
/// affected endpoints degrade instead of panicking at startup.
#[derive(Clone)]
pub struct ContentAppState {
    pub delivery: Option<Arc<ContentfulDeliveryClient>>,
    pub management: Option<Arc<ContentfulManagementClient>>,
    pub config: Arc<ContentConfig>,
    pub fallback: Arc<dyn FallbackProvider>,
}

/// GET /api/contentful/news
pub async fn list_news(
    State(state): State<ContentAppState>,
) -> ContentResult<Json<Envelope<Vec<ArticleDto>>>> {
    let use_case = ListNewsUseCase::new(
        state.delivery.clone(),
        state.fallback.clone(),
        state.config.clone(),
    );

    let articles = use_case.execute().await?;

    Ok(Json(Envelope::success(
        articles.into_iter().map(ArticleDto::from).collect(),
    )))
}

/// GET /api/contentful/news/{slug}
pub async fn get_article(
    State(state): State<ContentAppState>,
    Path(slug): Path<String>,
) -> ContentResult<Json<Envelope<ArticleDto>>> {
    let repo = state.delivery.clone().ok_or(ContentError::NotConfigured)?;

    let use_case = ResolveArticleUseCase::new(repo, state.config.clone());
    let article = use_case.execute(&slug).await?;

    Ok(Json(Envelope::success(ArticleDto::from(article))))
}

/// GET /api/contentful/volunteer
///
/// Spots change out from under browser caches, so the list is served
/// uncacheable.
pub async fn list_opportunities(
    State(state): State<ContentAppState>,
) -> ContentResult<impl IntoResponse> {
    let use_case = ListOpportunitiesUseCase::new(
        state.delivery.clone(),
        state.fallback.clone(),
        state.config.clone(),
    );

    let opportunities = use_case.execute().await?;
    let dtos: Vec<OpportunityDto> = opportunities.into_iter().map(OpportunityDto::from).collect();

    Ok((
        [
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
        ],
        Json(Envelope::success(dtos)),
    ))
}

/// POST /api/contentful/volunteer/update
///
/// Takes the raw request so a malformed body still gets an enveloped error
/// instead of the extractor's plain-text rejection.
pub async fn update_spots(
    State(state): State<ContentAppState>,
    request: Request,
) -> ContentResult<Json<Envelope<SpotsUpdateDto>>> {
    let Json(req) = Json::<UpdateSpotsRequest>::from_request(request, &())
        .await
        .map_err(|_| ContentError::Validation("Invalid request body".to_string()))?;

    let opportunity_id = req
        .opportunity_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ContentError::Validation("Opportunity ID is required".to_string()))?;

    let use_case = DecrementSpotsUseCase::new(state.management.clone());
    let update = use_case.execute(opportunity_id).await?;

    let dto = SpotsUpdateDto::from_update(opportunity_id, &update).ok_or_else(|| {
        ContentError::Validation("No spots available for this opportunity".to_string())
    })?;

    Ok(Json(Envelope::success(dto)))
}

/// GET /api/fundraising
pub async fn list_fundraisers(
    State(state): State<ContentAppState>,
) -> ContentResult<Json<Envelope<Vec<FundraiserDto>>>> {
    let use_case = ListFundraisersUseCase::new(state.delivery.clone(), state.fallback.clone());

    let fundraisers = use_case.execute().await?;

    Ok(Json(Envelope::success(
        fundraisers.into_iter().map(FundraiserDto::from).collect(),
    )))
}
