//! Read endpoints over the content tables
//!
//! Every handler takes its closed filter from the query string (never
//! rejected, see `Filters`), makes a single store call, and answers with a
//! JSON array. Store failures are rendered by `AppError` as one structured
//! error body.

use axum::{extract::State, Json};
use tracing::instrument;

use crate::{extract::Filters, AppState};
use community_hub_common::{
    db::{
        models::{EconomicContent, Event, HealthResource, HistoricalContent, NewsArticle, Resource},
        EconomicFilter, EventFilter, HealthResourceFilter, HistoryFilter, NewsFilter,
        ResourceFilter,
    },
    errors::Result,
};

/// `GET /api/resources?category=&community=`
#[instrument(skip(state))]
pub async fn list_resources(
    State(state): State<AppState>,
    Filters(filter): Filters<ResourceFilter>,
) -> Result<Json<Vec<Resource>>> {
    Ok(Json(state.store.resources(&filter).await?))
}

/// `GET /api/events?category=&community=&date=`
#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
    Filters(filter): Filters<EventFilter>,
) -> Result<Json<Vec<Event>>> {
    Ok(Json(state.store.events(&filter).await?))
}

/// `GET /api/history?period=`
#[instrument(skip(state))]
pub async fn list_history(
    State(state): State<AppState>,
    Filters(filter): Filters<HistoryFilter>,
) -> Result<Json<Vec<HistoricalContent>>> {
    Ok(Json(state.store.historical_content(&filter).await?))
}

/// `GET /api/health-resources?category=`
#[instrument(skip(state))]
pub async fn list_health_resources(
    State(state): State<AppState>,
    Filters(filter): Filters<HealthResourceFilter>,
) -> Result<Json<Vec<HealthResource>>> {
    Ok(Json(state.store.health_resources(&filter).await?))
}

/// `GET /api/news?category=&location=`
#[instrument(skip(state))]
pub async fn list_news(
    State(state): State<AppState>,
    Filters(filter): Filters<NewsFilter>,
) -> Result<Json<Vec<NewsArticle>>> {
    Ok(Json(state.store.news_articles(&filter).await?))
}

/// `GET /api/economic?category=`
#[instrument(skip(state))]
pub async fn list_economic(
    State(state): State<AppState>,
    Filters(filter): Filters<EconomicFilter>,
) -> Result<Json<Vec<EconomicContent>>> {
    Ok(Json(state.store.economic_content(&filter).await?))
}
