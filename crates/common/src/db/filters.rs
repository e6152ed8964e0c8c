//! Filter configuration and query builder for the read endpoints
//!
//! Each content table has one closed filter struct with an optional field
//! per recognized query parameter. Building a query always:
//! - starts from every row of the entity
//! - adds one bound equality predicate per present filter (AND)
//! - widens community filters to also match the `both` wildcard
//! - limits events to `event_date >= today` unless a date floor is given
//! - ends with a fixed, entity-specific ordering
//!
//! Unknown query parameters never reach this module: serde drops them
//! while deserializing the filter structs.

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Select};
use serde::Deserialize;

use crate::db::models::*;
use crate::COMMUNITY_WILDCARD;

/// Accepted format for the `date` parameter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds the select statement for one content table
pub trait ContentQuery {
    type Entity: EntityTrait;

    /// Table name used in logs, metrics and error messages
    const ENTITY: &'static str;

    /// Build the filtered, ordered select. `today` is only consulted by
    /// filters with a default date window.
    fn select(&self, today: NaiveDate) -> Select<Self::Entity>;
}

/// Current calendar date, evaluated per request
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Trimmed filter value, or `None` when absent or blank
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `column = value OR column = 'both'`
fn community_condition<C: ColumnTrait>(column: C, community: &str) -> Condition {
    Condition::any()
        .add(column.eq(community))
        .add(column.eq(COMMUNITY_WILDCARD))
}

/// Filters for `GET /api/resources`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceFilter {
    pub category: Option<String>,
    pub community: Option<String>,
}

impl ContentQuery for ResourceFilter {
    type Entity = ResourceEntity;
    const ENTITY: &'static str = "resources";

    fn select(&self, _today: NaiveDate) -> Select<ResourceEntity> {
        let mut query = ResourceEntity::find();

        if let Some(category) = provided(&self.category) {
            query = query.filter(ResourceColumn::Category.eq(category));
        }
        if let Some(community) = provided(&self.community) {
            query = query.filter(community_condition(ResourceColumn::CommunityFocus, community));
        }

        query
            .order_by_asc(ResourceColumn::Name)
            .order_by_asc(ResourceColumn::Id)
    }
}

/// Filters for `GET /api/events`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventFilter {
    pub category: Option<String>,
    pub community: Option<String>,
    /// Earliest event date to include (`YYYY-MM-DD`); defaults to today
    pub date: Option<String>,
}

impl EventFilter {
    /// Explicit date floor, if one was supplied and parses.
    ///
    /// An unparseable date is ignored like any other invalid filter value,
    /// so the default upcoming window applies.
    pub fn date_floor(&self) -> Option<NaiveDate> {
        provided(&self.date).and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
    }
}

impl ContentQuery for EventFilter {
    type Entity = EventEntity;
    const ENTITY: &'static str = "events";

    fn select(&self, today: NaiveDate) -> Select<EventEntity> {
        let mut query = EventEntity::find();

        if let Some(category) = provided(&self.category) {
            query = query.filter(EventColumn::Category.eq(category));
        }
        if let Some(community) = provided(&self.community) {
            query = query.filter(community_condition(EventColumn::CommunityFocus, community));
        }

        let floor = self.date_floor().unwrap_or(today);
        query = query.filter(EventColumn::EventDate.gte(floor));

        query
            .order_by_asc(EventColumn::EventDate)
            .order_by_asc(EventColumn::StartTime)
            .order_by_asc(EventColumn::Id)
    }
}

/// Filters for `GET /api/history`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryFilter {
    pub period: Option<String>,
}

impl ContentQuery for HistoryFilter {
    type Entity = HistoricalContentEntity;
    const ENTITY: &'static str = "historical_content";

    fn select(&self, _today: NaiveDate) -> Select<HistoricalContentEntity> {
        let mut query = HistoricalContentEntity::find();

        if let Some(period) = provided(&self.period) {
            query = query.filter(HistoricalContentColumn::TimePeriod.eq(period));
        }

        query
            .order_by_asc(HistoricalContentColumn::Title)
            .order_by_asc(HistoricalContentColumn::Id)
    }
}

/// Filters for `GET /api/health-resources`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HealthResourceFilter {
    pub category: Option<String>,
}

impl ContentQuery for HealthResourceFilter {
    type Entity = HealthResourceEntity;
    const ENTITY: &'static str = "health_resources";

    fn select(&self, _today: NaiveDate) -> Select<HealthResourceEntity> {
        let mut query = HealthResourceEntity::find();

        if let Some(category) = provided(&self.category) {
            query = query.filter(HealthResourceColumn::Category.eq(category));
        }

        query
            .order_by_asc(HealthResourceColumn::Title)
            .order_by_asc(HealthResourceColumn::Id)
    }
}

/// Filters for `GET /api/news`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewsFilter {
    pub category: Option<String>,
    pub location: Option<String>,
}

impl ContentQuery for NewsFilter {
    type Entity = NewsArticleEntity;
    const ENTITY: &'static str = "news_articles";

    fn select(&self, _today: NaiveDate) -> Select<NewsArticleEntity> {
        let mut query = NewsArticleEntity::find();

        if let Some(category) = provided(&self.category) {
            query = query.filter(NewsArticleColumn::Category.eq(category));
        }
        if let Some(location) = provided(&self.location) {
            query = query.filter(NewsArticleColumn::Location.eq(location));
        }

        query
            .order_by_desc(NewsArticleColumn::PublishDate)
            .order_by_asc(NewsArticleColumn::Id)
    }
}

/// Filters for `GET /api/economic`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EconomicFilter {
    pub category: Option<String>,
}

impl ContentQuery for EconomicFilter {
    type Entity = EconomicContentEntity;
    const ENTITY: &'static str = "economic_content";

    fn select(&self, _today: NaiveDate) -> Select<EconomicContentEntity> {
        let mut query = EconomicContentEntity::find();

        if let Some(category) = provided(&self.category) {
            query = query.filter(EconomicContentColumn::Category.eq(category));
        }

        query
            .order_by_asc(EconomicContentColumn::Title)
            .order_by_asc(EconomicContentColumn::Id)
    }
}
