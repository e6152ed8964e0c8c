//! Repository pattern for database operations
//!
//! Read-only access to the content tables. Every query is built by the
//! filter's `ContentQuery` impl, so values are always bound parameters.

use crate::db::filters::{self, ContentQuery};
use crate::db::models::*;
use crate::db::{
    ContentStore, DbPool, EconomicFilter, EventFilter, HealthResourceFilter, HistoryFilter,
    NewsFilter, ResourceFilter,
};
use crate::errors::{AppError, Result};
use crate::metrics;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::time::Instant;
use tracing::debug;

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get the read connection
    fn read_conn(&self) -> &DatabaseConnection {
        self.pool.read()
    }

    /// Run one filtered select against the read connection.
    ///
    /// Store errors become `AppError::DataAccess`, which only names the
    /// entity when rendered for a caller.
    async fn fetch<Q>(&self, filter: &Q) -> Result<Vec<<Q::Entity as EntityTrait>::Model>>
    where
        Q: ContentQuery + Sync,
    {
        let started = Instant::now();
        let outcome = filter.select(filters::today()).all(self.read_conn()).await;
        let elapsed = started.elapsed().as_secs_f64();

        match outcome {
            Ok(rows) => {
                metrics::record_query(Q::ENTITY, elapsed, rows.len(), true);
                debug!(entity = Q::ENTITY, rows = rows.len(), "Content query completed");
                Ok(rows)
            }
            Err(source) => {
                metrics::record_query(Q::ENTITY, elapsed, 0, false);
                Err(AppError::DataAccess {
                    entity: Q::ENTITY,
                    source,
                })
            }
        }
    }
}

#[async_trait]
impl ContentStore for Repository {
    async fn resources(&self, filter: &ResourceFilter) -> Result<Vec<Resource>> {
        self.fetch(filter).await
    }

    async fn events(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        self.fetch(filter).await
    }

    async fn historical_content(&self, filter: &HistoryFilter) -> Result<Vec<HistoricalContent>> {
        self.fetch(filter).await
    }

    async fn health_resources(&self, filter: &HealthResourceFilter) -> Result<Vec<HealthResource>> {
        self.fetch(filter).await
    }

    async fn news_articles(&self, filter: &NewsFilter) -> Result<Vec<NewsArticle>> {
        self.fetch(filter).await
    }

    async fn economic_content(&self, filter: &EconomicFilter) -> Result<Vec<EconomicContent>> {
        self.fetch(filter).await
    }

    async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    async fn provision(&self) -> Result<Vec<String>> {
        crate::db::provision(self.pool.write()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use chrono::{Duration, NaiveDate, NaiveTime};
    use sea_orm::{ActiveValue::Set, Database};

    async fn memory_pool() -> DbPool {
        // A single connection keeps the in-memory database alive and shared
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            read_url: None,
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: 5,
            idle_timeout_secs: 300,
        };
        DbPool::new(&config).await.unwrap()
    }

    fn resource(name: &str, category: &str, community: Option<&str>) -> ResourceActiveModel {
        ResourceActiveModel {
            name: Set(name.to_string()),
            category: Set(category.to_string()),
            community_focus: Set(community.map(str::to_string)),
            description: Set(Some(format!("{} serves the neighborhood", name))),
            ..Default::default()
        }
    }

    fn event(title: &str, date: NaiveDate, category: &str, community: Option<&str>) -> EventActiveModel {
        EventActiveModel {
            title: Set(title.to_string()),
            event_date: Set(date),
            start_time: Set(NaiveTime::from_hms_opt(10, 0, 0)),
            category: Set(category.to_string()),
            community_focus: Set(community.map(str::to_string)),
            is_recurring: Set(false),
            ..Default::default()
        }
    }

    async fn seeded_repository() -> Repository {
        let repo = Repository::new(memory_pool().await);
        repo.provision().await.unwrap();
        let conn = repo.pool.write();

        ResourceEntity::insert_many(vec![
            resource("Unity Health Clinic", "Health & Wellness", Some("both")),
            resource("Eastside Food Pantry", "Food Security", Some("black")),
            resource("Casa Comunitaria", "Education", Some("latino")),
            resource("Black Business Alliance", "Economic Development", Some("black")),
            resource("Mercado Fresh Food Co-op", "Food Security", Some("latino")),
            resource("Neighborhood Legal Aid", "Legal Services", None),
        ])
        .exec(conn)
        .await
        .unwrap();

        let today = filters::today();
        EventEntity::insert_many(vec![
            event("Harvest Festival", today + Duration::days(30), "Culture", Some("both")),
            event("Past Health Fair", today - Duration::days(3), "Health", Some("black")),
            event("Job Readiness Workshop", today + Duration::days(5), "Economic", Some("latino")),
            event("Community Dinner", today, "Culture", Some("black")),
        ])
        .exec(conn)
        .await
        .unwrap();

        NewsArticleEntity::insert_many(vec![
            NewsArticleActiveModel {
                title: Set("Older Story".to_string()),
                category: Set("Community".to_string()),
                publish_date: Set(Some(today - Duration::days(20))),
                location: Set(Some("Charlotte".to_string())),
                ..Default::default()
            },
            NewsArticleActiveModel {
                title: Set("Newest Story".to_string()),
                category: Set("Community".to_string()),
                publish_date: Set(Some(today - Duration::days(1))),
                location: Set(Some("Durham".to_string())),
                ..Default::default()
            },
        ])
        .exec(conn)
        .await
        .unwrap();

        HistoricalContentEntity::insert_many(vec![
            HistoricalContentActiveModel {
                title: Set("Sit-In Movement".to_string()),
                time_period: Set("Civil Rights Era".to_string()),
                ..Default::default()
            },
            HistoricalContentActiveModel {
                title: Set("Bracero Program".to_string()),
                time_period: Set("Post-War".to_string()),
                ..Default::default()
            },
        ])
        .exec(conn)
        .await
        .unwrap();

        repo
    }

    fn names(rows: &[Resource]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_unfiltered_resources_sorted_by_name() {
        let repo = seeded_repository().await;
        let rows = repo.resources(&ResourceFilter::default()).await.unwrap();

        assert_eq!(
            names(&rows),
            vec![
                "Black Business Alliance",
                "Casa Comunitaria",
                "Eastside Food Pantry",
                "Mercado Fresh Food Co-op",
                "Neighborhood Legal Aid",
                "Unity Health Clinic",
            ]
        );
    }

    #[tokio::test]
    async fn test_community_filter_includes_wildcard_rows() {
        let repo = seeded_repository().await;

        for community in ["black", "latino", "nobody-specific"] {
            let filter = ResourceFilter {
                category: None,
                community: Some(community.to_string()),
            };
            let rows = repo.resources(&filter).await.unwrap();
            assert!(
                names(&rows).contains(&"Unity Health Clinic"),
                "wildcard row missing for {}",
                community
            );
        }

        let filter = ResourceFilter {
            category: None,
            community: Some("latino".to_string()),
        };
        let rows = repo.resources(&filter).await.unwrap();
        assert_eq!(
            names(&rows),
            vec!["Casa Comunitaria", "Mercado Fresh Food Co-op", "Unity Health Clinic"]
        );
    }

    #[tokio::test]
    async fn test_filtered_results_are_subset_of_unfiltered() {
        let repo = seeded_repository().await;
        let all = repo.resources(&ResourceFilter::default()).await.unwrap();

        let categories = [None, Some("Food Security"), Some("Education")];
        let communities = [None, Some("black"), Some("latino")];

        for category in categories {
            for community in communities {
                let filter = ResourceFilter {
                    category: category.map(str::to_string),
                    community: community.map(str::to_string),
                };
                let rows = repo.resources(&filter).await.unwrap();

                let expected: Vec<&Resource> = all
                    .iter()
                    .filter(|r| category.map_or(true, |c| r.category == c))
                    .filter(|r| {
                        community.map_or(true, |c| {
                            matches!(r.community_focus.as_deref(), Some(v) if v == c || v == "both")
                        })
                    })
                    .collect();

                assert_eq!(rows.iter().collect::<Vec<_>>(), expected, "{:?}", filter);
            }
        }
    }

    #[tokio::test]
    async fn test_events_default_window_excludes_past() {
        let repo = seeded_repository().await;
        let rows = repo.events(&EventFilter::default()).await.unwrap();

        let titles: Vec<&str> = rows.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Community Dinner", "Job Readiness Workshop", "Harvest Festival"]
        );
        assert!(rows.iter().all(|e| e.event_date >= filters::today()));
    }

    #[tokio::test]
    async fn test_events_explicit_date_floor() {
        let repo = seeded_repository().await;
        let floor = filters::today() - Duration::days(10);
        let filter = EventFilter {
            date: Some(floor.format(filters::DATE_FORMAT).to_string()),
            ..Default::default()
        };
        let rows = repo.events(&filter).await.unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].title, "Past Health Fair");

        let filter = EventFilter {
            community: Some("black".to_string()),
            date: Some(floor.format(filters::DATE_FORMAT).to_string()),
            ..Default::default()
        };
        let titles: Vec<String> = repo
            .events(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Past Health Fair", "Community Dinner", "Harvest Festival"]);
    }

    #[tokio::test]
    async fn test_news_newest_first_and_location_filter() {
        let repo = seeded_repository().await;

        let rows = repo.news_articles(&NewsFilter::default()).await.unwrap();
        let titles: Vec<&str> = rows.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest Story", "Older Story"]);

        let filter = NewsFilter {
            category: None,
            location: Some("Charlotte".to_string()),
        };
        let rows = repo.news_articles(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Older Story");
    }

    #[tokio::test]
    async fn test_history_period_filter_and_empty_tables() {
        let repo = seeded_repository().await;

        let filter = HistoryFilter { period: Some("Civil Rights Era".to_string()) };
        let rows = repo.historical_content(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Sit-In Movement");

        let rows = repo.historical_content(&HistoryFilter::default()).await.unwrap();
        assert_eq!(rows[0].title, "Bracero Program");

        // No match is an empty list, not an error
        let rows = repo.health_resources(&HealthResourceFilter::default()).await.unwrap();
        assert!(rows.is_empty());
        let filter = EconomicFilter { category: Some("Grants".to_string()) };
        assert!(repo.economic_content(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unfiltered_health_and_economic_sorted_by_title() {
        let repo = Repository::new(memory_pool().await);
        repo.provision().await.unwrap();
        let conn = repo.pool.write();

        HealthResourceEntity::insert_many(vec![
            HealthResourceActiveModel {
                title: Set("Managing Hypertension".to_string()),
                category: Set("Chronic Care".to_string()),
                ..Default::default()
            },
            HealthResourceActiveModel {
                title: Set("Free Flu Shots".to_string()),
                category: Set("Prevention".to_string()),
                ..Default::default()
            },
            HealthResourceActiveModel {
                title: Set("Diabetes Basics".to_string()),
                category: Set("Chronic Care".to_string()),
                ..Default::default()
            },
        ])
        .exec(conn)
        .await
        .unwrap();

        EconomicContentEntity::insert_many(vec![
            EconomicContentActiveModel {
                title: Set("Small Business Grants".to_string()),
                category: Set("Grants".to_string()),
                ..Default::default()
            },
            EconomicContentActiveModel {
                title: Set("Building Credit".to_string()),
                category: Set("Financial Literacy".to_string()),
                ..Default::default()
            },
        ])
        .exec(conn)
        .await
        .unwrap();

        let rows = repo.health_resources(&HealthResourceFilter::default()).await.unwrap();
        let titles: Vec<&str> = rows.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Diabetes Basics", "Free Flu Shots", "Managing Hypertension"]);

        let filter = HealthResourceFilter { category: Some("Chronic Care".to_string()) };
        let rows = repo.health_resources(&filter).await.unwrap();
        let titles: Vec<&str> = rows.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Diabetes Basics", "Managing Hypertension"]);

        let rows = repo.economic_content(&EconomicFilter::default()).await.unwrap();
        let titles: Vec<&str> = rows.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Building Credit", "Small Business Grants"]);
    }

    #[tokio::test]
    async fn test_is_recurring_defaults_to_false() {
        let repo = Repository::new(memory_pool().await);
        repo.provision().await.unwrap();

        EventEntity::insert(EventActiveModel {
            title: Set("Open Mic Night".to_string()),
            event_date: Set(filters::today() + Duration::days(2)),
            category: Set("Culture".to_string()),
            ..Default::default()
        })
        .exec(repo.pool.write())
        .await
        .unwrap();

        let rows = repo.events(&EventFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].is_recurring);
    }

    #[tokio::test]
    async fn test_provision_is_idempotent() {
        let repo = seeded_repository().await;

        let tables = repo.provision().await.unwrap();
        assert_eq!(
            tables,
            vec![
                "resources",
                "events",
                "historical_content",
                "health_resources",
                "news_articles",
                "economic_content",
            ]
        );

        let rows = repo.resources(&ResourceFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 6);
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_data_access() {
        // Tables never provisioned
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        let repo = Repository::new(DbPool::from_connection(conn));

        let err = repo.resources(&ResourceFilter::default()).await.unwrap_err();
        assert!(matches!(err, AppError::DataAccess { entity: "resources", .. }));
        assert_eq!(err.public_message(), "Failed to fetch resources");
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = Repository::new(memory_pool().await);
        assert!(repo.ping().await.is_ok());
    }
}
