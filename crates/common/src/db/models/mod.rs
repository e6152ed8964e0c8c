//! SeaORM entity models
//!
//! One entity per content table. All tables are read-only at request time.

mod resource;
mod event;
mod historical_content;
mod health_resource;
mod news_article;
mod economic_content;

pub use resource::{
    Entity as ResourceEntity,
    Model as Resource,
    ActiveModel as ResourceActiveModel,
    Column as ResourceColumn,
};

pub use event::{
    Entity as EventEntity,
    Model as Event,
    ActiveModel as EventActiveModel,
    Column as EventColumn,
};

pub use historical_content::{
    Entity as HistoricalContentEntity,
    Model as HistoricalContent,
    ActiveModel as HistoricalContentActiveModel,
    Column as HistoricalContentColumn,
};

pub use health_resource::{
    Entity as HealthResourceEntity,
    Model as HealthResource,
    ActiveModel as HealthResourceActiveModel,
    Column as HealthResourceColumn,
};

pub use news_article::{
    Entity as NewsArticleEntity,
    Model as NewsArticle,
    ActiveModel as NewsArticleActiveModel,
    Column as NewsArticleColumn,
};

pub use economic_content::{
    Entity as EconomicContentEntity,
    Model as EconomicContent,
    ActiveModel as EconomicContentActiveModel,
    Column as EconomicContentColumn,
};
