//! Record to view-model mapping
//!
//! Cards are plain data. Whatever renders them (HTML, JSON, a terminal)
//! never has to look at the underlying record.

use serde::Serialize;

use super::filter::{Community, Listing};
use crate::db::models::{Event, Resource};

/// Shown instead of an empty list
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try adjusting your filters.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityBadge {
    pub value: String,
    pub label: String,
}

impl CommunityBadge {
    /// Unknown stored values keep the raw value as their label
    pub fn from_value(value: &str) -> Self {
        let label = Community::parse(value)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| value.to_string());

        Self {
            value: value.to_string(),
            label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    Address,
    Phone,
    Email,
    Director,
    Date,
    Time,
    Location,
    Organizer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDetail {
    pub kind: DetailKind,
    pub value: String,
}

/// One rendered result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<CommunityBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<CardDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CardView {
    /// Card with the fields every listing has
    pub fn from_listing<L: Listing + ?Sized>(listing: &L) -> Self {
        Self {
            title: listing.name().to_string(),
            category: listing.category().to_string(),
            community: listing.community_focus().map(CommunityBadge::from_value),
            summary: listing.description().map(str::to_string),
            details: Vec::new(),
            link: None,
        }
    }

    /// Append a detail line when the value is present and non-blank
    pub fn with_detail(mut self, kind: DetailKind, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.details.push(CardDetail {
                kind,
                value: value.to_string(),
            });
        }
        self
    }

    pub fn with_link(mut self, link: Option<&str>) -> Self {
        self.link = link.map(str::to_string);
        self
    }
}

/// Listings that know how to present themselves as a card
pub trait Card: Listing {
    fn card(&self) -> CardView;
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DirectoryView {
    Cards { cards: Vec<CardView> },
    Empty { message: String },
}

impl DirectoryView {
    pub fn len(&self) -> usize {
        match self {
            DirectoryView::Cards { cards } => cards.len(),
            DirectoryView::Empty { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Map matches to cards, or a single no-results indicator
pub fn render<C: Card + ?Sized>(matches: &[&C]) -> DirectoryView {
    if matches.is_empty() {
        return DirectoryView::Empty {
            message: NO_RESULTS_MESSAGE.to_string(),
        };
    }

    DirectoryView::Cards {
        cards: matches.iter().map(|m| m.card()).collect(),
    }
}

impl Card for Resource {
    fn card(&self) -> CardView {
        CardView::from_listing(self)
            .with_detail(DetailKind::Address, self.address.as_deref())
            .with_detail(DetailKind::Phone, self.phone.as_deref())
            .with_detail(DetailKind::Email, self.email.as_deref())
            .with_detail(DetailKind::Director, self.director.as_deref())
            .with_link(self.website.as_deref())
    }
}

impl Card for Event {
    fn card(&self) -> CardView {
        let date = self.event_date.format("%B %-d, %Y").to_string();
        let time = match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(format!("{} - {}", start.format("%-I:%M %p"), end.format("%-I:%M %p"))),
            (Some(start), None) => Some(start.format("%-I:%M %p").to_string()),
            _ => None,
        };

        CardView::from_listing(self)
            .with_detail(DetailKind::Date, Some(&date))
            .with_detail(DetailKind::Time, time.as_deref())
            .with_detail(DetailKind::Location, self.location.as_deref())
            .with_detail(DetailKind::Organizer, self.organizer.as_deref())
    }
}
