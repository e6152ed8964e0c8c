//! Filter predicate shared by every directory listing
//!
//! Mirrors the read endpoints: category and community are equality
//! matches (community also accepts the `both` wildcard), and a free-text
//! search looks at the name and description. Matching keeps the original
//! order of the input.

use serde::{Deserialize, Serialize};

use crate::db::models::{Event, Resource};
use crate::COMMUNITY_WILDCARD;

/// Closed set of community focus values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Community {
    Black,
    Latino,
    Both,
}

impl Community {
    /// Stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            Community::Black => "black",
            Community::Latino => "latino",
            Community::Both => COMMUNITY_WILDCARD,
        }
    }

    /// Label shown on cards and filter controls
    pub fn label(&self) -> &'static str {
        match self {
            Community::Black => "Black Community Focus",
            Community::Latino => "Latino Community Focus",
            Community::Both => "All Communities",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "black" => Some(Community::Black),
            "latino" => Some(Community::Latino),
            v if v == COMMUNITY_WILDCARD => Some(Community::Both),
            _ => None,
        }
    }
}

/// Anything the directory can filter
pub trait Listing {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn community_focus(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
}

/// Current selection of the directory filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryCriteria {
    /// Selected category; `None` or blank means all categories
    pub category: Option<String>,

    /// Selected community; `None` or blank means all communities
    pub community: Option<String>,

    /// Free-text search
    #[serde(rename = "q")]
    pub search: String,
}

fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl DirectoryCriteria {
    /// No control narrows the listing
    pub fn is_unfiltered(&self) -> bool {
        selected(&self.category).is_none()
            && selected(&self.community).is_none()
            && self.search.trim().is_empty()
    }

    /// All three predicates, combined with AND
    pub fn matches<L: Listing + ?Sized>(&self, listing: &L) -> bool {
        if let Some(category) = selected(&self.category) {
            if listing.category() != category {
                return false;
            }
        }

        if let Some(community) = selected(&self.community) {
            match listing.community_focus() {
                Some(focus) if focus == community || focus == COMMUNITY_WILDCARD => {}
                _ => return false,
            }
        }

        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let in_name = listing.name().to_lowercase().contains(&needle);
            let in_description = listing
                .description()
                .map_or(false, |d| d.to_lowercase().contains(&needle));
            if !in_name && !in_description {
                return false;
            }
        }

        true
    }
}

/// Stable filter: matching items in their original relative order
pub fn filter_listings<'a, L: Listing>(items: &'a [L], criteria: &DirectoryCriteria) -> Vec<&'a L> {
    items.iter().filter(|item| criteria.matches(*item)).collect()
}

impl Listing for Resource {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn community_focus(&self) -> Option<&str> {
        self.community_focus.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Listing for Event {
    fn name(&self) -> &str {
        &self.title
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn community_focus(&self) -> Option<&str> {
        self.community_focus.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
