//! Static directory pipeline
//!
//! Filters and renders the embedded partner and event snapshots with the
//! same predicate semantics as the read endpoints:
//! - `filter`: criteria and the stable AND predicate
//! - `view`: pure record to card view-model mapping
//! - `dataset`: the embedded snapshot
//! - `state`: explicit page state with a single update entry point

pub mod dataset;
pub mod filter;
pub mod state;
pub mod view;

pub use dataset::{Partner, SampleEvent};
pub use filter::{filter_listings, Community, DirectoryCriteria, Listing};
pub use state::{Dataset, PortalAction, PortalState, Section, Transition};
pub use view::{render, Card, CardView, DirectoryView};

use crate::metrics;

/// Loaded directory datasets, shared read-only across requests
#[derive(Debug, Clone)]
pub struct Directory {
    partners: Vec<Partner>,
    events: Vec<SampleEvent>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(dataset::PARTNERS.to_vec(), dataset::SAMPLE_EVENTS.to_vec())
    }
}

impl Directory {
    pub fn new(partners: Vec<Partner>, events: Vec<SampleEvent>) -> Self {
        Self { partners, events }
    }

    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    pub fn events(&self) -> &[SampleEvent] {
        &self.events
    }

    /// Filter and render one dataset
    pub fn render(&self, dataset: Dataset, criteria: &DirectoryCriteria) -> DirectoryView {
        let view = match dataset {
            Dataset::Partners => render(&filter_listings(&self.partners, criteria)),
            Dataset::Events => render(&filter_listings(&self.events, criteria)),
        };

        metrics::record_directory_render(dataset.as_str(), view.len());
        view
    }

    /// Listing for the current page state, if its section has one
    pub fn view(&self, state: &PortalState) -> Option<DirectoryView> {
        state
            .section()
            .dataset()
            .map(|dataset| self.render(dataset, state.criteria()))
    }

    /// Distinct categories of a dataset, in first-seen order
    pub fn categories(&self, dataset: Dataset) -> Vec<&str> {
        let all: Vec<&str> = match dataset {
            Dataset::Partners => self.partners.iter().map(|p| p.category).collect(),
            Dataset::Events => self.events.iter().map(|e| e.category).collect(),
        };

        let mut seen = Vec::new();
        for category in all {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(view: &DirectoryView) -> Vec<String> {
        match view {
            DirectoryView::Cards { cards } => cards.iter().map(|c| c.title.clone()).collect(),
            DirectoryView::Empty { .. } => Vec::new(),
        }
    }

    #[test]
    fn test_unfiltered_partners_are_full_dataset() {
        let directory = Directory::default();
        let view = directory.render(Dataset::Partners, &DirectoryCriteria::default());

        let expected: Vec<String> = directory.partners().iter().map(|p| p.name.to_string()).collect();
        assert_eq!(titles(&view), expected);
    }

    #[test]
    fn test_food_security_category() {
        let directory = Directory::default();
        let criteria = DirectoryCriteria {
            category: Some("Food Security".to_string()),
            ..Default::default()
        };
        let view = directory.render(Dataset::Partners, &criteria);

        let expected: Vec<String> = directory
            .partners()
            .iter()
            .filter(|p| p.category == "Food Security")
            .map(|p| p.name.to_string())
            .collect();
        assert!(!expected.is_empty());
        assert_eq!(titles(&view), expected);
    }

    #[test]
    fn test_no_match_renders_indicator() {
        let directory = Directory::default();
        let criteria = DirectoryCriteria {
            search: "zzz-no-such-partner".to_string(),
            ..Default::default()
        };

        let view = directory.render(Dataset::Events, &criteria);
        assert!(matches!(view, DirectoryView::Empty { .. }));
    }

    #[test]
    fn test_state_drives_view() {
        let directory = Directory::default();
        let mut state = PortalState::new();
        assert!(directory.view(&state).is_none());

        state.apply(PortalAction::Navigate(Section::Events));
        state.apply(PortalAction::SelectCommunity(Some("latino".to_string())));
        let view = directory.view(&state).unwrap();

        // Latino-focused events plus the events for all communities
        assert_eq!(
            titles(&view),
            vec![
                "Community Health Fair",
                "Feria de Empleo",
                "Thanksgiving Food Drive",
                "Know Your Rights Workshop",
            ]
        );
    }

    #[test]
    fn test_categories_first_seen_order() {
        let directory = Directory::default();
        let categories = directory.categories(Dataset::Partners);
        assert_eq!(categories[0], "Food Security");
        assert_eq!(categories[1], "Health & Wellness");
        assert_eq!(categories.len(), 6);
    }
}
