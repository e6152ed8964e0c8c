//! Portal navigation and filter state
//!
//! The page's state is an explicit value. The only way to change it is
//! `PortalState::apply`, which reports whether the directory listing
//! has to be rendered again.

use serde::{Deserialize, Serialize};

use super::filter::DirectoryCriteria;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Home,
    Resources,
    Events,
    History,
    Health,
    News,
    Economic,
}

/// Embedded dataset backing a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Partners,
    Events,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Partners => "partners",
            Dataset::Events => "events",
        }
    }
}

impl Section {
    /// Sections with a filterable directory listing
    pub fn dataset(&self) -> Option<Dataset> {
        match self {
            Section::Resources => Some(Dataset::Partners),
            Section::Events => Some(Dataset::Events),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalAction {
    Navigate(Section),
    SelectCategory(Option<String>),
    SelectCommunity(Option<String>),
    Search(String),
    ClearFilters,
    OpenModal(String),
    CloseModal,
}

/// What the caller must do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Render the listing again, synchronously
    Rerender,
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalState {
    section: Section,
    criteria: DirectoryCriteria,
    open_modal: Option<String>,
}

fn changed(flag: bool) -> Transition {
    if flag {
        Transition::Rerender
    } else {
        Transition::Unchanged
    }
}

impl PortalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn criteria(&self) -> &DirectoryCriteria {
        &self.criteria
    }

    pub fn open_modal(&self) -> Option<&str> {
        self.open_modal.as_deref()
    }

    /// Apply one UI action.
    ///
    /// Navigating to another section resets the filters and closes any
    /// modal. Filter changes re-render only when the value actually moves.
    /// Modals overlay the page and never re-render the listing.
    pub fn apply(&mut self, action: PortalAction) -> Transition {
        match action {
            PortalAction::Navigate(section) => {
                if section == self.section {
                    return Transition::Unchanged;
                }
                self.section = section;
                self.criteria = DirectoryCriteria::default();
                self.open_modal = None;
                Transition::Rerender
            }
            PortalAction::SelectCategory(category) => {
                let moved = self.criteria.category != category;
                self.criteria.category = category;
                changed(moved)
            }
            PortalAction::SelectCommunity(community) => {
                let moved = self.criteria.community != community;
                self.criteria.community = community;
                changed(moved)
            }
            PortalAction::Search(search) => {
                let moved = self.criteria.search != search;
                self.criteria.search = search;
                changed(moved)
            }
            PortalAction::ClearFilters => {
                let moved = self.criteria != DirectoryCriteria::default();
                self.criteria = DirectoryCriteria::default();
                changed(moved)
            }
            PortalAction::OpenModal(id) => {
                self.open_modal = Some(id);
                Transition::Unchanged
            }
            PortalAction::CloseModal => {
                self.open_modal = None;
                Transition::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_changes_rerender() {
        let mut state = PortalState::new();
        state.apply(PortalAction::Navigate(Section::Resources));

        assert_eq!(
            state.apply(PortalAction::SelectCategory(Some("Housing".into()))),
            Transition::Rerender
        );
        assert_eq!(
            state.apply(PortalAction::SelectCategory(Some("Housing".into()))),
            Transition::Unchanged
        );
        assert_eq!(state.apply(PortalAction::Search("legal".into())), Transition::Rerender);
        assert_eq!(state.criteria().search, "legal");
    }

    #[test]
    fn test_navigation_resets_filters_and_modal() {
        let mut state = PortalState::new();
        state.apply(PortalAction::Navigate(Section::Resources));
        state.apply(PortalAction::SelectCommunity(Some("latino".into())));
        state.apply(PortalAction::OpenModal("partner-3".into()));
        assert_eq!(state.open_modal(), Some("partner-3"));

        assert_eq!(state.apply(PortalAction::Navigate(Section::Events)), Transition::Rerender);
        assert_eq!(state.section(), Section::Events);
        assert!(state.criteria().is_unfiltered());
        assert_eq!(state.open_modal(), None);

        assert_eq!(state.apply(PortalAction::Navigate(Section::Events)), Transition::Unchanged);
    }

    #[test]
    fn test_clear_filters() {
        let mut state = PortalState::new();
        assert_eq!(state.apply(PortalAction::ClearFilters), Transition::Unchanged);

        state.apply(PortalAction::Search("food".into()));
        assert_eq!(state.apply(PortalAction::ClearFilters), Transition::Rerender);
        assert!(state.criteria().is_unfiltered());
    }

    #[test]
    fn test_modals_do_not_rerender() {
        let mut state = PortalState::new();
        assert_eq!(state.apply(PortalAction::OpenModal("quiz".into())), Transition::Unchanged);
        assert_eq!(state.apply(PortalAction::CloseModal), Transition::Unchanged);
        assert_eq!(state.open_modal(), None);
    }

    #[test]
    fn test_section_datasets() {
        assert_eq!(Section::Resources.dataset(), Some(Dataset::Partners));
        assert_eq!(Section::Events.dataset(), Some(Dataset::Events));
        assert_eq!(Section::News.dataset(), None);
    }
}
