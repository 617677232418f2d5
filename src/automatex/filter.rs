//! # Filter Engine
//!
//! Faceted browsing over the catalog. A [`SelectionState`] holds one set of active
//! values per facet plus a free-text query; [`apply`] narrows a list of records
//! down to the ones the selection accepts.
//!
//! ## Matching rules
//!
//! - Across facets the constraints are ANDed: a record must pass the category,
//!   the difficulty and the status facet.
//! - Within a facet the values are ORed: a record passes if its value is in the set.
//! - An empty set is no constraint at all. It does not mean "nothing passes".
//! - A non-empty query must be a case-insensitive substring of the title or of
//!   the category label. No tokenizing, no fuzzy matching.
//!
//! Every rule is a pure predicate, so [`apply`] evaluates them as one combined
//! check per record and keeps catalog order.
//!
//! Re-evaluation is explicit: changing the selection does not recompute anything.
//! Callers call [`apply`] when the user asks for results.

use crate::error::{MarketError, Result};
use crate::model::{Category, Difficulty, ProjectRecord, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The derived list of records accepted by a selection, in catalog order.
pub type FilteredView = Vec<ProjectRecord>;

/// One of the three independent filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Category,
    Difficulty,
    Status,
}

impl Facet {
    /// Parses a concrete value for this facet.
    pub fn value(self, input: &str) -> Result<FacetValue> {
        match self {
            Facet::Category => input.parse().map(FacetValue::Category),
            Facet::Difficulty => input.parse().map(FacetValue::Difficulty),
            Facet::Status => input.parse().map(FacetValue::Status),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facet::Category => "category",
            Facet::Difficulty => "difficulty",
            Facet::Status => "status",
        };
        f.write_str(name)
    }
}

impl FromStr for Facet {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" | "cat" | "c" => Ok(Facet::Category),
            "difficulty" | "diff" | "d" => Ok(Facet::Difficulty),
            "status" | "s" => Ok(Facet::Status),
            other => Err(MarketError::Parse(format!(
                "Unknown facet '{}' (expected category, difficulty or status)",
                other
            ))),
        }
    }
}

/// A value of a specific facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetValue {
    Category(Category),
    Difficulty(Difficulty),
    Status(ProjectStatus),
}

impl FacetValue {
    pub fn facet(&self) -> Facet {
        match self {
            FacetValue::Category(_) => Facet::Category,
            FacetValue::Difficulty(_) => Facet::Difficulty,
            FacetValue::Status(_) => Facet::Status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacetValue::Category(c) => c.label(),
            FacetValue::Difficulty(d) => d.label(),
            FacetValue::Status(s) => s.label(),
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.facet(), self.label())
    }
}

/// The active facet values and search text of one browsing view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(default)]
    pub categories: BTreeSet<Category>,
    #[serde(default)]
    pub difficulties: BTreeSet<Difficulty>,
    #[serde(default)]
    pub statuses: BTreeSet<ProjectStatus>,
    #[serde(default)]
    pub query: String,
}

/// Removes `value` when present, inserts it otherwise. Returns whether it is now active.
fn toggle_in<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of a facet value. Returns `true` if the value is now active.
    pub fn toggle(&mut self, value: FacetValue) -> bool {
        match value {
            FacetValue::Category(c) => self.toggle_category(c),
            FacetValue::Difficulty(d) => self.toggle_difficulty(d),
            FacetValue::Status(s) => self.toggle_status(s),
        }
    }

    pub fn toggle_category(&mut self, category: Category) -> bool {
        toggle_in(&mut self.categories, category)
    }

    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) -> bool {
        toggle_in(&mut self.difficulties, difficulty)
    }

    pub fn toggle_status(&mut self, status: ProjectStatus) -> bool {
        toggle_in(&mut self.statuses, status)
    }

    pub fn is_active(&self, value: FacetValue) -> bool {
        match value {
            FacetValue::Category(c) => self.categories.contains(&c),
            FacetValue::Difficulty(d) => self.difficulties.contains(&d),
            FacetValue::Status(s) => self.statuses.contains(&s),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clears every facet and the query.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing is selected, i.e. the selection accepts every record.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.difficulties.is_empty()
            && self.statuses.is_empty()
            && self.query.is_empty()
    }

    /// Active values in facet order: categories, then difficulties, then statuses.
    pub fn active_values(&self) -> Vec<FacetValue> {
        self.categories
            .iter()
            .copied()
            .map(FacetValue::Category)
            .chain(self.difficulties.iter().copied().map(FacetValue::Difficulty))
            .chain(self.statuses.iter().copied().map(FacetValue::Status))
            .collect()
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        facet_accepts(&self.categories, &record.category)
            && facet_accepts(&self.difficulties, &record.difficulty)
            && facet_accepts(&self.statuses, &record.status)
            && self.query_accepts(record)
    }

    fn query_accepts(&self, record: &ProjectRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record.title.to_lowercase().contains(&needle)
            || record.category.label().to_lowercase().contains(&needle)
    }
}

fn facet_accepts<T: Ord>(set: &BTreeSet<T>, value: &T) -> bool {
    set.is_empty() || set.contains(value)
}

/// Returns the records accepted by `selection`, preserving their order.
pub fn apply(records: &[ProjectRecord], selection: &SelectionState) -> FilteredView {
    records
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(view: &FilteredView) -> Vec<u32> {
        view.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_selection_returns_whole_catalog() {
        let catalog = Catalog::featured();
        let view = apply(catalog.records(), &SelectionState::new());
        assert_eq!(view, catalog.records().to_vec());
    }

    #[test]
    fn category_facet_keeps_order() {
        let catalog = Catalog::featured();
        let mut selection = SelectionState::new();
        selection.toggle_category(Category::DataScience);

        let view = apply(catalog.records(), &selection);
        assert_eq!(ids(&view), vec![3, 6]);
    }

    #[test]
    fn values_within_a_facet_are_ored() {
        let catalog = Catalog::featured();
        let mut selection = SelectionState::new();
        selection.toggle_category(Category::DataScience);
        selection.toggle_category(Category::EdTech);

        let view = apply(catalog.records(), &selection);
        assert_eq!(ids(&view), vec![3, 4, 6]);
    }

    #[test]
    fn facets_are_anded() {
        let catalog = Catalog::featured();
        let mut selection = SelectionState::new();
        selection.toggle_difficulty(Difficulty::Advanced);
        selection.toggle_status(ProjectStatus::InProgress);

        let view = apply(catalog.records(), &selection);
        assert_eq!(ids(&view), vec![1, 5]);
    }

    #[test]
    fn disjoint_facets_yield_nothing() {
        let catalog = Catalog::featured();
        let mut selection = SelectionState::new();
        selection.toggle_category(Category::HealthcareAi);
        selection.toggle_difficulty(Difficulty::Beginner);

        assert!(apply(catalog.records(), &selection).is_empty());
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let catalog = Catalog::featured();
        let mut selection = SelectionState::new();
        selection.set_query("eco");

        let view = apply(catalog.records(), &selection);
        let titles: Vec<&str> = view.iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"EcoTrack"));
        assert!(!titles.contains(&"Finlytics"));
    }

    #[test]
    fn query_matches_category_label() {
        let catalog = Catalog::featured();
        let mut selection = SelectionState::new();
        selection.set_query("SCIENCE");

        let view = apply(catalog.records(), &selection);
        assert_eq!(ids(&view), vec![3, 6]);
    }

    #[test]
    fn query_does_not_search_highlights() {
        let catalog = Catalog::featured();
        let mut selection = SelectionState::new();
        selection.set_query("gamified");

        assert!(apply(catalog.records(), &selection).is_empty());
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut selection = SelectionState::new();
        let value = FacetValue::Status(ProjectStatus::Completed);

        assert!(selection.toggle(value));
        assert!(selection.is_active(value));
        assert!(!selection.toggle(value));
        assert_eq!(selection, SelectionState::new());
    }

    #[test]
    fn reset_clears_everything() {
        let mut selection = SelectionState::new();
        selection.toggle_category(Category::Ai);
        selection.toggle_difficulty(Difficulty::Beginner);
        selection.toggle_status(ProjectStatus::Available);
        selection.set_query("x");
        assert!(!selection.is_empty());

        selection.reset();
        assert!(selection.is_empty());
    }

    #[test]
    fn active_values_follow_facet_order() {
        let mut selection = SelectionState::new();
        selection.toggle_status(ProjectStatus::Available);
        selection.toggle_category(Category::Design);
        selection.toggle_difficulty(Difficulty::Advanced);

        let facets: Vec<Facet> = selection.active_values().iter().map(|v| v.facet()).collect();
        assert_eq!(
            facets,
            vec![Facet::Category, Facet::Difficulty, Facet::Status]
        );
    }

    #[test]
    fn facet_parses_values() {
        assert_eq!(
            Facet::Status.value("in progress").unwrap(),
            FacetValue::Status(ProjectStatus::InProgress)
        );
        assert!("colour".parse::<Facet>().is_err());
        assert!(Facet::Difficulty.value("Expert").is_err());
    }
}
