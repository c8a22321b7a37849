//! Course catalog and live filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! The courses page lists every [`CourseItem`] and narrows the list as the
//! visitor types or changes a category selector. Visibility is recomputed
//! from scratch on every event; [`CourseFilter`] holds no state besides the
//! current query and selectors.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use serde::{Deserialize, Serialize};

/// Selector value meaning "any category".
pub const ALL: &str = "all";

const CATALOG_JSON: &str = include_str!("../../data/courses.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseItem {
    pub title: String,
    /// Exposed verbatim as `data-subject`.
    pub subject: String,
    /// Exposed verbatim as `data-difficulty`.
    pub difficulty: String,
    #[serde(default)]
    pub summary: String,
}

impl CourseItem {
    pub fn new(title: &str, subject: &str, difficulty: &str) -> Self {
        Self {
            title: title.to_owned(),
            subject: subject.to_owned(),
            difficulty: difficulty.to_owned(),
            summary: String::new(),
        }
    }
}

/// One category selector: either `all` or an exact, case-sensitive value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Only(String),
}

impl Category {
    #[must_use]
    pub fn from_selector(value: &str) -> Self {
        if value == ALL { Self::All } else { Self::Only(value.to_owned()) }
    }

    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Lower-cased search text. Empty matches every title.
    query: String,
    pub subject: Category,
    pub difficulty: Category,
}

impl CourseFilter {
    #[must_use]
    pub fn new(query: &str, subject: &str, difficulty: &str) -> Self {
        Self {
            query: query.to_lowercase(),
            subject: Category::from_selector(subject),
            difficulty: Category::from_selector(difficulty),
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn matches(&self, item: &CourseItem) -> bool {
        item.title.to_lowercase().contains(&self.query)
            && self.subject.matches(&item.subject)
            && self.difficulty.matches(&item.difficulty)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    /// One flag per item, in catalog order.
    pub visible: Vec<bool>,
}

impl FilterOutcome {
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Whether the "no courses match" message should show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_count() == 0
    }
}

#[must_use]
pub fn filter(items: &[CourseItem], criteria: &CourseFilter) -> FilterOutcome {
    FilterOutcome { visible: items.iter().map(|item| criteria.matches(item)).collect() }
}

/// Course cards plus the empty-state message.
pub trait CourseListSurface {
    fn set_item_visible(&self, index: usize, visible: bool);
    fn set_empty_state(&self, shown: bool);
}

/// Recompute visibility and push it to the page.
pub fn apply_filter(items: &[CourseItem], criteria: &CourseFilter, surface: &dyn CourseListSurface) -> FilterOutcome {
    let outcome = filter(items, criteria);
    for (index, visible) in outcome.visible.iter().enumerate() {
        surface.set_item_visible(index, *visible);
    }
    surface.set_empty_state(outcome.is_empty());
    outcome
}

/// The embedded catalog. A malformed catalog is logged and yields no courses.
#[must_use]
pub fn catalog() -> Vec<CourseItem> {
    parse_catalog(CATALOG_JSON)
}

#[must_use]
pub fn parse_catalog(raw: &str) -> Vec<CourseItem> {
    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(e) => {
            leptos::logging::warn!("course catalog unreadable: {e}");
            Vec::new()
        }
    }
}

/// Distinct values of one attribute, in first-seen order, for building a
/// selector's options.
#[must_use]
pub fn distinct<'a>(items: &'a [CourseItem], attr: impl Fn(&'a CourseItem) -> &'a str) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for item in items {
        let value = attr(item);
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
