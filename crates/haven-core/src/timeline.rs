//! Category partition, filtering, and date grouping of a link set.

use std::collections::HashSet;
use std::fmt;

use chrono::TimeZone;

use crate::models::{Link, ALL_CATEGORIES, UNCATEGORIZED};

/// Which slice of the link set is visible
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Uncategorized,
    Named(String),
}

impl CategoryFilter {
    /// Parse a bucket label. Blank input selects `All`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "" | ALL_CATEGORIES => Self::All,
            UNCATEGORIZED => Self::Uncategorized,
            other => Self::Named(other.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Uncategorized => UNCATEGORIZED,
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub fn matches(&self, link: &Link) -> bool {
        match self {
            Self::All => true,
            Self::Uncategorized => link.category.is_none(),
            Self::Named(name) => link.category.as_deref() == Some(name.as_str()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Links created on one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    /// en-US short date, e.g. `3/12/2024`
    pub date: String,
    pub links: Vec<Link>,
}

/// `All`, each distinct category in first-seen order, then `Uncategorized`.
#[must_use]
pub fn derive_categories(links: &[Link]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut categories = vec![CategoryFilter::All];
    for link in links {
        let Some(category) = link.category.as_deref() else {
            continue;
        };
        let filter = CategoryFilter::from_label(category);
        if matches!(filter, CategoryFilter::Named(_)) && seen.insert(category) {
            categories.push(filter);
        }
    }
    categories.push(CategoryFilter::Uncategorized);
    categories
}

#[must_use]
pub fn filter_links(links: &[Link], filter: &CategoryFilter) -> Vec<Link> {
    links
        .iter()
        .filter(|link| filter.matches(link))
        .cloned()
        .collect()
}

/// Bucket links by calendar day in `tz`, preserving input order.
#[must_use]
pub fn group_by_date<Tz: TimeZone>(links: Vec<Link>, tz: &Tz) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    for link in links {
        let date = day_label(&link, tz);
        match groups.iter_mut().find(|group| group.date == date) {
            Some(group) => group.links.push(link),
            None => groups.push(DateGroup {
                date,
                links: vec![link],
            }),
        }
    }
    groups
}

/// Filter by `filter`, then group the survivors by day.
#[must_use]
pub fn filter_and_group<Tz: TimeZone>(
    links: &[Link],
    filter: &CategoryFilter,
    tz: &Tz,
) -> Vec<DateGroup> {
    group_by_date(filter_links(links, filter), tz)
}

fn day_label<Tz: TimeZone>(link: &Link, tz: &Tz) -> String {
    link.created_at
        .with_timezone(tz)
        .date_naive()
        .format("%-m/%-d/%Y")
        .to_string()
}
