//! Derived issue-list projections
//!
//! Pure, side-effect-free filtering over an issue snapshot. All criteria
//! are conjunctive and evaluated in order: text search, category set,
//! status tab, ownership scope. Result order preserves the store's issue
//! order; no re-sort is performed.

use std::collections::BTreeMap;

use civica_domain::{Issue, IssueCategory, IssueStatus};

/// Which status tab is active in the issue list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTab {
    #[default]
    All,
    Status(IssueStatus),
}

impl StatusTab {
    /// Parse a tab value ("all" or a status tag). Returns None for
    /// unrecognized values.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag == "all" {
            return Some(StatusTab::All);
        }
        IssueStatus::from_tag(tag).map(StatusTab::Status)
    }

    fn matches(self, status: IssueStatus) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Status(wanted) => status == wanted,
        }
    }
}

/// Filter configuration supplied by the filter bar and "my reports" view.
#[derive(Clone, Debug, PartialEq)]
pub struct IssueFilter {
    /// Case-insensitive substring match against title, description, and
    /// location. Empty matches everything.
    pub search: String,
    /// Category set membership: an issue passes only when its category is
    /// enabled here. Absent keys count as disabled.
    pub categories: BTreeMap<IssueCategory, bool>,
    /// When set, retain only issues reported by the session user.
    pub scope_to_user: bool,
}

impl Default for IssueFilter {
    /// Empty search, every category enabled, no ownership scoping.
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: IssueCategory::ALL.into_iter().map(|c| (c, true)).collect(),
            scope_to_user: false,
        }
    }
}

impl IssueFilter {
    /// Build a filter from a loosely-typed configuration. Unrecognized
    /// category keys are ignored, not errors.
    pub fn from_config<'a, I>(search: &str, categories: I, scope_to_user: bool) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut filter = Self {
            search: search.to_string(),
            categories: BTreeMap::new(),
            scope_to_user,
        };
        for (tag, enabled) in categories {
            filter.set_category(tag, enabled);
        }
        filter
    }

    /// Enable or disable a category by its string tag; unknown tags are
    /// ignored.
    pub fn set_category(&mut self, tag: &str, enabled: bool) {
        if let Some(category) = IssueCategory::from_tag(tag) {
            self.categories.insert(category, enabled);
        }
    }

    pub fn category_enabled(&self, category: IssueCategory) -> bool {
        self.categories.get(&category).copied().unwrap_or(false)
    }
}

/// Compute the filtered, ordered projection of an issue snapshot.
///
/// `reporter` is the name ownership scoping compares against (the session
/// user's name, or the anonymous sentinel before login). Repeated calls
/// with unchanged inputs yield identical results.
pub fn filter_issues<'a>(
    issues: &'a [Issue],
    filter: &IssueFilter,
    tab: StatusTab,
    reporter: &str,
) -> Vec<&'a Issue> {
    let needle = filter.search.trim().to_lowercase();
    issues
        .iter()
        .filter(|issue| {
            let text_match = needle.is_empty()
                || issue.title.to_lowercase().contains(&needle)
                || issue.description.to_lowercase().contains(&needle)
                || issue.location.to_lowercase().contains(&needle);
            text_match
                && filter.category_enabled(issue.category)
                && tab.matches(issue.status)
                && (!filter.scope_to_user || issue.reported_by == reporter)
        })
        .collect()
}
