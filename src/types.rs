// src/types.rs
use serde::{Deserialize, Serialize};

use crate::category::CategoryFilter;

/// Target emitted for programs that expose no structured scope at all
pub const NO_IN_SCOPE_TABLE: &str = "NO_IN_SCOPE_TABLE";

/// One asset row from a program's scope table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeElement {
    /// Asset identifier (domain, CIDR, app id, repository...)
    pub target: String,

    /// Free-text instruction, single line
    pub description: String,

    /// Reserved; currently always empty (unclassified)
    pub category: String,
}

impl ScopeElement {
    pub fn new(target: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            description: description.into(),
            category: String::new(),
        }
    }

    /// Placeholder row for a program without any structured scope
    pub fn no_scope_table() -> Self {
        Self::new(NO_IN_SCOPE_TABLE, "")
    }
}

/// Scope harvested for a single program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramData {
    /// Public program URL
    pub url: String,

    /// In-scope assets, in API order
    pub in_scope: Vec<ScopeElement>,

    /// Assets listed but not eligible for submission, in API order
    #[serde(default)]
    pub out_of_scope: Vec<ScopeElement>,
}

/// Visibility and activity predicates applied while listing programs
///
/// `private_only` and `public_only` are mutually exclusive; callers validate
/// that before building the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFilter {
    pub private_only: bool,
    pub public_only: bool,
    pub active_only: bool,
}

impl VisibilityFilter {
    /// Check whether a listed program passes the filter
    ///
    /// `state` is the program state (`public_mode`, `soft_launched`, ...) and
    /// `submission_state` is `open` for programs accepting reports.
    pub fn admits(&self, state: &str, submission_state: &str) -> bool {
        let visible = if self.public_only {
            state == "public_mode"
        } else {
            !self.private_only || state == "soft_launched"
        };

        visible && (!self.active_only || submission_state == "open")
    }
}

/// Per-program scope filtering, resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeQuery {
    pub categories: CategoryFilter,
    pub bounty_only: bool,
}

/// Everything a platform needs to harvest scope for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub visibility: VisibilityFilter,
    pub scope: ScopeQuery,
}

impl FetchOptions {
    /// Build options from user input, resolving the category keyword
    pub fn new(
        category: &str,
        bounty_only: bool,
        visibility: VisibilityFilter,
    ) -> crate::error::Result<Self> {
        Ok(Self {
            visibility,
            scope: ScopeQuery {
                categories: CategoryFilter::resolve(category)?,
                bounty_only,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_admits_everything() {
        let filter = VisibilityFilter::default();
        assert!(filter.admits("public_mode", "open"));
        assert!(filter.admits("soft_launched", "paused"));
        assert!(filter.admits("", ""));
    }

    #[test]
    fn test_private_only() {
        let filter = VisibilityFilter {
            private_only: true,
            ..Default::default()
        };
        assert!(filter.admits("soft_launched", "open"));
        assert!(!filter.admits("public_mode", "open"));
    }

    #[test]
    fn test_public_only() {
        let filter = VisibilityFilter {
            public_only: true,
            ..Default::default()
        };
        assert!(filter.admits("public_mode", "closed"));
        assert!(!filter.admits("soft_launched", "open"));
    }

    #[test]
    fn test_active_only_requires_open_submissions() {
        let filter = VisibilityFilter {
            active_only: true,
            ..Default::default()
        };
        assert!(filter.admits("public_mode", "open"));
        assert!(!filter.admits("public_mode", "paused"));

        let private_active = VisibilityFilter {
            private_only: true,
            active_only: true,
            ..Default::default()
        };
        assert!(private_active.admits("soft_launched", "open"));
        assert!(!private_active.admits("soft_launched", "closed"));
        assert!(!private_active.admits("public_mode", "open"));
    }

    #[test]
    fn test_sentinel_element() {
        let sentinel = ScopeElement::no_scope_table();
        assert_eq!(sentinel.target, NO_IN_SCOPE_TABLE);
        assert!(sentinel.description.is_empty());
        assert!(sentinel.category.is_empty());
    }

    #[test]
    fn test_fetch_options_rejects_unknown_category() {
        let result = FetchOptions::new("nope", false, VisibilityFilter::default());
        assert!(matches!(result, Err(crate::error::ScopeError::InvalidCategory(_))));
    }
}
