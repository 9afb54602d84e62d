// src/category.rs
//! Asset category keywords and the HackerOne asset types they select

use std::collections::BTreeSet;

use crate::error::{Result, ScopeError};

/// Keyword that selects every known asset type
pub const ALL: &str = "all";

const CATEGORY_GROUPS: &[(&str, &[&str])] = &[
    ("url", &["URL"]),
    ("cidr", &["CIDR"]),
    (
        "mobile",
        &["GOOGLE_PLAY_APP_ID", "OTHER_APK", "APPLE_STORE_APP_ID"],
    ),
    ("android", &["GOOGLE_PLAY_APP_ID", "OTHER_APK"]),
    ("apple", &["APPLE_STORE_APP_ID"]),
    ("other", &["OTHER"]),
    ("hardware", &["HARDWARE"]),
    ("code", &["SOURCE_CODE"]),
    ("executable", &["DOWNLOADABLE_EXECUTABLES"]),
];

/// Set of native asset-type tags a run is interested in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    tags: BTreeSet<&'static str>,
}

impl CategoryFilter {
    /// Resolve a user keyword (case-insensitive) into asset-type tags
    pub fn resolve(keyword: &str) -> Result<Self> {
        let keyword = keyword.trim().to_lowercase();

        if keyword == ALL {
            let tags = CATEGORY_GROUPS
                .iter()
                .flat_map(|(_, tags)| tags.iter().copied())
                .collect();
            return Ok(Self { tags });
        }

        CATEGORY_GROUPS
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|(_, tags)| Self {
                tags: tags.iter().copied().collect(),
            })
            .ok_or(ScopeError::InvalidCategory(keyword))
    }

    /// Check whether an asset type belongs to this filter
    pub fn contains(&self, asset_type: &str) -> bool {
        self.tags.contains(asset_type)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Keywords accepted by [`CategoryFilter::resolve`]
    pub fn keywords() -> impl Iterator<Item = &'static str> {
        CATEGORY_GROUPS
            .iter()
            .map(|(name, _)| *name)
            .chain(std::iter::once(ALL))
    }
}
