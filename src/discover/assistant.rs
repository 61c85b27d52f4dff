use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::ASSISTANT_PATH;
use crate::error::AppError;
use crate::utils::{parse_date, url_join};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct AssistantMeta {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) tags: Vec<String>,
}

/// One entry of the assistant catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssistantItem {
    pub(crate) identifier: String,
    #[serde(default)]
    pub(crate) author: Option<String>,
    #[serde(default)]
    pub(crate) created_at: Option<String>,
    #[serde(default)]
    pub(crate) homepage: Option<String>,
    #[serde(default)]
    pub(crate) meta: AssistantMeta,
}

impl AssistantItem {
    pub(crate) fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or(&self.identifier)
    }

    pub(crate) fn created_date(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(parse_date)
    }

    /// Detail page link: `/discover/assistant/<identifier>`
    pub(crate) fn href(&self) -> String {
        url_join(ASSISTANT_PATH, &[self.identifier.as_str()])
    }

    /// Case-insensitive keyword match over identifier, title, description,
    /// author and tags
    pub(crate) fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        let hit = |s: &str| s.to_lowercase().contains(&keyword);

        hit(self.identifier.as_str())
            || self.meta.title.as_deref().is_some_and(hit)
            || self.meta.description.as_deref().is_some_and(hit)
            || self.author.as_deref().is_some_and(hit)
            || self.meta.tags.iter().any(|t| hit(t.as_str()))
    }

    pub(crate) fn in_category(&self, category: &str) -> bool {
        self.meta
            .category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }
}

/// Read a JSON array of assistant items, keeping file order.
pub(crate) fn load_items(path: &Path) -> Result<Vec<AssistantItem>, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Narrow the collection before it is partitioned.
///
/// Order is preserved so the curated split still reflects recency.
pub(crate) fn filter_items(
    items: Vec<AssistantItem>,
    keyword: Option<&str>,
    category: Option<&str>,
) -> Vec<AssistantItem> {
    items
        .into_iter()
        .filter(|item| category.is_none_or(|c| item.in_category(c)))
        .filter(|item| keyword.is_none_or(|k| k.is_empty() || item.matches_keyword(k)))
        .collect()
}
