use serde::{Deserialize, Serialize};

/// Per-model pricing, in currency units per million tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct ModelPricing {
    #[serde(default)]
    pub(crate) input: Option<f64>,
    #[serde(default)]
    pub(crate) output: Option<f64>,
    /// ISO currency code; USD when absent
    #[serde(default)]
    pub(crate) currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChatModelRecord {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) display_name: Option<String>,
    /// Context window size
    #[serde(default)]
    pub(crate) tokens: Option<u64>,
    #[serde(default)]
    pub(crate) max_output: Option<u64>,
    #[serde(default)]
    pub(crate) pricing: Option<ModelPricing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProviderRecord {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) chat_models: Vec<ChatModelRecord>,
}

impl ProviderRecord {
    pub(crate) fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// First chat model whose id contains `query`, ignoring case.
    ///
    /// Declared order wins: a later model that matches more precisely is
    /// never preferred over an earlier partial match.
    pub(crate) fn find_chat_model(&self, query: &str) -> Option<&ChatModelRecord> {
        let query = query.to_lowercase();
        self.chat_models
            .iter()
            .find(|m| m.id.to_lowercase().contains(&query))
    }
}
