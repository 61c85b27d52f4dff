use std::collections::HashMap;

use super::types::ProviderRecord;

/// Read-only provider/model table, built once at startup
#[derive(Debug, Default)]
pub(crate) struct Catalog {
    providers: Vec<ProviderRecord>,
    index: HashMap<String, usize>,
    shadowed: usize,
}

impl Catalog {
    /// Build the table from providers in declared order.
    ///
    /// Lookups are first-match, so a provider whose id already appeared
    /// earlier can never be reached and is dropped here.
    pub(crate) fn new(records: Vec<ProviderRecord>) -> Self {
        let mut providers = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        let mut shadowed = 0;

        for record in records {
            if index.contains_key(&record.id) {
                shadowed += 1;
                continue;
            }
            index.insert(record.id.clone(), providers.len());
            providers.push(record);
        }

        Self {
            providers,
            index,
            shadowed,
        }
    }

    /// Exact-id provider lookup
    pub(crate) fn provider(&self, id: &str) -> Option<&ProviderRecord> {
        self.index.get(id).map(|&i| &self.providers[i])
    }

    pub(crate) fn providers(&self) -> &[ProviderRecord] {
        &self.providers
    }

    pub(crate) fn len(&self) -> usize {
        self.providers.len()
    }

    pub(crate) fn model_count(&self) -> usize {
        self.providers.iter().map(|p| p.chat_models.len()).sum()
    }

    /// Number of duplicate provider entries dropped while building
    pub(crate) fn shadowed(&self) -> usize {
        self.shadowed
    }
}
