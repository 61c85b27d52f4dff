use serde::Serialize;

use crate::catalog::{Catalog, ChatModelRecord};
use crate::consts::{OFFICIAL_PROVIDER, PLACEHOLDER, PROVIDER_DOC_URL, PROVIDER_PATH};
use crate::output::{NumberFormat, format_price_by_currency, format_token_number};
use crate::utils::url_join;

/// The four metrics shown for a provider/model pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DisplayStats {
    /// Id of the catalog model the query matched, if any
    pub(crate) matched_model: Option<String>,
    pub(crate) content_length: String,
    pub(crate) max_output: String,
    pub(crate) input_price: String,
    pub(crate) output_price: String,
}

impl DisplayStats {
    fn placeholder() -> Self {
        Self {
            matched_model: None,
            content_length: PLACEHOLDER.to_string(),
            max_output: PLACEHOLDER.to_string(),
            input_price: PLACEHOLDER.to_string(),
            output_price: PLACEHOLDER.to_string(),
        }
    }

    fn from_model(model: &ChatModelRecord, number_format: NumberFormat) -> Self {
        let tokens = |n: Option<u64>| match n {
            Some(n) if n > 0 => format_token_number(n),
            _ => PLACEHOLDER.to_string(),
        };

        let currency = model.pricing.as_ref().and_then(|p| p.currency.as_deref());
        let price = |p: Option<f64>| match p {
            Some(p) if p != 0.0 && !p.is_nan() => {
                format!("${}", format_price_by_currency(p, currency, number_format))
            }
            _ => PLACEHOLDER.to_string(),
        };

        let pricing = model.pricing.as_ref();
        Self {
            matched_model: Some(model.id.clone()),
            content_length: tokens(model.tokens),
            max_output: tokens(model.max_output),
            input_price: price(pricing.and_then(|p| p.input)),
            output_price: price(pricing.and_then(|p| p.output)),
        }
    }
}

/// Project display metrics for `model_id` as offered by `provider_id`.
///
/// The provider is matched exactly, the model by case-insensitive substring
/// with the first declared model winning. Anything missing along the way,
/// including zero values, shows as the placeholder.
pub(crate) fn project(
    provider_id: &str,
    model_id: &str,
    catalog: &Catalog,
    number_format: NumberFormat,
) -> DisplayStats {
    catalog
        .provider(provider_id)
        .and_then(|provider| provider.find_chat_model(model_id))
        .map(|model| DisplayStats::from_model(model, number_format))
        .unwrap_or_else(DisplayStats::placeholder)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ProviderBadge {
    /// Served by the platform itself
    Official,
    /// Requires the user's own API key
    ApiKey,
}

impl ProviderBadge {
    pub(crate) fn for_provider(provider_id: &str) -> Self {
        if provider_id == OFFICIAL_PROVIDER {
            ProviderBadge::Official
        } else {
            ProviderBadge::ApiKey
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            ProviderBadge::Official => "official",
            ProviderBadge::ApiKey => "api key",
        }
    }
}

/// One provider row of a model page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ProviderRow {
    pub(crate) provider_id: String,
    pub(crate) provider_name: String,
    pub(crate) model_id: String,
    pub(crate) badge: ProviderBadge,
    pub(crate) provider_href: String,
    pub(crate) guide_url: String,
    pub(crate) stats: DisplayStats,
}

pub(crate) fn provider_row(
    provider_id: &str,
    model_id: &str,
    catalog: &Catalog,
    number_format: NumberFormat,
) -> ProviderRow {
    let provider_name = catalog
        .provider(provider_id)
        .map(|p| p.display_name().to_string())
        .unwrap_or_else(|| provider_id.to_string());

    ProviderRow {
        provider_id: provider_id.to_string(),
        provider_name,
        model_id: model_id.to_string(),
        badge: ProviderBadge::for_provider(provider_id),
        provider_href: url_join(PROVIDER_PATH, &[provider_id]),
        guide_url: url_join(PROVIDER_DOC_URL, &[provider_id]),
        stats: project(provider_id, model_id, catalog, number_format),
    }
}

/// Rows for every provider offering a model that matches `model_id`, in catalog order.
pub(crate) fn model_rows(
    model_id: &str,
    catalog: &Catalog,
    number_format: NumberFormat,
) -> Vec<ProviderRow> {
    catalog
        .providers()
        .iter()
        .filter(|p| p.find_chat_model(model_id).is_some())
        .map(|p| provider_row(&p.id, model_id, catalog, number_format))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{ModelPricing, ProviderRecord};

    fn fmt() -> NumberFormat {
        NumberFormat::default()
    }

    fn usd(input: f64, output: f64) -> Option<ModelPricing> {
        Some(ModelPricing {
            input: Some(input),
            output: Some(output),
            currency: Some("USD".to_string()),
        })
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ProviderRecord {
                id: "openai".to_string(),
                name: Some("OpenAI".to_string()),
                chat_models: vec![
                    ChatModelRecord {
                        id: "gpt-4o-mini".to_string(),
                        tokens: Some(128_000),
                        ..Default::default()
                    },
                    ChatModelRecord {
                        id: "gpt-4o".to_string(),
                        tokens: Some(128_000),
                        pricing: usd(5.0, 15.0),
                        ..Default::default()
                    },
                ],
            },
            ProviderRecord {
                id: "lobehub".to_string(),
                name: None,
                chat_models: vec![ChatModelRecord {
                    id: "GPT-4o".to_string(),
                    tokens: Some(128_000),
                    max_output: Some(16_384),
                    pricing: usd(2.5, 10.0),
                    ..Default::default()
                }],
            },
            ProviderRecord {
                id: "deepseek".to_string(),
                name: Some("DeepSeek".to_string()),
                chat_models: vec![ChatModelRecord {
                    id: "deepseek-chat".to_string(),
                    tokens: Some(65_536),
                    max_output: Some(0),
                    pricing: Some(ModelPricing {
                        input: Some(7.14),
                        output: None,
                        currency: Some("CNY".to_string()),
                    }),
                    ..Default::default()
                }],
            },
        ])
    }

    fn all_placeholders(stats: &DisplayStats) -> bool {
        [
            &stats.content_length,
            &stats.max_output,
            &stats.input_price,
            &stats.output_price,
        ]
        .iter()
        .all(|v| v.as_str() == "--")
    }

    #[test]
    fn unknown_provider_is_all_placeholders() {
        let stats = project("mistral", "gpt-4o", &catalog(), fmt());
        assert!(all_placeholders(&stats));
        assert!(stats.matched_model.is_none());
    }

    #[test]
    fn unknown_model_is_all_placeholders() {
        let stats = project("openai", "claude", &catalog(), fmt());
        assert!(all_placeholders(&stats));
        assert!(stats.matched_model.is_none());
    }

    #[test]
    fn first_substring_match_wins_over_exact() {
        let stats = project("openai", "gpt-4o", &catalog(), fmt());
        assert_eq!(stats.matched_model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(stats.content_length, "128K");
        assert_eq!(stats.max_output, "--");
        assert_eq!(stats.input_price, "--");
        assert_eq!(stats.output_price, "--");
    }

    #[test]
    fn full_record_projects_every_metric() {
        let stats = project("lobehub", "gpt-4o", &catalog(), fmt());
        assert_eq!(stats.matched_model.as_deref(), Some("GPT-4o"));
        assert_eq!(stats.content_length, "128K");
        assert_eq!(stats.max_output, "16K");
        assert_eq!(stats.input_price, "$2.50");
        assert_eq!(stats.output_price, "$10.00");
    }

    #[test]
    fn provider_match_is_case_sensitive() {
        let stats = project("OpenAI", "gpt-4o", &catalog(), fmt());
        assert!(all_placeholders(&stats));
    }

    #[test]
    fn cny_price_converted_and_zero_is_placeholder() {
        let stats = project("deepseek", "DeepSeek", &catalog(), fmt());
        assert_eq!(stats.content_length, "64K");
        assert_eq!(stats.max_output, "--");
        assert_eq!(stats.input_price, "$1.00");
        assert_eq!(stats.output_price, "--");
    }

    #[test]
    fn badge_by_provider() {
        assert_eq!(ProviderBadge::for_provider("lobehub"), ProviderBadge::Official);
        assert_eq!(ProviderBadge::for_provider("openai"), ProviderBadge::ApiKey);
    }

    #[test]
    fn provider_row_links() {
        let row = provider_row("openai", "gpt-4o", &catalog(), fmt());
        assert_eq!(row.provider_name, "OpenAI");
        assert_eq!(row.provider_href, "/discover/provider/openai");
        assert_eq!(row.guide_url, "https://lobehub.com/docs/usage/providers/openai");
        assert_eq!(row.badge, ProviderBadge::ApiKey);
    }

    #[test]
    fn provider_row_for_unknown_provider_keeps_id_as_name() {
        let row = provider_row("mistral", "large", &catalog(), fmt());
        assert_eq!(row.provider_name, "mistral");
        assert!(all_placeholders(&row.stats));
    }

    #[test]
    fn model_rows_in_catalog_order() {
        let rows = model_rows("gpt-4o", &catalog(), fmt());
        let ids: Vec<_> = rows.iter().map(|r| r.provider_id.as_str()).collect();
        assert_eq!(ids, ["openai", "lobehub"]);
        assert_eq!(rows[1].badge, ProviderBadge::Official);
    }

    #[test]
    fn model_rows_none_matching() {
        assert!(model_rows("claude", &catalog(), fmt()).is_empty());
    }

    #[test]
    fn display_stats_serializes_snake_case() {
        let stats = project("lobehub", "gpt-4o", &catalog(), fmt());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["content_length"], "128K");
        assert_eq!(json["matched_model"], "GPT-4o");
    }
}
