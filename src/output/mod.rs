mod assistants;
mod format;
mod providers;

pub(crate) use assistants::{ListTableOptions, output_assistant_json, print_assistant_listing};
pub(crate) use format::{NumberFormat, format_price_by_currency, format_token_number};
pub(crate) use providers::{
    ProviderTableOptions, output_provider_list_json, output_provider_rows_json,
    print_provider_list, print_provider_rows,
};
