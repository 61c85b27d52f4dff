use std::path::Path;
use std::time::Instant;

use crate::catalog::{Catalog, load_catalog};
use crate::cli::{Cli, Commands};
use crate::discover::{filter_items, load_items, model_rows, partition, provider_row};
use crate::error::AppError;
use crate::output::{
    ListTableOptions, NumberFormat, ProviderTableOptions, output_assistant_json,
    output_provider_list_json, output_provider_rows_json, print_assistant_listing,
    print_provider_list, print_provider_rows,
};
use crate::utils::debug_enabled;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) number_format: NumberFormat,
}

impl CommandContext<'_> {
    fn load_catalog(&self) -> Result<Catalog, AppError> {
        load_catalog(self.cli.catalog.as_deref(), self.cli.json)
    }

    fn table_options<'t>(&self, title: &'t str) -> ProviderTableOptions<'t> {
        ProviderTableOptions {
            use_color: self.cli.use_color(),
            compact: self.cli.compact,
            title,
            number_format: self.number_format,
        }
    }
}

fn handle_assistants(
    ctx: &CommandContext<'_>,
    items_path: Option<&Path>,
    search: Option<&str>,
    category: Option<&str>,
    show_all: bool,
) -> Result<(), AppError> {
    let start = Instant::now();
    let path = items_path.ok_or(AppError::MissingItems)?;
    let items = filter_items(load_items(path)?, search, category);
    if debug_enabled() {
        eprintln!(
            "[debug] {} items after filtering ({:.2}ms)",
            items.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    let listing = partition(&items, ctx.cli.layout(), search);

    if ctx.cli.json {
        println!("{}", output_assistant_json(&listing, search));
    } else {
        print_assistant_listing(
            &listing,
            search,
            ListTableOptions {
                use_color: ctx.cli.use_color(),
                compact: ctx.cli.compact,
                show_category: category.is_none(),
                show_all,
                number_format: ctx.number_format,
            },
        );
    }
    Ok(())
}

fn handle_provider(
    ctx: &CommandContext<'_>,
    provider_id: &str,
    model_id: &str,
) -> Result<(), AppError> {
    let catalog = ctx.load_catalog()?;
    let row = provider_row(provider_id, model_id, &catalog, ctx.number_format);

    if ctx.cli.json {
        println!("{}", output_provider_rows_json(std::slice::from_ref(&row)));
    } else {
        let title = format!("{} / {}", row.provider_name, model_id);
        print_provider_rows(std::slice::from_ref(&row), ctx.table_options(&title));
    }
    Ok(())
}

fn handle_model(ctx: &CommandContext<'_>, model_id: &str) -> Result<(), AppError> {
    let catalog = ctx.load_catalog()?;
    let rows = model_rows(model_id, &catalog, ctx.number_format);

    if ctx.cli.json {
        println!("{}", output_provider_rows_json(&rows));
        return Ok(());
    }
    if rows.is_empty() {
        println!("No provider offers a model matching \"{model_id}\".");
        return Ok(());
    }
    let title = format!("Providers for {model_id}");
    print_provider_rows(&rows, ctx.table_options(&title));
    Ok(())
}

fn handle_providers(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let catalog = ctx.load_catalog()?;

    if ctx.cli.json {
        println!("{}", output_provider_list_json(&catalog));
    } else {
        print_provider_list(&catalog, ctx.table_options("Model Providers"));
    }
    Ok(())
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let ctx = CommandContext {
        cli,
        number_format: NumberFormat::from_locale(cli.locale.as_deref())?,
    };

    match &cli.command {
        Commands::Assistants {
            items,
            search,
            category,
            all,
        } => handle_assistants(
            &ctx,
            items.as_deref(),
            search.as_deref(),
            category.as_deref(),
            *all,
        ),
        Commands::Provider { provider, model } => handle_provider(&ctx, provider, model),
        Commands::Model { model } => handle_model(&ctx, model),
        Commands::Providers => handle_providers(&ctx),
    }
}
