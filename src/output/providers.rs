use comfy_table::{Cell, Color};

use crate::catalog::Catalog;
use crate::consts::PLACEHOLDER;
use crate::discover::{ProviderBadge, ProviderRow};
use crate::output::format::{
    NumberFormat, create_styled_table, format_number, header_cell, right_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ProviderTableOptions<'a> {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) title: &'a str,
    pub(crate) number_format: NumberFormat,
}

fn build_header(opts: &ProviderTableOptions<'_>) -> Vec<Cell> {
    let c = opts.use_color;
    let mut h = vec![header_cell("Provider", c)];
    if !opts.compact {
        h.extend([header_cell("Access", c), header_cell("Model", c)]);
    }
    h.extend([
        header_cell("Context", c),
        header_cell("Max Output", c),
        header_cell("Input $/M", c),
        header_cell("Output $/M", c),
    ]);
    if !opts.compact {
        h.push(header_cell("Guide", c));
    }
    h
}

fn badge_cell(badge: ProviderBadge, use_color: bool) -> Cell {
    let color = match (use_color, badge) {
        (false, _) => None,
        (true, ProviderBadge::Official) => Some(Color::Green),
        (true, ProviderBadge::ApiKey) => Some(Color::Yellow),
    };
    styled_cell(badge.label(), color, false)
}

fn stat_cell(value: &str, color: Option<Color>) -> Cell {
    if value == PLACEHOLDER {
        right_cell(value, None, false)
    } else {
        right_cell(value, color, false)
    }
}

pub(crate) fn print_provider_rows(rows: &[ProviderRow], opts: ProviderTableOptions<'_>) {
    let price_color = if opts.use_color { Some(Color::Green) } else { None };
    let name_color = if opts.use_color { Some(Color::Cyan) } else { None };

    let mut table = create_styled_table();
    table.set_header(build_header(&opts));

    for row in rows {
        let stats = &row.stats;
        let mut cells = vec![styled_cell(&row.provider_name, name_color, true)];
        if !opts.compact {
            cells.extend([
                badge_cell(row.badge, opts.use_color),
                Cell::new(stats.matched_model.as_deref().unwrap_or(PLACEHOLDER)),
            ]);
        }
        cells.extend([
            stat_cell(&stats.content_length, None),
            stat_cell(&stats.max_output, None),
            stat_cell(&stats.input_price, price_color),
            stat_cell(&stats.output_price, price_color),
        ]);
        if !opts.compact {
            cells.push(Cell::new(&row.guide_url));
        }
        table.add_row(cells);
    }

    println!("\n  {}\n", opts.title);
    println!("{table}");
    println!(
        "\n  {} providers\n",
        format_number(rows.len() as i64, opts.number_format)
    );
}

pub(crate) fn output_provider_rows_json(rows: &[ProviderRow]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}

pub(crate) fn print_provider_list(catalog: &Catalog, opts: ProviderTableOptions<'_>) {
    let id_color = if opts.use_color { Some(Color::Cyan) } else { None };
    let c = opts.use_color;

    let mut table = create_styled_table();
    let mut header = vec![
        header_cell("Provider", c),
        header_cell("Name", c),
        header_cell("Models", c),
    ];
    if !opts.compact {
        header.push(header_cell("Access", c));
    }
    table.set_header(header);

    for provider in catalog.providers() {
        let mut cells = vec![
            styled_cell(&provider.id, id_color, false),
            Cell::new(provider.display_name()),
            right_cell(
                &format_number(provider.chat_models.len() as i64, opts.number_format),
                None,
                false,
            ),
        ];
        if !opts.compact {
            cells.push(badge_cell(ProviderBadge::for_provider(&provider.id), c));
        }
        table.add_row(cells);
    }

    println!("\n  {}\n", opts.title);
    println!("{table}");
    println!(
        "\n  {} providers, {} models\n",
        format_number(catalog.len() as i64, opts.number_format),
        format_number(catalog.model_count() as i64, opts.number_format)
    );
}

pub(crate) fn output_provider_list_json(catalog: &Catalog) -> String {
    let output: Vec<serde_json::Value> = catalog
        .providers()
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.id,
                "name": p.display_name(),
                "badge": ProviderBadge::for_provider(&p.id),
                "models": p.chat_models.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}
