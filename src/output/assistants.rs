use comfy_table::{Cell, Color};

use crate::consts::{DATE_FORMAT, PLACEHOLDER};
use crate::discover::{AssistantItem, Partition, Section};
use crate::output::format::{
    NumberFormat, create_styled_table, format_number, header_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ListTableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    /// Category column in the curated sections; off while a category filter is active
    pub(crate) show_category: bool,
    /// Ignore the initial window and print every row
    pub(crate) show_all: bool,
    pub(crate) number_format: NumberFormat,
}

/// Number of rows to print for a section of `len` items
fn visible_rows(len: usize, section: Section, show_all: bool) -> usize {
    if show_all {
        return len;
    }
    section.initial_window().map_or(len, |w| w.min(len))
}

fn created_text(item: &AssistantItem) -> String {
    item.created_date()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn build_header(opts: &ListTableOptions, show_category: bool) -> Vec<Cell> {
    let c = opts.use_color;
    let mut h = vec![header_cell("Assistant", c), header_cell("Title", c)];
    if show_category {
        h.push(header_cell("Category", c));
    }
    if !opts.compact {
        h.extend([
            header_cell("Author", c),
            header_cell("Created", c),
            header_cell("Link", c),
        ]);
    }
    h
}

fn item_row(item: &AssistantItem, opts: &ListTableOptions, show_category: bool) -> Vec<Cell> {
    let id_color = if opts.use_color { Some(Color::Cyan) } else { None };
    let mut row = vec![
        styled_cell(&item.identifier, id_color, false),
        Cell::new(item.title()),
    ];
    if show_category {
        row.push(Cell::new(
            item.meta.category.as_deref().unwrap_or(PLACEHOLDER),
        ));
    }
    if !opts.compact {
        row.extend([
            Cell::new(item.author.as_deref().unwrap_or(PLACEHOLDER)),
            Cell::new(created_text(item)),
            Cell::new(item.href()),
        ]);
    }
    row
}

fn print_section(
    title: &str,
    items: &[AssistantItem],
    section: Section,
    show_category: bool,
    opts: &ListTableOptions,
) {
    let shown = visible_rows(items.len(), section, opts.show_all);

    let mut table = create_styled_table();
    table.set_header(build_header(opts, show_category));
    for item in &items[..shown] {
        table.add_row(item_row(item, opts, show_category));
    }

    println!("\n  {title}\n");
    println!("{table}");

    let hidden = items.len() - shown;
    if hidden > 0 {
        println!(
            "\n  ... {} more (use --all to show everything)",
            format_number(hidden as i64, opts.number_format)
        );
    }
}

pub(crate) fn print_assistant_listing(
    partition: &Partition<'_, AssistantItem>,
    keyword: Option<&str>,
    opts: ListTableOptions,
) {
    match partition {
        Partition::Empty => {
            println!(
                "No assistants found for \"{}\".",
                keyword.unwrap_or_default()
            );
        }
        Partition::Search { all, count } => {
            let title = format!(
                "Found {} results for \"{}\"",
                format_number(*count as i64, opts.number_format),
                keyword.unwrap_or_default()
            );
            print_section(&title, all, Section::Search, true, &opts);
            println!();
        }
        Partition::Curated { recent, overflow } => {
            if recent.is_empty() {
                println!("No assistants found.");
                return;
            }
            print_section(
                "Recent Submits",
                recent,
                Section::Recent,
                opts.show_category,
                &opts,
            );
            if !overflow.is_empty() {
                let title = format!(
                    "Assistants ({})",
                    format_number(overflow.len() as i64, opts.number_format)
                );
                print_section(
                    &title,
                    overflow,
                    Section::Overflow,
                    opts.show_category,
                    &opts,
                );
            }
            println!();
        }
    }
}

fn item_json(item: &AssistantItem) -> serde_json::Value {
    serde_json::json!({
        "identifier": item.identifier,
        "title": item.title(),
        "description": item.meta.description,
        "category": item.meta.category,
        "tags": item.meta.tags,
        "author": item.author,
        "created_at": item.created_date().map(|d| d.format(DATE_FORMAT).to_string()),
        "homepage": item.homepage,
        "href": item.href(),
    })
}

fn items_json(items: &[AssistantItem]) -> Vec<serde_json::Value> {
    items.iter().map(item_json).collect()
}

fn listing_value(
    partition: &Partition<'_, AssistantItem>,
    keyword: Option<&str>,
) -> serde_json::Value {
    match partition {
        Partition::Empty => serde_json::json!({
            "mode": "empty",
            "keyword": keyword,
            "count": 0,
            "items": [],
        }),
        Partition::Search { all, count } => serde_json::json!({
            "mode": "search",
            "keyword": keyword,
            "count": count,
            "items": items_json(all),
        }),
        Partition::Curated { recent, overflow } => serde_json::json!({
            "mode": "curated",
            "recent": items_json(recent),
            "overflow": items_json(overflow),
        }),
    }
}

pub(crate) fn output_assistant_json(
    partition: &Partition<'_, AssistantItem>,
    keyword: Option<&str>,
) -> String {
    serde_json::to_string_pretty(&listing_value(partition, keyword)).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}
