//! Command-line front end.
//!
//! Every subcommand other than `tui` works on a fresh copy of the
//! configured seed and writes plain text (or JSON) to the given writer.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::assistant::IntentMatcher;
use crate::config::Config;
use crate::inventory::{
    aggregate, by_category, categories, filter_and_sort, status_distribution, Item, SortKey,
    StatusFilter, StockStatus,
};
use crate::ui::Page;

/// Pharmacy stock catalog, dashboard and assistant.
#[derive(Debug, Parser)]
#[command(name = "supplysoul", version, about)]
pub struct Cli {
    /// Config file to use instead of ~/.config/supplysoul/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive terminal UI (default).
    Tui {
        /// Page to open first; overrides `ui.start_page`.
        #[arg(long, value_enum)]
        page: Option<Page>,
    },
    /// Ask the assistant one question and print the reply.
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print the catalog, optionally searched, filtered and sorted.
    List(ListArgs),
    /// Print headline counts, category totals and status distribution.
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Print the distinct categories in first-appearance order.
    Categories,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the item name.
    #[arg(long, default_value = "")]
    pub search: String,
    /// All, "In Stock", "Low Stock" or "Out of Stock" (slugs accepted).
    #[arg(long, default_value = "All")]
    pub status: String,
    /// name, quantity, category or status; anything else keeps insertion order.
    #[arg(long, default_value = "name")]
    pub sort: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListedItem<'a> {
    #[serde(flatten)]
    item: &'a Item,
    status: StockStatus,
}

pub fn ask(config: &Config, query: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    let matcher = IntentMatcher::with_vocabulary(&config.assistant.category_vocabulary);
    let query = query.join(" ");
    if query.trim().is_empty() {
        anyhow::bail!("Query must not be blank");
    }
    let items = config.inventory.seed_items();
    let resolution = matcher.resolve(&query, &items);
    writeln!(out, "{}", resolution.text)?;
    Ok(())
}

pub fn list(config: &Config, args: &ListArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let filter: StatusFilter = args.status.parse()?;
    let items = config.inventory.seed_items();
    let rows = filter_and_sort(&items, &args.search, filter, SortKey::from(args.sort.as_str()));

    if args.json {
        let listed: Vec<ListedItem> = rows
            .iter()
            .map(|item| ListedItem {
                item,
                status: item.status(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &listed)?;
        writeln!(out)?;
        return Ok(());
    }

    let name_width = rows
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let category_width = rows
        .iter()
        .map(|item| item.category.chars().count())
        .max()
        .unwrap_or(0)
        .max(8);
    writeln!(
        out,
        "{:>4}  {:<name_width$}  {:<category_width$}  {:>8}  {:>9}  STATUS",
        "ID", "NAME", "CATEGORY", "QUANTITY", "THRESHOLD"
    )?;
    for item in &rows {
        writeln!(
            out,
            "{:>4}  {:<name_width$}  {:<category_width$}  {:>8}  {:>9}  {}",
            item.id,
            item.name,
            item.category,
            item.quantity,
            item.threshold,
            item.status()
        )?;
    }
    writeln!(out, "{} of {} items", rows.len(), items.len())?;
    Ok(())
}

pub fn stats(config: &Config, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let items = config.inventory.seed_items();
    let stats = aggregate(&items);
    let categories = by_category(&items);
    let distribution = status_distribution(&items);

    if json {
        let report = serde_json::json!({
            "stats": stats,
            "categories": categories,
            "status_distribution": distribution,
        });
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Total items:    {}", stats.total)?;
    writeln!(out, "In stock:       {}", stats.in_stock)?;
    writeln!(out, "Low stock:      {}", stats.low_stock)?;
    writeln!(out, "Out of stock:   {}", stats.out_of_stock)?;
    writeln!(out, "Total quantity: {}", stats.total_quantity)?;
    writeln!(out)?;
    writeln!(out, "By category:")?;
    for summary in &categories {
        writeln!(
            out,
            "  {:<20} {:>6} units  {} items",
            summary.name, summary.quantity, summary.items
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Status distribution:")?;
    for slice in &distribution {
        writeln!(
            out,
            "  {:<14} {:>3}  {:>3}%",
            slice.label,
            slice.value,
            slice.percent_of(stats.total)
        )?;
    }
    Ok(())
}

pub fn list_categories(config: &Config, out: &mut impl Write) -> io::Result<()> {
    for category in categories(&config.inventory.seed_items()) {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn list_args(status: &str) -> ListArgs {
        ListArgs {
            search: String::new(),
            status: status.to_string(),
            sort: "name".to_string(),
            json: false,
        }
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["supplysoul", "ask", "out", "of", "stock"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Ask { ref query }) if query.len() == 3));

        let cli = Cli::try_parse_from(["supplysoul", "tui", "--page", "dashboard"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Tui {
                page: Some(Page::Dashboard)
            })
        ));

        let cli = Cli::try_parse_from(["supplysoul"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn ask_joins_words() {
        let query = ["out".to_string(), "of".to_string(), "stock".to_string()];
        let text = output(|out| ask(&Config::default(), &query, out));
        assert_eq!(text, "Out of stock items: Amoxicillin 250mg\n");
    }

    #[test]
    fn ask_rejects_blank_query() {
        let mut buffer = Vec::new();
        let query = [String::new(), "  ".to_string()];
        let err = ask(&Config::default(), &query, &mut buffer).unwrap_err();
        assert_eq!(err.to_string(), "Query must not be blank");
        assert!(buffer.is_empty());
    }

    #[test]
    fn list_filters_by_status() {
        let text = output(|out| list(&Config::default(), &list_args("out-of-stock"), out));
        assert!(text.contains("Amoxicillin 250mg"));
        assert!(text.ends_with("1 of 15 items\n"));
    }

    #[test]
    fn list_rejects_unknown_status() {
        let mut buffer = Vec::new();
        let err = list(&Config::default(), &list_args("expired"), &mut buffer).unwrap_err();
        assert!(err.to_string().contains("Unknown stock status 'expired'"));
    }

    #[test]
    fn list_json_includes_status() {
        let mut args = list_args("Low Stock");
        args.json = true;
        let text = output(|out| list(&Config::default(), &args, out));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row["status"] == "low-stock"));
    }

    #[test]
    fn stats_json_has_three_sections() {
        let text = output(|out| stats(&Config::default(), true, out));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["stats"]["total"], 15);
        assert_eq!(parsed["categories"].as_array().map(Vec::len), Some(6));
        assert_eq!(parsed["status_distribution"][0]["value"], 10);
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let mut buffer = Vec::new();
        list_categories(&Config::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "Pain Relief",
                "Antibiotics",
                "Diabetes",
                "First Aid",
                "Medical Supplies",
                "Medical Equipment"
            ]
        );
    }
}
