use crate::cli::parser::{Commands, InventoryAction};
use crate::core::logic::{self, Context, build_usage_draft, parse_item_spec};
use crate::core::screen::Screen;
use crate::core::usage::{UsageDraft, parse_quantity};
use crate::errors::{AppError, AppResult};
use crate::models::inventory::InventoryItem;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::grey;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::Inventory { action } = cmd else {
        return Ok(());
    };

    let screen = Screen::open("inventory");
    screen.cancel_on_ctrl_c();

    match action {
        InventoryAction::Items { category, search } => {
            let catalog = logic::inventory_catalog(ctx, &screen).await?;
            if !catalog.categories().iter().any(|c| c == category) {
                return Err(AppError::Validation(format!(
                    "Unknown category '{}'. Available: {}",
                    category,
                    catalog.categories().join(", ")
                )));
            }

            let visible = catalog.visible(category, search.as_deref().unwrap_or(""));
            if visible.is_empty() {
                println!("📦 {}", bold("No items found"));
                println!("{}", grey("Nothing in stock matches this filter."));
                return Ok(());
            }

            header(format!("Inventory: {}", category));
            print!("{}", items_table(&visible).render());
        }
        InventoryAction::Categories => {
            let catalog = logic::inventory_catalog(ctx, &screen).await?;
            header("Categories");
            for c in catalog.categories() {
                println!("  {}", c);
            }
        }
        InventoryAction::Tasks => {
            let tasks = logic::report_tasks(ctx, &screen).await?;
            if tasks.is_empty() {
                println!("{}", grey("No tasks available."));
                return Ok(());
            }
            let mut table = Table::new(vec![Column::new("ID", 6), Column::new("Title", 60)]);
            for t in &tasks {
                table.add_row(vec![t.id.to_string(), t.title.clone()]);
            }
            header("Tasks");
            print!("{}", table.render());
        }
        InventoryAction::Report {
            task,
            add,
            set,
            remove,
            dry_run,
        } => {
            precheck_report(*task, add, set, *dry_run)?;
            if !*dry_run {
                ctx.user()?;
            }

            let catalog = logic::inventory_catalog(ctx, &screen).await?;
            let draft = build_usage_draft(&catalog, *task, add, set, remove)?;

            print_draft(&draft);

            if *dry_run {
                info("Dry run: nothing submitted.");
                return Ok(());
            }

            let message = logic::submit_usage(ctx, &screen, &draft).await?;
            if message.is_empty() {
                success("Inventory usage reported successfully");
            } else {
                success(message);
            }
        }
    }

    Ok(())
}

/// Reject malformed arguments before anything is fetched.
fn precheck_report(task: Option<i64>, add: &[String], set: &[String], dry_run: bool) -> AppResult<()> {
    for spec in add.iter().chain(set) {
        let (_, qty) = parse_item_spec(spec)?;
        parse_quantity(qty)?;
    }

    if dry_run {
        return Ok(());
    }
    if task.is_none() {
        return Err(AppError::Validation("Please select a task.".to_string()));
    }
    if add.is_empty() {
        return Err(AppError::Validation(
            "Please add at least one item to report usage.".to_string(),
        ));
    }
    Ok(())
}

fn items_table(items: &[InventoryItem]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("Name", 32),
        Column::new("Category", 16),
        Column::new("Stock", 14),
    ]);
    for i in items {
        table.add_row(vec![
            i.id.to_string(),
            i.name.clone(),
            i.category.clone(),
            format!("{} {}", i.current_stock, i.unit),
        ]);
    }
    table
}

fn print_draft(draft: &UsageDraft) {
    match draft.task_id() {
        Some(id) => header(format!("Usage report for task #{}", id)),
        None => header("Usage report (no task selected)"),
    }

    if draft.is_empty() {
        println!("{}", grey("No items added."));
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("Item", 32),
        Column::new("Used", 12),
        Column::new("In stock", 12),
    ]);
    for l in draft.lines() {
        table.add_row(vec![
            l.item_id.to_string(),
            l.item_name.clone(),
            format!("{} {}", l.quantity_used, l.unit),
            format!("{} {}", l.current_stock, l.unit),
        ]);
    }
    print!("{}", table.render());
}
