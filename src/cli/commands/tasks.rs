use crate::cli::parser::Commands;
use crate::core::logic::{self, Context};
use crate::core::screen::Screen;
use crate::core::tasks::TaskBoard;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::task::Task;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_priority, color_for_task_status, grey, paint};
use crate::utils::date::format_long_date;
use crate::utils::formatting::{bold, wrap_text};
use crate::utils::table::{Column, Table};

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Tasks {
        filter,
        details,
        export,
    } = cmd
    {
        if let Some(file) = &export.export {
            ExportLogic::confirm_target(file, export.force)?;
        }

        let screen = Screen::open("tasks");
        screen.cancel_on_ctrl_c();

        let board = logic::task_board(ctx, &screen, *filter).await?;

        println!("{}", render_counts(&board));
        println!();

        let visible = board.visible();
        if visible.is_empty() {
            let (title, hint) = board.filter.empty_message();
            println!("{} {}", board.filter.icon(), bold(title));
            println!("{}", grey(hint));
            return Ok(());
        }

        header(format!("{} tasks", board.filter.label()));
        if *details {
            print_details(&visible);
        } else {
            print!("{}", task_table(&visible).render());
        }

        if let Some(file) = &export.export {
            ExportLogic::export_tasks(&visible, export.format, file)?;
        }
    }

    Ok(())
}

/// `📋 All (5)  📅 Today (2)  ...` with the active bucket in bold.
pub fn render_counts(board: &TaskBoard) -> String {
    board
        .counts()
        .into_iter()
        .map(|(f, n)| {
            let tab = format!("{} {} ({})", f.icon(), f.label(), n);
            if f == board.filter { bold(&tab) } else { tab }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn task_table(tasks: &[Task]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("Title", 32),
        Column::new("Status", 14),
        Column::new("Priority", 8),
        Column::new("Start", 10),
        Column::new("Due", 10),
    ]);

    for t in tasks {
        table.add_row(vec![
            t.id.to_string(),
            t.title.clone(),
            paint(
                &format!("{} {}", t.status.icon(), t.status),
                color_for_task_status(&t.status),
            ),
            paint(t.priority.as_str(), color_for_priority(&t.priority)),
            t.start_date.to_string(),
            t.end_date.to_string(),
        ]);
    }
    table
}

fn print_details(tasks: &[Task]) {
    for t in tasks {
        println!(
            "#{} {}  [{}]  {}",
            t.id,
            bold(&t.title),
            paint(t.status.as_str(), color_for_task_status(&t.status)),
            paint(t.priority.as_str(), color_for_priority(&t.priority)),
        );
        println!(
            "   {} → {}",
            format_long_date(t.start_date),
            format_long_date(t.end_date)
        );
        println!("   Created by: {}", t.creator());
        if !t.description.trim().is_empty() {
            println!("{}", wrap_text(&t.description, 76, "   "));
        }
        match t.feedback.as_deref().map(str::trim) {
            Some(fb) if !fb.is_empty() => println!("   Feedback: {}", fb),
            _ => {}
        }
        println!();
    }

    info(format!("{} task(s)", tasks.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tasks::TaskFilter;
    use crate::models::task_status::{Priority, TaskStatus};
    use chrono::NaiveDate;

    fn task(id: i64, start: &str, end: &str, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            status,
            priority: Priority::Medium,
            created_by: None,
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            end_date: NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
            feedback: None,
        }
    }

    #[test]
    fn counts_line_lists_every_bucket() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let board = TaskBoard::new(
            vec![
                task(1, "2024-03-10", "2024-03-10", TaskStatus::Pending),
                task(2, "2024-03-01", "2024-03-05", TaskStatus::InProgress),
                task(3, "2024-03-12", "2024-03-15", TaskStatus::Pending),
            ],
            TaskFilter::Overdue,
            today,
        );

        let line = render_counts(&board);
        assert!(line.contains("All (3)"));
        assert!(line.contains("Today (1)"));
        assert!(line.contains("Overdue (1)"));
        assert!(line.contains("Upcoming (1)"));
    }

    #[test]
    fn table_has_one_row_per_task() {
        let tasks = vec![
            task(1, "2024-03-10", "2024-03-10", TaskStatus::Pending),
            task(2, "2024-03-01", "2024-03-05", TaskStatus::Completed),
        ];
        let out = task_table(&tasks).render();
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("2024-03-05"));
    }
}
