use super::location_from;
use crate::cli::parser::{AttendanceAction, Commands};
use crate::core::attendance::{AttendanceHistory, derive_status};
use crate::core::logic::{self, Context};
use crate::core::screen::Screen;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::attendance::{AttendanceRecord, Punch};
use crate::models::location::LocationCapture;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{color_for_attendance, grey, paint};
use crate::utils::date::{format_long_date, format_time};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::Attendance { action } = cmd else {
        return Ok(());
    };

    if let AttendanceAction::History { export, .. } = action {
        if let Some(file) = &export.export {
            ExportLogic::confirm_target(file, export.force)?;
        }
    }

    let screen = Screen::open("attendance");
    screen.cancel_on_ctrl_c();

    match action {
        AttendanceAction::CheckIn { position } | AttendanceAction::CheckOut { position } => {
            let kind = match action {
                AttendanceAction::CheckIn { .. } => Punch::CheckIn,
                _ => Punch::CheckOut,
            };
            let location = location_from(position, &ctx.config);

            let (message, capture) = logic::punch(ctx, &screen, &location, kind).await?;

            if message.is_empty() {
                success(format!("Recorded {}.", kind.label()));
            } else {
                success(message);
            }
            if capture == LocationCapture::Unavailable {
                warning(format!(
                    "Location unavailable: {} recorded as \"{}\".",
                    kind.label(),
                    LocationCapture::UNAVAILABLE
                ));
            }
        }
        AttendanceAction::History {
            range,
            search,
            export,
        } => {
            let history = logic::attendance_history(ctx, &screen)
                .await?
                .with_range(*range)
                .with_query(search.clone().unwrap_or_default());

            print_today(&history, ctx.today);

            let visible = history.visible(ctx.today);
            if visible.is_empty() {
                println!("📅 {}", bold("No attendance records found"));
                if history.query.trim().is_empty() {
                    println!("{}", grey("Nothing recorded in this period."));
                } else {
                    println!("{}", grey("Try a different search term."));
                }
                return Ok(());
            }

            header(format!("Attendance history: {}", range.label()));
            print!("{}", history_table(&visible).render());
            info(format!("{} record(s)", visible.len()));

            if let Some(file) = &export.export {
                ExportLogic::export_attendance(&visible, export.format, file)?;
            }
        }
    }

    Ok(())
}

fn print_today(history: &AttendanceHistory, today: NaiveDate) {
    let line = match history.record_for(today) {
        Some(r) => {
            let status = derive_status(r);
            format!(
                "Today, {}: {}  (in {}, out {})",
                format_long_date(today),
                paint(status.as_str(), color_for_attendance(status)),
                format_time(r.check_in.as_deref()),
                format_time(r.check_out.as_deref()),
            )
        }
        None => format!("Today, {}: not checked in", format_long_date(today)),
    };
    println!("{}", line);
    println!();
}

fn history_table(records: &[AttendanceRecord]) -> Table {
    let mut table = Table::new(vec![
        Column::new("Date", 30),
        Column::new("Status", 12),
        Column::new("Check-in", 8),
        Column::new("Check-out", 9),
        Column::new("Location", 48),
    ]);

    for r in records {
        let status = derive_status(r);
        let location = r
            .check_in_location
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or("-");
        table.add_row(vec![
            format_long_date(r.date),
            paint(status.as_str(), color_for_attendance(status)),
            format_time(r.check_in.as_deref()),
            format_time(r.check_out.as_deref()),
            location.to_string(),
        ]);
    }
    table
}
