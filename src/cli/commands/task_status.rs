use super::location_from;
use crate::cli::parser::Commands;
use crate::core::logic::{self, Context};
use crate::core::screen::Screen;
use crate::errors::AppResult;
use crate::models::location::LocationCapture;
use crate::ui::messages::{info, success, warning};

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::TaskStatus {
        task_id,
        status,
        position,
    } = cmd
    {
        let location = location_from(position, &ctx.config);

        let screen = Screen::open("task-status");
        screen.cancel_on_ctrl_c();

        let (message, capture) =
            logic::update_task_status(ctx, &screen, &location, *task_id, status).await?;

        success(message);
        match capture {
            LocationCapture::Located(c) => info(format!("Location recorded: {}", c.maps_url())),
            LocationCapture::Unavailable => {
                warning("Location unavailable: the status was updated without it.")
            }
        }
    }

    Ok(())
}
