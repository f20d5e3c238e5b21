use crate::cli::parser::{Commands, ProjectAction};
use crate::core::logic::{self, Context};
use crate::core::screen::Screen;
use crate::errors::AppResult;
use crate::models::project::Project;
use crate::ui::messages::{header, success};
use crate::utils::colors::{color_for_project_status, grey, paint};
use crate::utils::formatting::{bold, format_budget, wrap_text};

pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::Projects { action } = cmd else {
        return Ok(());
    };

    let screen = Screen::open("projects");
    screen.cancel_on_ctrl_c();

    match action {
        ProjectAction::List => {
            let projects = logic::assigned_projects(ctx, &screen).await?;
            if projects.is_empty() {
                println!("📁 {}", bold("No Projects Assigned"));
                println!("{}", grey("You don't have any assigned projects at the moment."));
                return Ok(());
            }

            header(format!("Assigned projects ({})", projects.len()));
            for p in &projects {
                print_project(p);
            }
        }
        ProjectAction::Status { project_id, status } => {
            let message = logic::set_project_status(ctx, &screen, *project_id, status).await?;
            success(message);
        }
        ProjectAction::Upload {
            project_id,
            files,
            status,
        } => {
            let message =
                logic::upload_project_images(ctx, &screen, *project_id, files, status.as_deref())
                    .await?;
            success(format!("{} ({} image(s))", message, files.len()));
        }
    }

    Ok(())
}

fn print_project(p: &Project) {
    println!(
        "#{} {}  [{}]",
        p.id,
        bold(&p.project_name),
        paint(&p.status.label(), color_for_project_status(&p.status))
    );
    if !p.location.trim().is_empty() {
        println!("   📍 {}", p.location);
    }
    println!("   💰 Budget: {}", format_budget(p.budget));
    if !p.description.trim().is_empty() {
        println!("{}", wrap_text(&p.description, 76, "   "));
    }
    if !p.images.is_empty() {
        println!("   🖼  {} image(s)", p.images.len());
        for img in &p.images {
            println!("      {}", grey(img));
        }
    }
    println!();
}
