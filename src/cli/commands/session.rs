use crate::cli::parser::Commands;
use crate::core::logic::{self, Context};
use crate::core::screen::Screen;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::io::{self, BufRead, Write};

/// Handle `login`, `logout` and `whoami`
pub async fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    match cmd {
        Commands::Login {
            identifier,
            password,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => read_password(&mut io::stdin().lock())?,
            };

            let screen = Screen::open("login");
            screen.cancel_on_ctrl_c();

            let user = logic::login(ctx, &screen, identifier, &password).await?;
            success(format!("Welcome, {}!", user.display_name()));
        }
        Commands::Logout => {
            ctx.session.clear()?;
            success("Logged out.");
        }
        Commands::Whoami => {
            let user = ctx.user()?;
            info(format!("Logged in as user {}", user));
        }
        _ => {}
    }

    Ok(())
}

/// Read one line from `input`; used when `--password` is not given.
fn read_password(input: &mut dyn BufRead) -> AppResult<String> {
    print!("Password: ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(AppError::Validation(
            "Username/email and password are required.".to_string(),
        ));
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_line_is_trimmed_of_newline_only() {
        let mut input = io::Cursor::new(" s3cret \n");
        assert_eq!(read_password(&mut input).unwrap(), " s3cret ");
    }

    #[test]
    fn empty_password_is_refused() {
        let mut input = io::Cursor::new("\n");
        assert!(matches!(
            read_password(&mut input),
            Err(AppError::Validation(_))
        ));
    }
}
