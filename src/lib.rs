//! fieldops library root.
//! Exposes the CLI parser, the high-level run() function and the client modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use api::HttpApiClient;
use clap::Parser;
use cli::parser::{AttendanceAction, Cli, Commands, InventoryAction, ProjectAction};
use config::Config;
use crate::core::logic::Context;
use errors::{AppError, AppResult};
use session::FileSessionStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Central command dispatcher for the commands that talk to the API
pub async fn dispatch(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    match cmd {
        Commands::Init | Commands::Config { .. } => Ok(()),
        Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            cli::commands::session::handle(cmd, ctx).await
        }
        Commands::Tasks { .. } => cli::commands::tasks::handle(cmd, ctx).await,
        Commands::TaskStatus { .. } => cli::commands::task_status::handle(cmd, ctx).await,
        Commands::Projects { .. } => cli::commands::projects::handle(cmd, ctx).await,
        Commands::Attendance { .. } => cli::commands::attendance::handle(cmd, ctx).await,
        Commands::Inventory { .. } => cli::commands::inventory::handle(cmd, ctx).await,
    }
}

/// What was being attempted, for the failure notice.
pub fn failure_context(cmd: &Commands) -> &'static str {
    match cmd {
        Commands::Init | Commands::Config { .. } => "Could not update the configuration.",
        Commands::Login { .. } => "Login failed.",
        Commands::Logout => "Logout failed.",
        Commands::Whoami => "No user is logged in.",
        Commands::Tasks { .. } => "Failed to fetch assigned tasks.",
        Commands::TaskStatus { .. } => "Failed to update task status.",
        Commands::Projects { action } => match action {
            ProjectAction::List => "Failed to fetch assigned projects.",
            ProjectAction::Status { .. } => "Failed to update project status.",
            ProjectAction::Upload { .. } => "Failed to upload images.",
        },
        Commands::Attendance { action } => match action {
            AttendanceAction::CheckIn { .. } => "Failed to check in.",
            AttendanceAction::CheckOut { .. } => "Failed to check out.",
            AttendanceAction::History { .. } => "Failed to fetch attendance history.",
        },
        Commands::Inventory { action } => match action {
            InventoryAction::Items { .. } | InventoryAction::Categories => {
                "Failed to load inventory."
            }
            InventoryAction::Tasks => "Failed to fetch tasks.",
            InventoryAction::Report { .. } => "Failed to submit usage report.",
        },
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level. Logs go to stderr.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,fieldops=debug",
        _ => "info,fieldops=trace",
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose > 1),
        )
        .try_init();
}

/// Load the configuration and apply command-line overrides.
fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load()?;

    if let Some(url) = &cli.api_url {
        cfg.api_url = url.clone();
    }
    if let Some(session) = &cli.session {
        cfg.session_file = session.clone();
    }

    Ok(cfg)
}

fn build_context(cfg: Config) -> AppResult<Context> {
    let api = HttpApiClient::new(&cfg.api_url, cfg.request_timeout())?;
    let session = FileSessionStore::new(cfg.session_path());
    debug!(api = api.base_url(), session = %session.path().display(), "context ready");

    Ok(Context {
        api: Box::new(api),
        session: Box::new(session),
        today: utils::date::today(),
        config: cfg,
    })
}

fn execute(cli: &Cli) -> AppResult<()> {
    if let Commands::Init = cli.command {
        return cli::commands::init::handle(cli);
    }

    let cfg = load_config(cli)?;
    if let Commands::Config { .. } = cli.command {
        return cli::commands::config::handle(&cli.command, &cfg);
    }

    let ctx = build_context(cfg)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(&cli.command, &ctx))
}

/// Entry point used by main.rs. Failures are reported here; the caller
/// only maps them to an exit status.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let res = execute(&cli);

    if let Err(e) = &res {
        match e {
            AppError::Cancelled => ui::messages::warning("Cancelled."),
            other => {
                let context = match other {
                    AppError::Config(_) | AppError::ConfigLoad => "Could not load the configuration.",
                    _ => failure_context(&cli.command),
                };
                ui::messages::error(ui::messages::failure(context, other));
                if other.is_network() {
                    ui::messages::info("Check your connection and the api_url setting (fieldops config --print).");
                }
            }
        }
    }

    res
}
