use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates `~/.fieldops/` and writes a default `fieldops.conf`, taking the
/// API URL from `--api-url` when given. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.api_url.clone(), cli.test)?;

    let mut cfg = Config::default();
    if let Some(url) = &cli.api_url {
        cfg.api_url = url.clone();
    }

    println!("⚙️  Initializing fieldops…");
    println!("📄 Config file : {}", path.display());
    println!("🌐 API         : {}", cfg.api_url);
    println!("🔑 Session     : {}", cfg.session_path().display());

    success("fieldops initialization completed!");
    Ok(())
}
