pub mod attendance;
pub mod config;
pub mod init;
pub mod inventory;
pub mod projects;
pub mod session;
pub mod task_status;
pub mod tasks;

use crate::cli::parser::PositionArgs;
use crate::config::Config;
use crate::core::location::FixedLocation;
use crate::models::location::Coordinates;

/// Position from `--lat/--lon`, else the one in the config file.
pub(crate) fn location_from(args: &PositionArgs, cfg: &Config) -> FixedLocation {
    let given = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
        _ => None,
    };
    FixedLocation(given.or_else(|| cfg.fixed_position()))
}
