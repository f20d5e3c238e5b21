//! fieldops main entrypoint.

use fieldops::errors::AppError;
use fieldops::run;

fn main() {
    if let Err(e) = run() {
        // the failure notice has already been printed by run()
        let code = match e {
            AppError::Cancelled => 130,
            _ => 1,
        };
        std::process::exit(code);
    }
}
