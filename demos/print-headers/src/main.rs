//! Loads a user config and prints the request headers it produces.
//!
//! ```text
//! cargo run -p print-headers -- user.json
//! RUST_LOG=debug cargo run -p print-headers -- user.json
//! ```

use std::process::ExitCode;

use mhyy::prelude::*;

fn main() -> ExitCode {
    mhyy::init_logging();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: print-headers <config.json>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "could not build user");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<String, MhyyError> {
    let user = UserConfig::from_json_file(path)?.into_user()?;
    tracing::info!(game = %user.game_type(), client = %user.client_type(), "user ready");

    // Serializing a BTreeMap of strings can't fail.
    Ok(serde_json::to_string_pretty(&user.headers()).unwrap_or_default())
}
