//! Configuration command handler.
//!
//! Displays the resolved settings with where each value came from
//! (default, file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "slots": {
//!     "value": 5,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails, after writing
/// the reason to `err`.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "slots": {
            "value": config.slots,
            "source": sources.slots,
        },
        "ascii": {
            "value": config.ascii,
            "source": sources.ascii,
        },
        "limit": {
            "value": config.limit,
            "source": sources.limit,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
