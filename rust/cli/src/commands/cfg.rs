//! Configuration command handler.
//!
//! Prints the resolved match configuration with the source of each value
//! (default, file or env):
//!
//! ```json
//! {
//!   "starting_stack": {
//!     "value": 1000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// Loading errors are returned to [`crate::run`], which reports them on `err`.
pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "ante": {
            "value": config.ante,
            "source": sources.ante,
        },
        "hands": {
            "value": config.hands,
            "source": sources.hands,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_every_field_with_its_source() {
        let resolved = config::load_from(|key| (key == "REFEREE_SEED").then(|| "9".to_string())).unwrap();
        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        for key in [
            "starting_stack",
            "small_blind",
            "big_blind",
            "ante",
            "hands",
            "seed",
            "players",
        ] {
            assert!(json[key].get("value").is_some(), "{key} has no value");
        }
        assert_eq!(json["seed"]["value"], 9);
        assert_eq!(json["seed"]["source"], "env");
        assert_eq!(json["hands"]["source"], "default");
        assert!(String::from_utf8(out).unwrap().contains("\n  "));
    }
}
