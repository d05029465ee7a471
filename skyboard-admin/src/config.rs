use serde::{Deserialize, Serialize};
use skyboard_base::Error;

/// Materializer tuning, loaded from a TOML file with documented
/// defaults (§6 doesn't require any config file at all; this exists so
/// the legacy-migration cap and diagnostics verbosity aren't buried as
/// magic constants in library code).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cap on `order`-to-`position` migration steps (§4.1, §9's first
    /// open question). Matches `skyboard_position::LEGACY_ORDER_STEP_CAP`
    /// unless a deployment has a documented reason to diverge.
    pub legacy_order_step_cap: u32,
    /// Assumed `open` flag for boards whose record is missing the field
    /// on read (older wire formats omitted it rather than defaulting).
    pub default_board_open: bool,
    /// Whether `Diagnostics` implementations should log at `warn`
    /// (verbose) or `debug` (quiet) for excluded/deferred records.
    pub verbose_diagnostics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            legacy_order_step_cap: skyboard_position::LEGACY_ORDER_STEP_CAP,
            default_board_open: false,
            verbose_diagnostics: false,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        toml::from_str(s).map_err(Error::new)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_match_position_crate_cap() {
        let config = Config::default();
        assert_eq!(
            config.legacy_order_step_cap,
            skyboard_position::LEGACY_ORDER_STEP_CAP
        );
    }

    #[test]
    fn parses_partial_toml_with_documented_defaults() {
        let config = Config::from_toml_str("default_board_open = true\n").unwrap();
        assert!(config.default_board_open);
        assert_eq!(
            config.legacy_order_step_cap,
            skyboard_position::LEGACY_ORDER_STEP_CAP
        );
    }
}
