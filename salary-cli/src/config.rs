//! Optional TOML configuration for the `sueldo` binary.
//!
//! Tax constants are compiled in; the file only covers presentation and
//! logging preferences. Every key is optional:
//!
//! ```toml
//! log_level = "info"
//! log_file = "/tmp/sueldo.log"
//! currency_code = "ARS"
//!
//! [curve]
//! start = 300000
//! end = 20000000
//! points = 500
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use salary_core::curve::CurveSpec;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "SUELDO_CONFIG";

const DEFAULT_CURRENCY_CODE: &str = "ARS";

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Curve overrides; unset fields fall back to [`CurveSpec::DEFAULT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurveConfig {
    pub start: Option<Decimal>,
    pub end: Option<Decimal>,
    pub points: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log filter directive used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    /// Currency label printed in front of amounts.
    pub currency_code: Option<String>,
    pub curve: CurveConfig,
}

impl CliConfig {
    /// Parses configuration from TOML text. `path` is only used in errors.
    pub fn from_toml(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Loads the explicit path if given, else the file named by
    /// [`CONFIG_ENV_VAR`], else returns the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn currency_code(&self) -> &str {
        self.currency_code.as_deref().unwrap_or(DEFAULT_CURRENCY_CODE)
    }

    /// Curve range with command-line values taking precedence over the file.
    pub fn curve_spec(
        &self,
        start: Option<Decimal>,
        end: Option<Decimal>,
        points: Option<usize>,
    ) -> CurveSpec {
        let default = CurveSpec::DEFAULT;
        CurveSpec {
            start: start.or(self.curve.start).unwrap_or(default.start),
            end: end.or(self.curve.end).unwrap_or(default.end),
            points: points.or(self.curve.points).unwrap_or(default.points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn parse(text: &str) -> Result<CliConfig, ConfigError> {
        CliConfig::from_toml(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse("").unwrap();

        assert_eq!(config, CliConfig::default());
        assert_eq!(config.currency_code(), "ARS");
        assert_eq!(config.curve_spec(None, None, None), CurveSpec::DEFAULT);
    }

    #[test]
    fn full_file_is_parsed() {
        let config = parse(
            r#"
log_level = "debug"
log_file = "sueldo.log"
currency_code = "$"

[curve]
start = 0
end = 1000000
points = 11
"#,
        )
        .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("sueldo.log")));
        assert_eq!(config.currency_code(), "$");
        assert_eq!(
            config.curve_spec(None, None, None),
            CurveSpec {
                start: dec!(0),
                end: dec!(1000000),
                points: 11,
            }
        );
    }

    #[test]
    fn command_line_values_override_file() {
        let config = parse("[curve]\npoints = 11\nend = 500000\n").unwrap();

        let spec = config.curve_spec(Some(dec!(100000)), None, Some(3));

        assert_eq!(spec.start, dec!(100000));
        assert_eq!(spec.end, dec!(500000));
        assert_eq!(spec.points, 3);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = parse("tax_year = 2025\n");

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = CliConfig::from_file(Path::new("/nonexistent/sueldo.toml"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
