use std::{
    fs::File,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Filter used when neither `RUST_LOG`, the config file nor `-v` set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// --- Formatter ---

struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        if ansi {
            write!(writer, "\x1b[2m")?
        }
        write!(
            writer,
            "{} ",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.6f%:z")
        )?;
        if ansi {
            write!(writer, "\x1b[0m")?
        }

        let (pre, post) = if ansi {
            match *meta.level() {
                Level::ERROR => ("\x1b[1;31m", "\x1b[0m"),
                Level::WARN => ("\x1b[1;33m", "\x1b[0m"),
                Level::INFO => ("\x1b[1;32m", "\x1b[0m"),
                Level::DEBUG => ("\x1b[1;34m", "\x1b[0m"),
                Level::TRACE => ("\x1b[1;35m", "\x1b[0m"),
            }
        } else {
            ("", "")
        };
        write!(writer, "{}{:>5}{} ", pre, meta.level(), post)?;

        let file = meta.file().map(|f| {
            f.strip_prefix("src/")
                .or_else(|| f.strip_prefix("src\\"))
                .unwrap_or(f)
        });
        if let (Some(file), Some(line)) = (file, meta.line()) {
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Public API ---

/// Where and how much to log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: Option<String>,
    /// Optional file receiving an uncolored copy of every record.
    pub file: Option<PathBuf>,
}

/// Maps `-v` occurrences onto a filter directive.
///
/// Zero keeps `configured` (or the default); one selects `info`, two or more
/// select `debug`.
pub fn level_for_verbosity(
    verbose: u8,
    configured: Option<&str>,
) -> String {
    match verbose {
        0 => configured.unwrap_or(DEFAULT_LOG_LEVEL).to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn make_filter(level: Option<&str>) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            let level = level.unwrap_or(DEFAULT_LOG_LEVEL);
            EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
        }
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Initializes logging. Call once at startup.
///
/// - Stderr: colored when attached to a terminal, plain when piped. Stdout
///   is left to command output.
/// - File: enabled when `options.file` is set.
/// - Level: `RUST_LOG` if set, else `options.level`, else `warn`.
pub fn init_logging(options: &LogOptions) -> Result<()> {
    let filter = make_filter(options.level.as_deref())?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = match &options.file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .event_format(LocalFmt)
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn verbosity_zero_keeps_configured_level() {
        assert_eq!(level_for_verbosity(0, Some("error")), "error");
        assert_eq!(level_for_verbosity(0, None), "warn");
    }

    #[test]
    fn verbosity_flags_raise_level() {
        assert_eq!(level_for_verbosity(1, Some("error")), "info");
        assert_eq!(level_for_verbosity(2, None), "debug");
        assert_eq!(level_for_verbosity(5, None), "debug");
    }

    #[test]
    fn open_log_file_reports_missing_directory() {
        let err = open_log_file(Path::new("/nonexistent/dir/sueldo.log")).unwrap_err();

        assert!(err.to_string().contains("cannot open log file"));
    }
}
