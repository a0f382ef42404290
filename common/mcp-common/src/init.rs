//! Server initialization utilities
//!
//! Provides tracing setup and the `serve_stdio!` macro that wires a
//! [`ToolServer`](crate::ToolServer) to stdin/stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the log line format
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Log line format on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text without ANSI colors
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything but `json` means text
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }

    /// Read the format from the `LOG_FORMAT` environment variable
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Directives used when `RUST_LOG` is unset, empty, or invalid
pub fn default_directives(crate_name: &str) -> String {
    format!("{}=info,mcp_common=info", crate_name)
}

/// Build the log filter from a `RUST_LOG` value
///
/// A valid `RUST_LOG` replaces the defaults entirely.
pub fn build_filter(crate_name: &str, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directives(crate_name)))
}

/// Initialize tracing/logging for a server
///
/// Logs always go to stderr; stdout carries protocol lines only. The default
/// level is `info` for `crate_name` and for this crate's dispatch events;
/// `RUST_LOG` overrides it.
///
/// # Example
///
/// ```rust,ignore
/// mcp_common::init_tracing("system_manager_mcp")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(crate_name, rust_log.as_deref());
    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
    }

    Ok(())
}

/// Macro for standardized server startup
///
/// Expands to a single-threaded `#[tokio::main] async fn main()` that:
/// 1. Initializes tracing to stderr
/// 2. Creates the server with `::new()`
/// 3. Serves stdin/stdout until end of input
/// 4. Logs the request counters
///
/// # Example
///
/// ```rust,ignore
/// mcp_common::serve_stdio!(MyServer, "my_mcp");
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($server_type:ty, $crate_name:expr) => {
        #[tokio::main(flavor = "current_thread")]
        async fn main() -> anyhow::Result<()> {
            use $crate::ToolServer;

            $crate::init_tracing($crate_name)?;

            let server = <$server_type>::new();
            tracing::info!(
                name = server.server_name(),
                version = server.server_version(),
                description = server.server_description().unwrap_or_default(),
                "Starting server"
            );

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let stats = $crate::serve_lines(&server, stdin, tokio::io::stdout()).await?;

            tracing::info!(
                lines_read = stats.lines_read,
                responses_written = stats.responses_written,
                lines_dropped = stats.lines_dropped,
                "Input closed, shutting down"
            );
            Ok(())
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
    }

    #[test]
    fn test_filter_defaults_to_info() {
        let filter = build_filter("demo_mcp", None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(default_directives("demo_mcp"), "demo_mcp=info,mcp_common=info");

        let blank = build_filter("demo_mcp", Some("  "));
        assert_eq!(blank.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_rust_log_overrides_defaults() {
        let quieter = build_filter("demo_mcp", Some("demo_mcp=warn,mcp_common=warn"));
        assert_eq!(quieter.max_level_hint(), Some(LevelFilter::WARN));

        let louder = build_filter("demo_mcp", Some("mcp_common=debug"));
        assert_eq!(louder.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_invalid_rust_log_falls_back() {
        let filter = build_filter("demo_mcp", Some("demo_mcp=loudest"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
