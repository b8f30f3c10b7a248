use crate::utils::error::{DataError, Result};
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Severity threshold for the CLI. Fixed: `RUST_LOG` is not consulted.
pub const LOG_DIRECTIVE: &str = "info";

/// Formats every event as `LEVEL: message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelPrefixFormat;

impl<S, N> FormatEvent<S, N> for LevelPrefixFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

pub fn cli_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_DIRECTIVE))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(make_writer)
                .event_format(LevelPrefixFormat),
        )
}

pub fn init_cli_logger() -> Result<()> {
    cli_subscriber(std::io::stderr)
        .try_init()
        .map_err(|e| DataError::LoggerInit {
            message: e.to_string(),
        })
}
