//! src/logging.rs
//! ============================================================================
//! # Logger: file-only tracing setup
//!
//! The terminal belongs to the UI and stdout belongs to the picked path, so
//! every event goes to a daily rolling file instead.

use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::{Event, Level, Metadata, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, daily};
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    prelude::*,
    registry::LookupSpan,
};

use crate::error::AppError;

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`. `None` leaves tracing disabled.
    pub fn init_tracing(level: Option<Level>, log_dir: &Path) -> Result<(), AppError> {
        let Some(level) = level else {
            return Ok(());
        };

        fs::create_dir_all(log_dir).map_err(|e| {
            AppError::Logging(format!("cannot create {}: {e}", log_dir.display()))
        })?;

        // daily rolling file appender → <log_dir>/treepick.YYYY-MM-DD
        let file: RollingFileAppender = daily(log_dir, "treepick");

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();

        let file_layer = fmt::layer()
            .event_format(SeqFileMod)
            .with_writer(file)
            .with_ansi(false)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(file_layer)
            .try_init()
            .map_err(|e| AppError::Logging(e.to_string()))
    }
}

static SEQ: AtomicUsize = AtomicUsize::new(1);

/// Custom formatter: `[SEQ] LEVEL [file:line mod::path] message`
struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &Event<'_>,
    ) -> std::fmt::Result {
        let seq: usize = SEQ.fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {:5} [{}:{} {}] ",
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}
