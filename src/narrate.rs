//! Console narration for the pattern demos.
//!
//! Every trace line goes through a [`Narrator`]. The binaries use [`Console`],
//! the tests use [`Transcript`] and assert on what was said.

use std::cell::RefCell;

use colored::*;
use tracing::{debug, Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Receives every human-readable trace line, one call per line.
pub trait Narrator {
    fn say(&self, line: &str);
}

/// Writes narration to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Narrator for Console {
    fn say(&self, line: &str) {
        debug!(target: "design_patterns::narrate", line = %line);
        println!("{}", line);
    }
}

/// Records narration in memory.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// True if any recorded line contains `fragment`.
    pub fn contains(&self, fragment: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(fragment))
    }
}

impl Narrator for Transcript {
    fn say(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

struct SymbolFormatter;

impl<S, N> FormatEvent<S, N> for SymbolFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (symbol, paint): (&str, fn(ColoredString) -> ColoredString) =
            match *event.metadata().level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} ", paint(symbol.into()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the stderr diagnostics subscriber. `RUST_LOG` picks the level,
/// `warn` otherwise. Calling it twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(SymbolFormatter)
        .try_init();
}

pub fn banner(title: &str) -> ColoredString {
    format!("=== {} ===", title).cyan().bold()
}
