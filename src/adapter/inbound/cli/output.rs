//! CLI output formatting.
//!
//! Human-readable lines go to stdout with colored status symbols; errors go
//! to stderr. In JSON mode every command prints exactly one JSON document on
//! stdout instead, so the helpers below stay silent and handlers call
//! [`json_output`]. Quiet mode suppresses everything but warnings, errors and
//! JSON.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream, Style};
use tabled::settings::Style as TableStyle;
use tabled::{Table, Tabled};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// True when plain text should not be printed at all.
fn text_suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

fn paint(text: &str, stream: Stream, style: Style) -> String {
    text.if_supports_color(stream, |t| t.style(style)).to_string()
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Print a section header.
pub fn section(title: &str) {
    if text_suppressed(read_config()) {
        return;
    }

    println!();
    println!("{}", paint(title, Stream::Stdout, Style::new().bold()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if text_suppressed(read_config()) {
        return;
    }

    let label = format!("{label:<20}");
    println!("  {} {value}", paint(&label, Stream::Stdout, Style::new().dimmed()));
}

/// Print a success line.
pub fn success(message: &str) {
    if text_suppressed(read_config()) {
        return;
    }

    println!("  {} {message}", paint("✓", Stream::Stdout, Style::new().green()));
}

/// Print a warning line on stderr. Shown in quiet and JSON mode too.
pub fn warning(message: &str) {
    eprintln!("  {} {message}", paint("⚠", Stream::Stderr, Style::new().yellow()));
}

/// Print an error line on stderr.
pub fn error(message: &str) {
    eprintln!("  {} {message}", paint("×", Stream::Stderr, Style::new().red()));
}

/// Print a note.
pub fn note(message: &str) {
    if text_suppressed(read_config()) {
        return;
    }

    println!("  {}", paint(message, Stream::Stdout, Style::new().dimmed()));
}

/// Print a hint with a `hint:` prefix.
pub fn hint(message: &str) {
    if text_suppressed(read_config()) {
        return;
    }

    println!(
        "  {}: {}",
        paint("hint", Stream::Stdout, Style::new().cyan()),
        paint(message, Stream::Stdout, Style::new().dimmed())
    );
}

/// Print rows as a rounded table, or a note when there are none.
pub fn table<T: Tabled>(rows: Vec<T>, empty_message: &str) {
    if text_suppressed(read_config()) {
        return;
    }
    if rows.is_empty() {
        note(empty_message);
        return;
    }

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    for line in table.to_string().lines() {
        println!("  {line}");
    }
}

/// Emit a JSON value as the command's single stdout document.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

/// Format a value in cyan.
#[must_use]
pub fn highlight(value: impl Display) -> String {
    paint(&value.to_string(), Stream::Stdout, Style::new().cyan())
}
