//! Reporting surface for roster changes.
//!
//! The roster never prints anything itself. It pushes log lines and
//! re-render requests into a [`Reporter`], which decides how to show them.

use std::io::Write;

use roster_core::{users_older_than, Person, RosterStats};

/// Severity of a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Progress or neutral information.
    Info,
    /// A completed action.
    Success,
    /// A rejected action.
    Error,
}

impl LogLevel {
    /// Returns the lowercase level name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn ansi_color(self) -> &'static str {
        match self {
            Self::Info => "\x1b[36m",
            Self::Success => "\x1b[32m",
            Self::Error => "\x1b[31m",
        }
    }
}

/// A single reported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Severity.
    pub level: LogLevel,
    /// Human-readable text.
    pub message: String,
}

/// Snapshot of a roster as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    /// Everyone currently in the roster.
    pub people: Vec<Person>,
    /// Names of people older than the threshold.
    pub older_than: Vec<String>,
    /// Summary numbers.
    pub stats: RosterStats,
    /// Threshold the view was computed with.
    pub threshold: u32,
}

impl RosterView {
    /// Builds a view of `people` filtered at `threshold`.
    #[must_use]
    pub fn new(threshold: u32, people: &[Person]) -> Self {
        Self {
            people: people.to_vec(),
            older_than: users_older_than(threshold, people),
            stats: RosterStats::compute(threshold, people),
            threshold,
        }
    }

    /// Filtered names joined for display, or a placeholder when nobody matched.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.older_than.is_empty() {
            "Nenhum usuário encontrado".to_string()
        } else {
            self.older_than.join(", ")
        }
    }
}

/// Receives log lines and re-render requests from the roster.
pub trait Reporter {
    /// Records a log line.
    fn log(&mut self, level: LogLevel, message: &str);

    /// Displays the current roster state.
    fn render(&mut self, view: &RosterView);

    /// Discards previously logged lines.
    fn clear_log(&mut self) {}
}

const CLEAR_SEPARATOR: &str = "----------------------------------------";

/// Reporter that writes to a terminal-like sink.
///
/// Clearing the log clears the screen, or prints a separator line when
/// colours are off.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a coloured console reporter.
    pub fn new(out: W) -> Self {
        Self { out, color: true }
    }

    /// Disables ANSI colours.
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) {
        for line in lines {
            if let Err(e) = writeln!(self.out, "{line}") {
                tracing::warn!(error = %e, "Failed to write report line");
                return;
            }
        }
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "Failed to flush report output");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn log(&mut self, level: LogLevel, message: &str) {
        tracing::debug!(level = level.as_str(), text = message, "Roster log");

        let line = if self.color {
            format!("{}[{}]\x1b[0m {}", level.ansi_color(), level.as_str(), message)
        } else {
            format!("[{}] {}", level.as_str(), message)
        };
        self.write_lines(&[line]);
    }

    fn render(&mut self, view: &RosterView) {
        let people = serde_json::to_string_pretty(&view.people).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to serialize roster");
            String::from("[]")
        });
        let filtered =
            serde_json::to_string(&view.older_than).unwrap_or_else(|_| String::from("[]"));

        let mut lines = vec![String::from("Usuários:")];
        lines.extend(people.lines().map(|l| format!("  {l}")));
        lines.push(format!("Filtrados (idade > {}): {}", view.threshold, filtered));
        lines.push(format!("Resultado: {}", view.summary()));
        lines.push(format!(
            "Total: {} | Acima de {}: {} | Idade média: {} | Percentual: {}%",
            view.stats.total,
            view.threshold,
            view.stats.older_than,
            view.stats.average_age,
            view.stats.percentage
        ));
        self.write_lines(&lines);
    }

    fn clear_log(&mut self) {
        if self.color {
            // Clear screen, cursor home.
            self.write_lines(&[String::from("\x1b[2J\x1b[H")]);
        } else {
            self.write_lines(&[CLEAR_SEPARATOR.to_string()]);
        }
    }
}

/// Reporter that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Vec<LogEntry>,
    last_view: Option<RosterView>,
    renders: usize,
}

impl MemoryReporter {
    /// Creates an empty memory reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the logged lines, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns the logged messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Returns the most recently rendered view.
    #[must_use]
    pub fn last_view(&self) -> Option<&RosterView> {
        self.last_view.as_ref()
    }

    /// Returns how many times a render was requested.
    #[must_use]
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Reporter for MemoryReporter {
    fn log(&mut self, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            level,
            message: message.to_string(),
        });
    }

    fn render(&mut self, view: &RosterView) {
        self.last_view = Some(view.clone());
        self.renders += 1;
    }

    fn clear_log(&mut self) {
        self.entries.clear();
    }
}
