//! Timed demo sequences.
//!
//! Each step waits a fixed delay after the previous one, so the order of
//! reported lines is always the same.

use std::time::Duration;

use crate::reporter::{LogLevel, Reporter};
use crate::roster::Roster;

/// Delays between the steps of the demo sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Wait before announcing how many people will be processed.
    pub announce: Duration,
    /// Wait before reporting the filter result.
    pub process: Duration,
    /// Wait before the closing line and the render.
    pub conclude: Duration,
    /// Wait between narrated type errors.
    pub narrate: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            announce: Duration::from_millis(300),
            process: Duration::from_millis(800),
            conclude: Duration::from_millis(500),
            narrate: Duration::from_millis(500),
        }
    }
}

impl Pacing {
    /// Pacing with no delays at all.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            announce: Duration::ZERO,
            process: Duration::ZERO,
            conclude: Duration::ZERO,
            narrate: Duration::ZERO,
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Walks through filtering the roster, then renders it.
pub async fn run_demo<R: Reporter + ?Sized>(roster: &Roster, reporter: &mut R, pacing: &Pacing) {
    reporter.log(LogLevel::Info, "Executando demonstração...");

    pause(pacing.announce).await;
    reporter.log(
        LogLevel::Info,
        &format!("Processando {} usuários...", roster.people().len()),
    );

    pause(pacing.process).await;
    let view = roster.view();
    let names = if view.older_than.is_empty() {
        "Nenhum".to_string()
    } else {
        view.older_than.join(", ")
    };
    reporter.log(
        LogLevel::Success,
        &format!(
            "Encontrados {} usuários com mais de {} anos: {}",
            view.older_than.len(),
            view.threshold,
            names
        ),
    );

    pause(pacing.conclude).await;
    reporter.log(LogLevel::Success, "Demonstração concluída!");
    reporter.render(&view);
}

/// Narrates the inputs a statically typed filter would reject.
pub async fn show_type_errors<R: Reporter + ?Sized>(reporter: &mut R, pacing: &Pacing) {
    reporter.log(LogLevel::Error, "Demonstração de erros de tipo:");

    pause(pacing.narrate).await;
    reporter.log(
        LogLevel::Error,
        "getUsersOver23(\"não é um array\") - TypeError!",
    );

    pause(pacing.narrate).await;
    reporter.log(
        LogLevel::Error,
        "getUsersOver23([{id: \"string\", name: \"Test\", age: 25}]) - TypeError!",
    );

    pause(pacing.narrate).await;
    reporter.log(
        LogLevel::Info,
        "TypeScript previne esses erros em tempo de compilação!",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::MemoryReporter;

    #[tokio::test]
    async fn test_run_demo_sequence() {
        let roster = Roster::seeded();
        let mut reporter = MemoryReporter::new();

        run_demo(&roster, &mut reporter, &Pacing::instant()).await;

        assert_eq!(
            reporter.messages(),
            vec![
                "Executando demonstração...",
                "Processando 3 usuários...",
                "Encontrados 2 usuários com mais de 23 anos: Ana, Pedro",
                "Demonstração concluída!",
            ]
        );
        let levels: Vec<LogLevel> = reporter.entries().iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Info,
                LogLevel::Info,
                LogLevel::Success,
                LogLevel::Success
            ]
        );
        assert_eq!(reporter.renders(), 1);
    }

    #[tokio::test]
    async fn test_run_demo_empty_roster() {
        let roster = Roster::new();
        let mut reporter = MemoryReporter::new();

        run_demo(&roster, &mut reporter, &Pacing::instant()).await;

        assert_eq!(
            reporter.messages()[2],
            "Encontrados 0 usuários com mais de 23 anos: Nenhum"
        );
    }

    #[tokio::test]
    async fn test_run_demo_respects_pacing() {
        let roster = Roster::seeded();
        let mut reporter = MemoryReporter::new();
        let pacing = Pacing {
            announce: Duration::from_millis(5),
            process: Duration::from_millis(5),
            conclude: Duration::from_millis(5),
            narrate: Duration::ZERO,
        };

        let start = std::time::Instant::now();
        run_demo(&roster, &mut reporter, &pacing).await;
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[tokio::test]
    async fn test_show_type_errors_sequence() {
        let mut reporter = MemoryReporter::new();

        show_type_errors(&mut reporter, &Pacing::instant()).await;

        assert_eq!(
            reporter.messages(),
            vec![
                "Demonstração de erros de tipo:",
                "getUsersOver23(\"não é um array\") - TypeError!",
                "getUsersOver23([{id: \"string\", name: \"Test\", age: 25}]) - TypeError!",
                "TypeScript previne esses erros em tempo de compilação!",
            ]
        );
        let levels: Vec<LogLevel> = reporter.entries().iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![LogLevel::Error, LogLevel::Error, LogLevel::Error, LogLevel::Info]
        );
        assert_eq!(reporter.renders(), 0);
    }

    #[test]
    fn test_default_pacing() {
        let pacing = Pacing::default();
        assert_eq!(pacing.announce, Duration::from_millis(300));
        assert_eq!(pacing.process, Duration::from_millis(800));
        assert_eq!(pacing.conclude, Duration::from_millis(500));
    }
}
