//! CLI command implementations.

use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use roster_core::{users_older_than, Person};
use roster_demo::{run_demo, show_type_errors, ConsoleReporter, Pacing, Reporter, Roster};
use roster_server::{Server, ServerConfig};

/// Start the user listing server.
pub async fn serve(host: String, port: u16, cors: bool) -> Result<()> {
    tracing::info!(host = %host, port, "Starting Roster server...");

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .wrap_err_with(|| format!("Invalid listen address {}:{}", host, port))?;
    let config = ServerConfig::builder().addr(addr).cors(cors).build();

    Server::new(config).run().await?;

    Ok(())
}

/// Print the names of people older than `threshold` as a JSON array.
pub fn filter(file: Option<&Path>, threshold: u32) -> Result<()> {
    let people = match file {
        Some(path) => load_people(path)?,
        None => Roster::seeded().people().to_vec(),
    };

    let names = users_older_than(threshold, &people);
    tracing::debug!(total = people.len(), matched = names.len(), threshold, "Filtered people");

    println!("{}", serde_json::to_string_pretty(&names)?);
    Ok(())
}

fn load_people(path: &Path) -> Result<Vec<Person>> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let people = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("{} is not a JSON array of {{id, name, age}}", path.display()))?;
    Ok(people)
}

/// Outcome of one interactive demo command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// Leave the session.
    Quit,
}

/// State of one interactive demo session.
pub struct DemoSession<R: Reporter> {
    roster: Roster,
    reporter: R,
    rng: fastrand::Rng,
    pacing: Pacing,
}

impl<R: Reporter> DemoSession<R> {
    /// Creates a session over a seeded roster.
    pub fn new(roster: Roster, reporter: R, rng: fastrand::Rng, pacing: Pacing) -> Self {
        Self {
            roster,
            reporter,
            rng,
            pacing,
        }
    }

    /// Renders the current roster.
    pub fn show(&mut self) {
        self.reporter.render(&self.roster.view());
    }

    /// Executes one command line.
    pub async fn execute(&mut self, line: &str) -> Flow {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Flow::Continue;
        };
        let args: Vec<&str> = parts.collect();

        match command.to_ascii_lowercase().as_str() {
            "run" => run_demo(&self.roster, &mut self.reporter, &self.pacing).await,
            "add" => {
                // Last token is the age; everything before it is the name.
                let (name, age) = match args.split_last() {
                    Some((age, name)) if !name.is_empty() => (name.join(" "), *age),
                    _ => (args.join(" "), ""),
                };
                if let Err(e) = self
                    .roster
                    .add_user_from_input(&name, age, &mut self.reporter)
                {
                    tracing::debug!(error = %e, "add command rejected");
                }
            }
            "random" => {
                if let Err(e) = self.roster.add_random_user(&mut self.rng, &mut self.reporter) {
                    tracing::warn!(error = %e, "random command rejected");
                }
            }
            "clear" => self.roster.clear_users(&mut self.reporter),
            "errors" => show_type_errors(&mut self.reporter, &self.pacing).await,
            "show" => self.show(),
            "help" => print_demo_help(),
            "quit" | "exit" => return Flow::Quit,
            other => {
                println!("Unknown command: {} (type 'help')", other);
            }
        }

        Flow::Continue
    }
}

fn print_demo_help() {
    println!("Commands:");
    println!("  run               Run the filter walkthrough");
    println!("  add <name> <age>  Add a person (age 0-120)");
    println!("  random            Add a random person");
    println!("  clear             Remove everyone and reset ids");
    println!("  errors            Show the type-error narration");
    println!("  show              Print the current roster");
    println!("  quit              Leave the demo");
}

/// Start an interactive age-filter demo.
pub async fn demo(threshold: u32, seed: Option<u64>) -> Result<()> {
    let rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let roster = Roster::seeded().with_threshold(threshold);
    let mut session = DemoSession::new(
        roster,
        ConsoleReporter::new(io::stdout()),
        rng,
        Pacing::default(),
    );

    println!("Roster Age Filter Demo");
    println!("======================");
    println!("Threshold: {}", threshold);
    println!("\nType 'help' for commands, 'quit' to leave.\n");

    session.show();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\x1b[32mroster>\x1b[0m ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        if session.execute(line?.trim()).await == Flow::Quit {
            println!("\nGoodbye!");
            break;
        }
    }

    Ok(())
}

/// Print version information.
pub fn version() {
    println!("Roster {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Components:");
    println!("  roster-server     - User listing service");
    println!("  roster-demo       - Age filter demo");
    println!("  roster-core       - Shared types and filter");
    println!("  roster-telemetry  - Logging");
}
