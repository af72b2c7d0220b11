//! PokeMMO Encounter Counter CLI
//!
//! Headless counter fed by an external watcher: every stdin line is the text
//! the watcher detected, e.g. `Pikachu` or `Shiny Zubat`.

use clap::{Parser, ValueEnum};
use std::io::BufRead;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use encounter_counter::{select_notifier, CounterView, Encounter, EncounterCounter, NotifierMode};

#[derive(Parser)]
#[command(name = "ecount")]
#[command(about = "Count PokeMMO encounters from detected text on stdin")]
#[command(version)]
struct Cli {
    /// Reset the count to zero whenever a shiny is recorded
    #[arg(short, long)]
    auto_reset: bool,

    /// Desktop notifications
    #[arg(short, long, value_enum, default_value = "auto")]
    notify: Notify,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Notify {
    /// Use desktop notifications when a notification service is running
    Auto,
    /// Always try desktop notifications
    Desktop,
    /// No notifications
    Off,
}

impl From<Notify> for NotifierMode {
    fn from(notify: Notify) -> Self {
        match notify {
            Notify::Auto => NotifierMode::Auto,
            Notify::Desktop => NotifierMode::Desktop,
            Notify::Off => NotifierMode::Disabled,
        }
    }
}

/// Prints label changes to stdout
struct ConsoleView {
    auto_reset: bool,
}

impl CounterView for ConsoleView {
    fn set_count_text(&mut self, text: &str) {
        println!("[{}] {}", chrono::Local::now().format("%H:%M:%S"), text);
    }

    fn set_shiny_text(&mut self, text: &str) {
        println!("[{}] {}", chrono::Local::now().format("%H:%M:%S"), text);
    }

    fn auto_reset(&self) -> bool {
        self.auto_reset
    }
}

/// Pretty duration formatter
struct PrettyDur(chrono::Duration);

impl std::fmt::Display for PrettyDur {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.num_hours() > 0 {
            write!(f, "{} hours, ", self.0.num_hours())?;
        }
        if self.0.num_minutes() % 60 > 0 {
            write!(f, "{} minutes, ", self.0.num_minutes() % 60)?;
        }
        write!(f, "{} seconds", self.0.num_seconds() % 60)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let view = ConsoleView {
        auto_reset: cli.auto_reset,
    };
    let mut counter = EncounterCounter::new(view, select_notifier(cli.notify.into()));

    eprintln!("=== PokeMMO Encounter Counter ===");
    eprintln!("Auto reset on shiny: {}", if cli.auto_reset { "on" } else { "off" });
    eprintln!("Notifications: {}", counter.notifier_name());
    eprintln!();

    let start_time = Instant::now();
    let mut recorded = 0u64;

    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: failed to read stdin: {}", e);
                std::process::exit(1);
            }
        };

        let Some(encounter) = Encounter::from_detected_text(&line) else {
            continue;
        };
        counter.record_encounter(&encounter);
        recorded += 1;
    }

    let elapsed = chrono::Duration::from_std(start_time.elapsed())
        .unwrap_or(chrono::Duration::zero());
    let state = counter.state();

    eprintln!();
    eprintln!("=== Session ===");
    eprintln!("Recorded: {} encounters in {}", recorded, PrettyDur(elapsed));
    eprintln!("Current count: {}", state.encounters());
    eprintln!("Latest shiny: {}", state.latest_shiny().unwrap_or("None"));
}
