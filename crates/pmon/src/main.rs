//! pmon - Pomodoro interval timer
//!
//! Usage:
//!   pmon                        25/5 minute rotation, long break every 4 cycles
//!   pmon -w 50 -s 10 -l 30      Custom durations (minutes)
//!   pmon -c 3                   Long break after every 3 work sessions
//!   pmon -o /tmp/pomo           Write progress to a file instead of the terminal

use anyhow::{Context, Result};
use clap::Parser;
use pmon_core::{Config, Paths};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pmon::render::{LogFileRenderer, Render, TerminalRenderer};
use pmon::{signals, Engine, PauseFlag, RunState, Summary, TimerConfig};

/// pmon - Pomodoro interval timer
#[derive(Parser, Debug)]
#[command(name = "pmon")]
#[command(about = "Pomodoro timer cycling work, short break and long break phases")]
#[command(version)]
#[command(after_help = r#"CONTROLS:
    Enter           Pause / resume (interactive terminal only)
    kill -USR1 PID  Pause / resume from elsewhere
    Ctrl-C          Stop and print time worked and time on break

CONFIG:
    Defaults are read from ~/.config/pmon/config.json when present:
    {"cycles": 4, "work_minutes": 25, "short_break_minutes": 5,
     "long_break_minutes": 30, "output": "/tmp/pomo"}
    Command line flags take precedence.

EXAMPLES:
    pmon                    # 25 min work, 5 min breaks, 30 min every 4th
    pmon -w 50 -s 10        # Longer sessions
    pmon -o /tmp/pomo       # Status bar friendly output file
"#)]
struct Cli {
    /// Number of work sessions before a long break (default: 4)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    cycles: Option<u32>,

    /// Minutes per work session (default: 25)
    #[arg(short, long, value_name = "MINS", value_parser = clap::value_parser!(u64).range(1..))]
    work: Option<u64>,

    /// Minutes per short break (default: 5)
    #[arg(short, long, value_name = "MINS", value_parser = clap::value_parser!(u64).range(1..))]
    short_break: Option<u64>,

    /// Minutes per long break (default: 30)
    #[arg(short, long, value_name = "MINS", value_parser = clap::value_parser!(u64).range(1..))]
    long_break: Option<u64>,

    /// Write progress to this file instead of the terminal
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file to read defaults from
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Layer command line flags over the config file
    fn merge(self, file: Config) -> Config {
        Config {
            cycles: self.cycles.unwrap_or(file.cycles),
            work_minutes: self.work.unwrap_or(file.work_minutes),
            short_break_minutes: self.short_break.unwrap_or(file.short_break_minutes),
            long_break_minutes: self.long_break.unwrap_or(file.long_break_minutes),
            output: self.output.or(file.output),
        }
    }
}

fn timer_config(config: &Config) -> Result<TimerConfig> {
    TimerConfig::from_minutes(
        config.cycles,
        config.work_minutes,
        config.short_break_minutes,
        config.long_break_minutes,
    )
    .context("Invalid timer settings")
}

fn renderer(config: &Config) -> Result<Box<dyn Render>> {
    match &config.output {
        Some(path) => {
            let log = LogFileRenderer::create(path)
                .with_context(|| format!("Failed to open output file: {}", path.display()))?;
            Ok(Box::new(log))
        }
        None => Ok(Box::new(TerminalRenderer::stdout())),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout carries the countdown)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut cli = Cli::parse();

    let config_path = cli
        .config
        .take()
        .unwrap_or_else(|| Paths::new().config_file());
    let file = Config::load(&config_path)?;
    let config = cli.merge(file);
    let timer = timer_config(&config)?;

    let mut shutdown = signals::Shutdown::register().context("Failed to install signal handlers")?;
    let pause = PauseFlag::new();
    signals::listen_for_pause(pause.clone()).context("Failed to install pause handler")?;

    let mut engine = Engine::new(timer, pause, renderer(&config)?);
    let mut state = RunState::new();

    let outcome = tokio::select! {
        result = engine.run(&mut state) => result,
        name = shutdown.recv() => {
            info!(signal = name, "Stopping");
            Ok(())
        }
    };

    let summary = Summary::from_state(&state);
    engine.finish(&summary).context("Failed to write summary")?;

    outcome.context("Timer stopped")
}
