//! DEVCON terminal host.
//!
//! Drives the debug console the way a game engine would: one stdin line per
//! frame of input, a per-frame `update` with the elapsed time, and a text
//! rendering of the overlay after every frame.
//! Type `:toggle` to show the console, `:tab` to auto-complete, `:quit` to exit.

mod commands;
mod input;
mod panic_log;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use devcon_console::{CommandRegistry, DebugConsole, Dispatch};
use devcon_types::config::DevconConfig;

use commands::SharedWorld;
use input::HostInput;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    panic_log::install();

    // Resolve config from CLI arg, DEVCON_CONFIG env var, or defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DEVCON_CONFIG").ok())
        .map(PathBuf::from);
    let config = match config_path {
        Some(path) => DevconConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DevconConfig::default(),
    };

    let world = SharedWorld::default();
    let registry = CommandRegistry::from_providers(commands::providers(&world));
    log::info!("Starting DEVCON with {} commands", registry.len());

    let mut console =
        DebugConsole::new(registry, config.console.clone()).context("creating console")?;
    let started = Instant::now();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "DEVCON -- ':toggle' shows the console, ':quit' exits")?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let now = started.elapsed().as_secs_f32();
        console.update(now);

        let events = match input::translate(&line, &config) {
            HostInput::Quit => break,
            HostInput::Events(events) => events,
        };
        for event in &events {
            if let Some(Dispatch::Unmatched) = console.handle_input(event) {
                log::debug!("Input discarded");
            }
        }
        // The text overlay always draws the caret after the input, so the
        // flag only needs clearing here.
        console.take_caret_to_end();

        write!(stdout, "{}", render::draw(&console))?;
        stdout.flush()?;
    }

    log::info!("DEVCON shut down cleanly");
    Ok(())
}
