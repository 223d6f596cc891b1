//! Built-in `help` command and timed help display.

use crate::descriptor::{CommandDescriptor, CommandOutput, CommandProvider, Environment};

/// Header line of the `help` output.
pub const HELP_HEADER: &str = "Available Commands:";

/// Provider for the built-in `help` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelpCommand;

impl CommandProvider for HelpCommand {
    fn command(&self) -> CommandDescriptor {
        CommandDescriptor::plain("help", "Displays available commands", "help", |env| {
            Ok(CommandOutput::Help(help_lines(env)))
        })
    }
}

fn help_lines(env: &Environment<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(env.registry.len() + 1);
    lines.push(HELP_HEADER.to_string());
    for cmd in env.registry.descriptors() {
        lines.push(format!("- {} : {}", cmd.format(), cmd.description()));
    }
    lines
}

/// Help lines shown for a fixed duration, then cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct HelpOutput {
    lines: Vec<String>,
    shown_at: Option<f32>,
    duration: f32,
}

impl HelpOutput {
    /// Create an empty buffer whose lines last `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            lines: Vec::new(),
            shown_at: None,
            duration,
        }
    }

    /// Replace the displayed lines and restart the timer.
    pub fn show(&mut self, lines: Vec<String>, now: f32) {
        self.lines = lines;
        self.shown_at = Some(now);
    }

    /// Per-frame tick. Clears the lines once `duration` has passed.
    pub fn update(&mut self, now: f32) {
        if let Some(shown_at) = self.shown_at
            && now - shown_at > self.duration
        {
            self.clear();
        }
    }

    /// Hide the lines immediately.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.shown_at = None;
    }

    /// Lines currently on screen.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True while help lines are on screen.
    pub fn is_visible(&self) -> bool {
        !self.lines.is_empty()
    }
}
