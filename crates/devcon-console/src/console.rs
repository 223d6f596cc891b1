//! Console state machine.
//!
//! Two independent visual flags (overlay shown, help panel shown), an input
//! buffer, the suggestion cursor, and the timed help output. The host feeds
//! it input events and a per-frame `update`, and reads the accessors back
//! when drawing.

use std::collections::VecDeque;

use devcon_types::config::ConsoleConfig;
use devcon_types::error::Result;
use devcon_types::input::{ConsoleAction, InputEvent};

use crate::descriptor::CommandOutput;
use crate::dispatch::Dispatch;
use crate::help::HelpOutput;
use crate::registry::CommandRegistry;
use crate::suggestions::Suggestions;

/// The debug console as seen by a host engine.
#[derive(Debug)]
pub struct DebugConsole {
    config: ConsoleConfig,
    registry: CommandRegistry,
    suggestions: Suggestions,
    help_output: HelpOutput,
    output_log: VecDeque<String>,
    input: String,
    visible: bool,
    help_panel: bool,
    caret_to_end: bool,
    now: f32,
}

impl DebugConsole {
    /// Create a console over `registry`. Fails if `config` is out of range.
    pub fn new(registry: CommandRegistry, config: ConsoleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            help_output: HelpOutput::new(config.help_display_secs),
            visible: config.start_visible,
            help_panel: config.start_with_help_panel,
            config,
            registry,
            suggestions: Suggestions::new(),
            output_log: VecDeque::new(),
            input: String::new(),
            caret_to_end: false,
            now: 0.0,
        })
    }

    /// Route one input event. Returns the dispatch result when the event
    /// executed the input line.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<Dispatch> {
        match event {
            InputEvent::Action(action) => return self.handle_action(*action),
            InputEvent::TextInput(ch) => {
                if self.visible {
                    self.input.push(*ch);
                    self.refresh_suggestions();
                }
            },
            InputEvent::Backspace => {
                if self.visible && self.input.pop().is_some() {
                    self.refresh_suggestions();
                }
            },
        }
        None
    }

    /// Apply a bound action.
    pub fn handle_action(&mut self, action: ConsoleAction) -> Option<Dispatch> {
        match action {
            ConsoleAction::Toggle => {
                self.visible = !self.visible;
                log::debug!("Console {}", if self.visible { "shown" } else { "hidden" });
            },
            ConsoleAction::ToggleHelp => self.help_panel = !self.help_panel,
            ConsoleAction::Execute => return self.execute(),
            ConsoleAction::AutoComplete => self.autocomplete(),
        }
        None
    }

    /// Replace the input buffer (for hosts whose text widget owns editing).
    pub fn set_input(&mut self, text: &str) {
        if self.input != text {
            self.input.clear();
            self.input.push_str(text);
            self.refresh_suggestions();
        }
    }

    /// Per-frame callback. `now` is host time in seconds.
    pub fn update(&mut self, now: f32) {
        self.now = now;
        self.help_output.update(now);
    }

    /// Run the current input line. Ignored while the console is hidden.
    fn execute(&mut self) -> Option<Dispatch> {
        if !self.visible {
            return None;
        }
        let line = std::mem::take(&mut self.input);
        self.suggestions.clear();

        let result = self.registry.dispatch(&line, self.now);
        match &result {
            Dispatch::Executed { output, .. } => match output {
                CommandOutput::Text(text) => {
                    for l in text.lines() {
                        self.push_output(l.to_string());
                    }
                },
                CommandOutput::Help(lines) => self.help_output.show(lines.clone(), self.now),
                CommandOutput::None => {},
            },
            Dispatch::Failed { id, message } => {
                self.push_output(format!("{id}: {message}"));
            },
            Dispatch::Unmatched => {},
        }
        Some(result)
    }

    fn autocomplete(&mut self) {
        if let Some(candidate) = self.suggestions.next() {
            self.input.clear();
            self.input.push_str(candidate);
            self.caret_to_end = true;
        }
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions.refresh(&self.registry, &self.input);
    }

    fn push_output(&mut self, line: String) {
        self.output_log.push_back(line);
        while self.output_log.len() > self.config.max_output_lines {
            self.output_log.pop_front();
        }
    }

    // -- Presentation accessors --

    /// Whether the overlay is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the command listing panel is shown.
    pub fn is_help_panel_visible(&self) -> bool {
        self.help_panel
    }

    /// Current contents of the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Auto-complete candidates for the current input.
    pub fn suggestions(&self) -> &Suggestions {
        &self.suggestions
    }

    /// Timed help output lines (empty once expired).
    pub fn help_lines(&self) -> &[String] {
        self.help_output.lines()
    }

    /// Logged command output, oldest first.
    pub fn output_log(&self) -> impl Iterator<Item = &str> {
        self.output_log.iter().map(String::as_str)
    }

    /// The registry commands are dispatched from.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The validated configuration the console was built with.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// One-shot: true once after auto-complete replaced the input, so the
    /// text widget can move its caret to the end.
    pub fn take_caret_to_end(&mut self) -> bool {
        std::mem::take(&mut self.caret_to_end)
    }
}
