//! Maps terminal lines to console input events.
//!
//! Each stdin line stands in for one frame of engine input:
//!
//! - a bound token (see `[bindings]`, e.g. `:toggle`, `:tab`) fires its action;
//! - `:type <text>` types characters without executing;
//! - `:back` deletes one character;
//! - `:quit` exits;
//! - anything else is typed and then executed.

use devcon_types::config::DevconConfig;
use devcon_types::input::{ConsoleAction, InputEvent};

/// Result of translating a single terminal line.
#[derive(Debug, Clone, PartialEq)]
pub enum HostInput {
    Events(Vec<InputEvent>),
    Quit,
}

pub fn translate(line: &str, config: &DevconConfig) -> HostInput {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim() == ":quit" {
        return HostInput::Quit;
    }
    if let Some(action) = config.action_for(trimmed.trim()) {
        return HostInput::Events(vec![InputEvent::Action(action)]);
    }
    if trimmed.trim() == ":back" {
        return HostInput::Events(vec![InputEvent::Backspace]);
    }
    if let Some(text) = trimmed.strip_prefix(":type ") {
        return HostInput::Events(text.chars().map(InputEvent::TextInput).collect());
    }

    let mut events: Vec<InputEvent> = trimmed.chars().map(InputEvent::TextInput).collect();
    events.push(InputEvent::Action(ConsoleAction::Execute));
    HostInput::Events(events)
}
