//! Engine-agnostic console input types.
//!
//! Every host maps its native key bindings to these enums. The console core
//! never sees raw engine input.

use serde::{Deserialize, Serialize};

/// A bound console action (the host decides which keys trigger it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleAction {
    /// Show or hide the console overlay.
    Toggle,
    /// Run the current input line.
    Execute,
    /// Replace the input with the next suggestion.
    AutoComplete,
    /// Show or hide the command listing panel.
    ToggleHelp,
}

/// An input event delivered to the console.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A bound action fired.
    Action(ConsoleAction),
    /// Character typed into the input field.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
}

impl From<ConsoleAction> for InputEvent {
    fn from(action: ConsoleAction) -> Self {
        Self::Action(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_converts_to_event() {
        let e: InputEvent = ConsoleAction::Execute.into();
        assert_eq!(e, InputEvent::Action(ConsoleAction::Execute));
    }

    #[test]
    fn text_input_holds_char() {
        let e = InputEvent::TextInput('x');
        if let InputEvent::TextInput(c) = e {
            assert_eq!(c, 'x');
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn actions_are_distinct() {
        assert_ne!(ConsoleAction::Toggle, ConsoleAction::ToggleHelp);
        assert_ne!(ConsoleAction::Execute, ConsoleAction::AutoComplete);
    }

    #[test]
    fn action_names_are_snake_case() {
        #[derive(Deserialize)]
        struct Binding {
            action: ConsoleAction,
        }
        let b: Binding = toml::from_str(r#"action = "auto_complete""#).unwrap();
        assert_eq!(b.action, ConsoleAction::AutoComplete);
        let b: Binding = toml::from_str(r#"action = "toggle_help""#).unwrap();
        assert_eq!(b.action, ConsoleAction::ToggleHelp);
    }
}
