//! Command descriptors and the provider trait.

use std::fmt;

use devcon_types::error::Result;

use crate::registry::CommandRegistry;

/// Output produced by a command action.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Command produced no visible output.
    None,
    /// Plain text lines, appended to the console output log.
    Text(String),
    /// Lines for timed on-screen help display.
    Help(Vec<String>),
}

/// Read-only context passed to every command action.
pub struct Environment<'a> {
    /// The registry the command was dispatched from.
    pub registry: &'a CommandRegistry,
    /// Host time in seconds at dispatch.
    pub now: f32,
}

type PlainFn = dyn Fn(&Environment<'_>) -> Result<CommandOutput>;
type ArgsFn = dyn Fn(&[&str], &Environment<'_>) -> Result<CommandOutput>;

/// The callable part of a descriptor.
pub enum CommandAction {
    /// Ignores everything typed after the identifier.
    Plain(Box<PlainFn>),
    /// Receives every whitespace-separated token after the identifier.
    WithArgs(Box<ArgsFn>),
}

impl fmt::Debug for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => f.write_str("Plain(..)"),
            Self::WithArgs(_) => f.write_str("WithArgs(..)"),
        }
    }
}

/// One registered command. Immutable once constructed.
#[derive(Debug)]
pub struct CommandDescriptor {
    id: String,
    description: String,
    format: String,
    action: CommandAction,
}

impl CommandDescriptor {
    /// Create a descriptor from an already-built action.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        format: impl Into<String>,
        action: CommandAction,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            format: format.into(),
            action,
        }
    }

    /// Create a command that takes no arguments.
    pub fn plain<F>(
        id: impl Into<String>,
        description: impl Into<String>,
        format: impl Into<String>,
        action: F,
    ) -> Self
    where
        F: Fn(&Environment<'_>) -> Result<CommandOutput> + 'static,
    {
        Self::new(id, description, format, CommandAction::Plain(Box::new(action)))
    }

    /// Create a command that receives its arguments as strings.
    pub fn with_args<F>(
        id: impl Into<String>,
        description: impl Into<String>,
        format: impl Into<String>,
        action: F,
    ) -> Self
    where
        F: Fn(&[&str], &Environment<'_>) -> Result<CommandOutput> + 'static,
    {
        Self::new(
            id,
            description,
            format,
            CommandAction::WithArgs(Box::new(action)),
        )
    }

    /// The identifier (what the user types).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// One-line description for `help`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Usage string (e.g. "spawn <count> <kind>").
    pub fn format(&self) -> &str {
        &self.format
    }

    /// True for `CommandAction::WithArgs` actions.
    pub fn takes_args(&self) -> bool {
        matches!(self.action, CommandAction::WithArgs(_))
    }

    /// True when the identifier is a case-insensitive prefix of `input`.
    pub fn matches_input(&self, input: &str) -> bool {
        starts_with_ignore_case(input, &self.id)
    }

    /// Run the action. Plain actions never see `args`.
    pub fn invoke(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        match &self.action {
            CommandAction::Plain(f) => f(env),
            CommandAction::WithArgs(f) => f(args, env),
        }
    }
}

/// Something that produces one command descriptor.
///
/// Hosts list their providers explicitly and hand them to
/// `CommandRegistry::from_providers` at startup.
pub trait CommandProvider {
    fn command(&self) -> CommandDescriptor;
}

/// Unicode-aware case-insensitive `starts_with`.
pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.to_lowercase().starts_with(&prefix.to_lowercase())
}
