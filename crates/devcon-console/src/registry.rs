//! Ordered command registry.

use devcon_types::error::{DevconError, Result};

use crate::descriptor::{CommandDescriptor, CommandProvider};

/// Registry of available commands, in registration order.
///
/// Built once at startup. There is no removal API; lookups and dispatch
/// only ever read it.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an explicit provider list, in list order.
    ///
    /// Descriptors the registry refuses (duplicate or malformed ids) are
    /// logged and skipped, so the first provider of an id wins.
    pub fn from_providers<I>(providers: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<dyn CommandProvider>,
    {
        let mut reg = Self::new();
        for provider in providers {
            let descriptor = provider.as_ref().command();
            let id = descriptor.id().to_string();
            if let Err(e) = reg.register(descriptor) {
                log::warn!("Skipping command '{id}': {e}");
            }
        }
        log::debug!("Registered {} commands", reg.len());
        reg
    }

    /// Register a command.
    ///
    /// Identifiers must be non-empty, contain no whitespace, and be unique
    /// ignoring case.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<()> {
        let id = descriptor.id();
        if id.is_empty() {
            return Err(DevconError::InvalidCommand(
                "empty identifier".to_string(),
            ));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(DevconError::InvalidCommand(format!(
                "identifier contains whitespace: '{id}'"
            )));
        }
        if self.get(id).is_some() {
            return Err(DevconError::DuplicateCommand(id.to_string()));
        }
        self.commands.push(descriptor);
        Ok(())
    }

    /// All descriptors, in registration order.
    pub fn descriptors(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when no command has been registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Exact lookup, ignoring case.
    pub fn get(&self, id: &str) -> Option<&CommandDescriptor> {
        let lower = id.to_lowercase();
        self.commands.iter().find(|c| c.id().to_lowercase() == lower)
    }

    /// Resolve the command an input line refers to.
    ///
    /// A descriptor whose id equals the first token wins; otherwise the
    /// first descriptor whose id is a case-insensitive prefix of the line.
    pub fn find_match(&self, input: &str) -> Option<&CommandDescriptor> {
        let line = input.trim_start();
        let first = line.split_whitespace().next()?;
        self.get(first)
            .or_else(|| self.commands.iter().find(|c| c.matches_input(line)))
    }

    /// Ids that start with `partial` ignoring case, in registration order.
    ///
    /// Empty input has no completions.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let partial = partial.trim_start();
        if partial.is_empty() {
            return Vec::new();
        }
        self.commands
            .iter()
            .filter(|c| crate::descriptor::starts_with_ignore_case(c.id(), partial))
            .map(|c| c.id().to_string())
            .collect()
    }

    /// Help-panel rows: `"<format> - <description>"`, in registration order.
    pub fn listing(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|c| format!("{} - {}", c.format(), c.description()))
            .collect()
    }
}
