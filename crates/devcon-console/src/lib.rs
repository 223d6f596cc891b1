//! Debug console core.
//!
//! The console is a registry-based dispatch system. Each command is an
//! immutable `CommandDescriptor` produced by a `CommandProvider`; the host
//! builds the registry once at startup from an explicit provider list. The
//! `DebugConsole` owns the registry and turns input events into dispatches,
//! suggestion cycling, and timed help output.

mod console;
mod descriptor;
mod dispatch;
mod help;
mod registry;
mod suggestions;

/// Console state machine driven by host input and frame callbacks.
pub use console::DebugConsole;
/// Action invoked by a descriptor (zero-argument or argument-taking).
pub use descriptor::CommandAction;
/// Immutable command record: id, description, usage format, action.
pub use descriptor::CommandDescriptor;
/// Output produced by a command action.
pub use descriptor::CommandOutput;
/// Something that produces one command descriptor.
pub use descriptor::CommandProvider;
/// Read-only context passed to every command action.
pub use descriptor::Environment;
/// Outcome of dispatching one input line.
pub use dispatch::Dispatch;
/// Built-in `help` command provider.
pub use help::HelpCommand;
/// Timed on-screen help output buffer.
pub use help::HelpOutput;
/// Ordered collection of registered descriptors.
pub use registry::CommandRegistry;
/// Auto-complete candidates with a cycling cursor.
pub use suggestions::Suggestions;

pub use devcon_types::config::ConsoleConfig;
pub use devcon_types::error::{DevconError, Result};
pub use devcon_types::input::{ConsoleAction, InputEvent};
