//! Command dictionary and handler abstraction.
//!
//! A [`Registry`] is a borrowed view over a dictionary owned by the
//! application, usually a `const` array living in flash. Lookup is a linear
//! scan in registration order, which is plenty for the few dozen commands a
//! serial console exposes.
//!
//! ```rust
//! use serialcmd::command::{Args, Command, CommandResult, Registry};
//!
//! fn status(_: &Args<'_>) -> CommandResult {
//!     Ok(())
//! }
//!
//! fn reset(_: &Args<'_>) -> CommandResult {
//!     Ok(())
//! }
//!
//! const COMMANDS: &[Command<'static>] = &[
//!     Command::new("status", &status),
//!     Command::new("reset", &reset),
//! ];
//!
//! let registry = Registry::new(COMMANDS);
//! assert!(registry.lookup("reset").is_some());
//! assert!(registry.lookup("RESET").is_none());
//! ```

use core::fmt;

use super::args::Args;
use super::error::CommandResult;

/// Name of the built-in command that lists the dictionary.
///
/// The dispatcher intercepts it before any lookup, so a dictionary entry with
/// this name is never reached through [`Dispatcher::run`](super::Dispatcher::run).
pub const HELP_COMMAND: &str = "help";

/// Something that can execute a command.
///
/// Implemented for every `Fn(&Args<'_>) -> CommandResult`, so plain functions
/// and closures can be registered directly. Handlers validate their own
/// arguments and report [`TooFewArgs`](super::Error::TooFewArgs),
/// [`TooManyArgs`](super::Error::TooManyArgs) or
/// [`InvalidArg`](super::Error::InvalidArg) as appropriate. Handlers that need
/// to mutate state use interior mutability.
pub trait Handler {
    /// Execute the command with the parsed arguments.
    fn invoke(&self, args: &Args<'_>) -> CommandResult;
}

impl<F> Handler for F
where
    F: Fn(&Args<'_>) -> CommandResult,
{
    fn invoke(&self, args: &Args<'_>) -> CommandResult {
        self(args)
    }
}

/// A dictionary entry binding a name to its handler.
#[derive(Clone, Copy)]
pub struct Command<'a> {
    /// The command name, matched exactly and case-sensitively.
    pub name: &'a str,
    /// The handler invoked when the name matches.
    pub handler: &'a dyn Handler,
}

impl<'a> Command<'a> {
    /// Bind `name` to `handler`.
    pub const fn new(name: &'a str, handler: &'a dyn Handler) -> Self {
        Self { name, handler }
    }

    /// Invoke the handler.
    pub fn invoke(&self, args: &Args<'_>) -> CommandResult {
        self.handler.invoke(args)
    }
}

impl fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Ordered, read-only view over a command dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry<'a> {
    commands: &'a [Command<'a>],
}

impl<'a> Registry<'a> {
    /// View over `commands`, consulted in order.
    pub const fn new(commands: &'a [Command<'a>]) -> Self {
        Self { commands }
    }

    /// A registry without any command.
    pub const fn empty() -> Self {
        Self { commands: &[] }
    }

    /// Replace the whole dictionary.
    pub fn install(&mut self, commands: &'a [Command<'a>]) {
        self.commands = commands;
    }

    /// First command whose name equals `name` exactly.
    pub fn lookup(&self, name: &str) -> Option<&'a Command<'a>> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Registered names, in dictionary order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.commands.iter().map(|command| command.name)
    }

    /// Registered commands, in dictionary order.
    pub fn iter(&self) -> core::slice::Iter<'a, Command<'a>> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
