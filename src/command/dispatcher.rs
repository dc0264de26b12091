//! Polling dispatcher tying a line source to the parser and the registry.
//!
//! [`Dispatcher::run`] is meant to be called from the main loop of the
//! firmware. Each call is one independent transaction: it either returns
//! immediately because nothing is pending, answers the built-in `help`, or
//! reads one line and dispatches it. Nothing is carried over between calls.
//!
//! ```rust
//! use serialcmd::command::{Args, Command, CommandResult, Dispatcher, Registry};
//! use serialcmd::transport::BufferedTransport;
//!
//! fn ping(_: &Args<'_>) -> CommandResult {
//!     Ok(())
//! }
//!
//! let commands = [Command::new("ping", &ping)];
//! let transport: BufferedTransport = BufferedTransport::new();
//! let mut dispatcher = Dispatcher::new(transport, Registry::new(&commands));
//!
//! dispatcher.transport_mut().push_line("ping\r\n").unwrap();
//! let result = dispatcher.run();
//! dispatcher.report(result).unwrap();
//! assert_eq!(result, Ok(()));
//! ```

use super::config::ParserConfig;
use super::error::{CommandResult, Error};
use super::parser;
use super::registry::{HELP_COMMAND, Registry};
use super::tokenizer;
use crate::transport::LineSource;

/// Maximum length in bytes of a line read from the transport.
///
/// Longer lines are truncated by the transport.
pub const MAX_LINE_LEN: usize = 256;

/// Line ending used for everything the dispatcher prints.
pub const LINE_ENDING: &str = "\r\n";

/// Header printed by the built-in `help` command.
pub const HELP_HEADER: &str = "Command dictionary:";

/// Reads lines from a transport and executes the matching commands.
#[derive(Debug)]
pub struct Dispatcher<'a, T> {
    transport: T,
    config: ParserConfig,
    registry: Registry<'a>,
    echo_enabled: bool,
}

impl<'a, T> Dispatcher<'a, T> {
    /// Create a dispatcher with the default parser configuration.
    pub fn new(transport: T, registry: Registry<'a>) -> Self {
        Self::with_config(transport, registry, ParserConfig::new())
    }

    /// Create a dispatcher with an explicit parser configuration.
    pub fn with_config(transport: T, registry: Registry<'a>, config: ParserConfig) -> Self {
        Self {
            transport,
            config,
            registry,
            echo_enabled: true,
        }
    }

    /// Require lines to begin with `start_char`; [`NO_FRAMING`](super::NO_FRAMING) disables the check.
    pub fn set_start_char(&mut self, start_char: char) {
        self.config.set_start_char(start_char);
    }

    /// Require lines to end with `stop_char`; [`NO_FRAMING`](super::NO_FRAMING) disables the check.
    pub fn set_stop_char(&mut self, stop_char: char) {
        self.config.set_stop_char(stop_char);
    }

    /// Set the argument delimiter.
    pub fn set_delimiter(&mut self, delimiter: char) {
        self.config.set_delimiter(delimiter);
    }

    /// Enable or disable echoing received lines back to the transport.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo_enabled = enabled;
    }

    /// Replace the command dictionary.
    pub fn install(&mut self, registry: Registry<'a>) {
        self.registry = registry;
    }

    /// The parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Mutable access to the parser configuration.
    pub fn config_mut(&mut self) -> &mut ParserConfig {
        &mut self.config
    }

    /// The command dictionary.
    pub fn registry(&self) -> &Registry<'a> {
        &self.registry
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the dispatcher, returning the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Parse `line` and execute the matching command, without any I/O.
    ///
    /// The built-in `help` is not handled here.
    pub fn process(&self, line: &str) -> CommandResult {
        let result = parser::process(line, &self.config, &self.registry);

        #[cfg(feature = "defmt")]
        if let Err(error) = result {
            defmt::debug!("command failed: {}", error);
        }

        result
    }
}

impl<'a, T: LineSource> Dispatcher<'a, T> {
    /// Poll the transport once.
    ///
    /// Returns `Ok(())` without side effects when no input is pending.
    /// Otherwise reads one line, answers `help` or echoes the line and
    /// dispatches it, returning the parser or handler result verbatim.
    pub fn run(&mut self) -> CommandResult {
        if !self.transport.available() {
            return Ok(());
        }

        let mut buf = [0u8; MAX_LINE_LEN];
        let len = match self
            .transport
            .read_line(&mut buf, self.config.read_timeout_ms())
        {
            Ok(len) => len,
            Err(_error) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("line read failed: {}", defmt::Debug2Format(&_error));
                return Err(Error::Transport);
            }
        };
        let line = tokenizer::trim(valid_prefix(&buf[..len]));

        #[cfg(feature = "defmt")]
        defmt::debug!("received line: {=str}", line);

        if line == HELP_COMMAND {
            return self.print_help();
        }

        if self.echo_enabled {
            self.write(LINE_ENDING)?;
            self.write(line)?;
            self.write(LINE_ENDING)?;
        }

        self.process(line)
    }

    /// Print the description of an error, followed by a line ending.
    ///
    /// `Ok(())` prints nothing.
    pub fn report(&mut self, result: CommandResult) -> CommandResult {
        if let Err(error) = result {
            self.write(error.describe())?;
            self.write(LINE_ENDING)?;
        }
        Ok(())
    }

    fn print_help(&mut self) -> CommandResult {
        let registry = self.registry;
        self.write(HELP_HEADER)?;
        self.write(LINE_ENDING)?;
        for name in registry.names() {
            self.write(name)?;
            self.write(LINE_ENDING)?;
        }
        Ok(())
    }

    fn write(&mut self, text: &str) -> CommandResult {
        self.transport.write_str(text).map_err(|_error| {
            #[cfg(feature = "defmt")]
            defmt::warn!("write failed: {}", defmt::Debug2Format(&_error));
            Error::Transport
        })
    }
}

#[cfg(feature = "async")]
impl<'a, T: crate::transport::AsyncLineSource> Dispatcher<'a, T> {
    /// Async counterpart of [`run`](Self::run).
    pub async fn run_async(&mut self) -> CommandResult {
        if !self.transport.available() {
            return Ok(());
        }

        let mut buf = [0u8; MAX_LINE_LEN];
        let len = self
            .transport
            .read_line(&mut buf, self.config.read_timeout_ms())
            .await
            .map_err(|_| Error::Transport)?;
        let line = tokenizer::trim(valid_prefix(&buf[..len]));

        if line == HELP_COMMAND {
            let registry = self.registry;
            self.write_async(HELP_HEADER).await?;
            self.write_async(LINE_ENDING).await?;
            for name in registry.names() {
                self.write_async(name).await?;
                self.write_async(LINE_ENDING).await?;
            }
            return Ok(());
        }

        if self.echo_enabled {
            self.write_async(LINE_ENDING).await?;
            self.write_async(line).await?;
            self.write_async(LINE_ENDING).await?;
        }

        self.process(line)
    }

    /// Async counterpart of [`report`](Self::report).
    pub async fn report_async(&mut self, result: CommandResult) -> CommandResult {
        if let Err(error) = result {
            self.write_async(error.describe()).await?;
            self.write_async(LINE_ENDING).await?;
        }
        Ok(())
    }

    async fn write_async(&mut self, text: &str) -> CommandResult {
        self.transport
            .write_str(text)
            .await
            .map_err(|_| Error::Transport)
    }
}

/// Longest valid UTF-8 prefix of `bytes`.
///
/// A slow line cut by the read timeout may end in the middle of a multi-byte
/// character; the partial character is dropped.
fn valid_prefix(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => core::str::from_utf8(&bytes[..error.valid_up_to()]).unwrap_or(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_prefix_drops_partial_char() {
        let bytes = "set é".as_bytes();
        assert_eq!(valid_prefix(&bytes[..bytes.len() - 1]), "set ");
        assert_eq!(valid_prefix(bytes), "set é");
    }
}
