//! Parser configuration: framing characters, delimiter and read timeout
//!
//! A [`ParserConfig`] is owned by a [`Dispatcher`](super::Dispatcher) and read on
//! every parse. Changing it between two polls affects only the lines parsed
//! afterwards.
//!
//! The configuration can also be loaded from (and stored as) a small JSON
//! document, which is convenient when the settings live in flash next to other
//! device parameters:
//!
//! ```rust
//! use serialcmd::command::ParserConfig;
//!
//! let config = ParserConfig::from_json(br#"{"start_char":"[","stop_char":"]"}"#).unwrap();
//! assert_eq!(config.start_char(), Some('['));
//! assert_eq!(config.stop_char(), Some(']'));
//! assert_eq!(config.delimiter(), ' ');
//! ```

use heapless::String;
use serde::{Deserialize, Serialize};

/// Sentinel accepted by the framing setters to mean "no marker configured".
pub const NO_FRAMING: char = '\0';

/// Default argument delimiter.
pub const DEFAULT_DELIMITER: char = ' ';

/// Default bound on a single line read, in milliseconds.
pub const READ_TIMEOUT_MS: u32 = 100;

/// Errors raised while loading or storing a configuration.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The document is not valid JSON or does not have the expected shape.
    Parse,
    /// A character field does not hold exactly one character.
    InvalidChar,
    /// The output buffer is too small for the serialized configuration.
    BufferOverflow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Parse => defmt::write!(f, "Parse"),
            Error::InvalidChar => defmt::write!(f, "InvalidChar"),
            Error::BufferOverflow => defmt::write!(f, "BufferOverflow"),
        }
    }
}

/// Settings consulted by the line parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    start_char: Option<char>,
    stop_char: Option<char>,
    delimiter: char,
    read_timeout_ms: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserConfig {
    /// No framing characters, a space delimiter and a 100 ms read timeout.
    pub const fn new() -> Self {
        Self {
            start_char: None,
            stop_char: None,
            delimiter: DEFAULT_DELIMITER,
            read_timeout_ms: READ_TIMEOUT_MS,
        }
    }

    /// Builder form of [`set_start_char`](Self::set_start_char).
    pub const fn with_start_char(mut self, start_char: char) -> Self {
        self.start_char = framing(start_char);
        self
    }

    /// Builder form of [`set_stop_char`](Self::set_stop_char).
    pub const fn with_stop_char(mut self, stop_char: char) -> Self {
        self.stop_char = framing(stop_char);
        self
    }

    /// Builder form of [`set_delimiter`](Self::set_delimiter).
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder form of [`set_read_timeout_ms`](Self::set_read_timeout_ms).
    pub const fn with_read_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.read_timeout_ms = timeout_ms;
        self
    }

    /// Require every line to begin with `start_char`.
    ///
    /// Passing [`NO_FRAMING`] removes the requirement.
    pub fn set_start_char(&mut self, start_char: char) {
        self.start_char = framing(start_char);
    }

    /// Require every line to end with `stop_char`.
    ///
    /// Passing [`NO_FRAMING`] removes the requirement.
    pub fn set_stop_char(&mut self, stop_char: char) {
        self.stop_char = framing(stop_char);
    }

    /// Set the character separating the command name and its arguments.
    pub fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }

    /// Set the bound applied to a single line read.
    pub fn set_read_timeout_ms(&mut self, timeout_ms: u32) {
        self.read_timeout_ms = timeout_ms;
    }

    /// Stop requiring a start character.
    pub fn clear_start_char(&mut self) {
        self.start_char = None;
    }

    /// Stop requiring a stop character.
    pub fn clear_stop_char(&mut self) {
        self.stop_char = None;
    }

    /// The configured start character, if any.
    pub fn start_char(&self) -> Option<char> {
        self.start_char
    }

    /// The configured stop character, if any.
    pub fn stop_char(&self) -> Option<char> {
        self.stop_char
    }

    /// The argument delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The line read timeout in milliseconds.
    pub fn read_timeout_ms(&self) -> u32 {
        self.read_timeout_ms
    }

    /// Load a configuration from a JSON document.
    ///
    /// Every field is optional; missing fields keep their default value.
    /// Escaped characters such as `"\\"` or `"\""` are accepted.
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        let mut unescaped = [0u8; CHAR_FIELD_LEN];
        let (raw, _): (RawConfig, usize) =
            serde_json_core::from_slice_escaped(json, &mut unescaped).map_err(|_| Error::Parse)?;

        let mut config = Self::new();
        if let Some(start) = raw.start_char {
            config.set_start_char(single_char(&start)?);
        }
        if let Some(stop) = raw.stop_char {
            config.set_stop_char(single_char(&stop)?);
        }
        if let Some(delimiter) = raw.delimiter {
            config.set_delimiter(single_char(&delimiter)?);
        }
        if let Some(timeout) = raw.read_timeout_ms {
            config.set_read_timeout_ms(timeout);
        }
        Ok(config)
    }

    /// Serialize the configuration as JSON into `buf`, returning the length written.
    pub fn to_json(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let raw = RawConfig {
            start_char: self.start_char.map(char_field).transpose()?,
            stop_char: self.stop_char.map(char_field).transpose()?,
            delimiter: Some(char_field(self.delimiter)?),
            read_timeout_ms: Some(self.read_timeout_ms),
        };
        serde_json_core::to_slice(&raw, buf).map_err(|_| Error::BufferOverflow)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParserConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ParserConfig {{ start: {}, stop: {}, delimiter: {}, timeout_ms: {} }}",
            self.start_char,
            self.stop_char,
            self.delimiter,
            self.read_timeout_ms
        )
    }
}

/// Room for one UTF-8 encoded character.
const CHAR_FIELD_LEN: usize = 4;

type CharField = String<CHAR_FIELD_LEN>;

#[derive(Deserialize, Serialize)]
struct RawConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_char: Option<CharField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop_char: Option<CharField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    delimiter: Option<CharField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    read_timeout_ms: Option<u32>,
}

const fn framing(c: char) -> Option<char> {
    if c == NO_FRAMING { None } else { Some(c) }
}

fn char_field(c: char) -> Result<CharField, Error> {
    let mut field = CharField::new();
    field.push(c).map_err(|()| Error::BufferOverflow)?;
    Ok(field)
}

fn single_char(text: &str) -> Result<char, Error> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidChar),
    }
}
