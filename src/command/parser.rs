//! Line parsing: framing, command name extraction and dispatch to a handler.
//!
//! Parsing borrows from the input line and never allocates. The stages run in
//! a fixed order and the first failure is returned as is:
//!
//! 1. trim surrounding whitespace
//! 2. check and strip the start character, if one is configured
//! 3. check and strip the stop character, if one is configured
//! 4. split the command name from the argument section at the first delimiter
//! 5. tokenize a non-empty argument section
//!
//! [`process`] then looks the name up and hands the tokens to the handler.

use super::args::Args;
use super::config::ParserConfig;
use super::error::{CommandResult, Error};
use super::registry::Registry;
use super::tokenizer;

/// A framed and tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// The command name, everything before the first delimiter.
    pub name: &'a str,
    /// The argument tokens, empty when the line had no argument section.
    pub args: Args<'a>,
}

/// Parse a raw line according to `config`.
///
/// # Examples
///
/// ```rust
/// use serialcmd::command::{parse, ParserConfig};
///
/// let config = ParserConfig::new().with_start_char('[').with_stop_char(']');
/// let line = parse("[blink 3 200]", &config).unwrap();
/// assert_eq!(line.name, "blink");
/// assert_eq!(line.args.as_slice(), &["3", "200"]);
/// ```
pub fn parse<'a>(line: &'a str, config: &ParserConfig) -> Result<ParsedLine<'a>, Error> {
    let mut line = tokenizer::trim(line);

    if let Some(start) = config.start_char() {
        line = line.strip_prefix(start).ok_or(Error::MissingStartChar)?;
    }

    // Exactly one character is removed: the marker itself.
    if let Some(stop) = config.stop_char() {
        line = line.strip_suffix(stop).ok_or(Error::MissingStopChar)?;
    }

    let delimiter = config.delimiter();
    let (name, section) = match line.split_once(delimiter) {
        Some((name, rest)) => (name, tokenizer::trim(rest)),
        None => (line, ""),
    };

    let args = if section.is_empty() {
        Args::new()
    } else {
        tokenizer::split(section, delimiter)?
    };

    Ok(ParsedLine { name, args })
}

/// Parse `line`, look the command up in `registry` and invoke its handler.
///
/// The handler's result is returned verbatim. An unknown name yields
/// [`Error::NoMatchingCmd`].
pub fn process(line: &str, config: &ParserConfig, registry: &Registry<'_>) -> CommandResult {
    let parsed = parse(line, config)?;
    let command = registry.lookup(parsed.name).ok_or(Error::NoMatchingCmd)?;
    command.invoke(&parsed.args)
}
