//! Bounded argument list handed to command handlers

use core::str::FromStr;

use heapless::Vec;

use super::error::{CommandResult, Error};

/// Maximum number of argument tokens accepted on a single line.
pub const MAX_ARGS: usize = 10;

/// Ordered argument tokens, in the order they appeared on the line.
///
/// Tokens borrow from the line being parsed; nothing is copied. The command
/// name is not part of the list.
///
/// # Examples
///
/// ```rust
/// use serialcmd::command::{Args, CommandResult};
///
/// fn blink(args: &Args<'_>) -> CommandResult {
///     args.expect_count(2, 2)?;
///     let count: u32 = args.parse(0)?;
///     let period_ms: u32 = args.parse(1)?;
///     # let _ = (count, period_ms);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args<'a> {
    tokens: Vec<&'a str, MAX_ARGS>,
}

impl<'a> Args<'a> {
    /// An empty argument list.
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append a token, failing with [`Error::ArgumentOverflow`] once the list is full.
    pub fn push(&mut self, token: &'a str) -> CommandResult {
        self.tokens.push(token).map_err(|_| Error::ArgumentOverflow)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the line had no argument section.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// Iterate over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().copied()
    }

    /// All tokens as a slice.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Check the token count against an inclusive range.
    ///
    /// Returns [`Error::TooFewArgs`] below `min` and [`Error::TooManyArgs`] above `max`.
    pub fn expect_count(&self, min: usize, max: usize) -> CommandResult {
        if self.len() < min {
            Err(Error::TooFewArgs)
        } else if self.len() > max {
            Err(Error::TooManyArgs)
        } else {
            Ok(())
        }
    }

    /// Parse the token at `index`.
    ///
    /// A missing token yields [`Error::TooFewArgs`], an unparseable one
    /// [`Error::InvalidArg`].
    pub fn parse<T: FromStr>(&self, index: usize) -> Result<T, Error> {
        self.get(index)
            .ok_or(Error::TooFewArgs)?
            .parse()
            .map_err(|_| Error::InvalidArg)
    }
}
