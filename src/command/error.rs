//! Error codes shared by the parser, the dispatcher and command handlers

use core::fmt;

/// Wire code reported for a successful command (`NONE`).
pub const NONE_CODE: u8 = 0;

/// Result type returned by every parsing stage and every command handler.
///
/// `Ok(())` is the only success value and means "no error to report".
pub type CommandResult = Result<(), Error>;

/// Error codes produced while parsing or executing a command line.
///
/// The first nine variants form a closed enumeration with stable wire codes
/// (see [`Error::code`]). `TooFewArgs`, `TooManyArgs` and `InvalidArg` are
/// never produced by the parser itself; handlers return them and the
/// dispatcher passes them through unchanged.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The line did not begin with the configured start character.
    MissingStartChar,
    /// The line did not end with the configured stop character.
    MissingStopChar,
    /// Reserved.
    MissingDelimiter,
    /// Reserved.
    InvalidCmd,
    /// No registered command has the requested name.
    NoMatchingCmd,
    /// A handler received fewer arguments than it needs.
    TooFewArgs,
    /// A handler received more arguments than it accepts.
    TooManyArgs,
    /// The argument section was empty after trimming.
    NoArgs,
    /// A handler could not interpret one of its arguments.
    InvalidArg,
    /// The argument section holds more than [`MAX_ARGS`](super::MAX_ARGS) tokens.
    ArgumentOverflow,
    /// The line source or the output channel failed.
    Transport,
}

impl Error {
    /// Every error, in wire code order.
    pub const ALL: [Error; 11] = [
        Error::MissingStartChar,
        Error::MissingStopChar,
        Error::MissingDelimiter,
        Error::InvalidCmd,
        Error::NoMatchingCmd,
        Error::TooFewArgs,
        Error::TooManyArgs,
        Error::NoArgs,
        Error::InvalidArg,
        Error::ArgumentOverflow,
        Error::Transport,
    ];

    /// Numeric code of this error on the wire. `0` is reserved for success.
    pub const fn code(self) -> u8 {
        match self {
            Error::MissingStartChar => 1,
            Error::MissingStopChar => 2,
            Error::MissingDelimiter => 3,
            Error::InvalidCmd => 4,
            Error::NoMatchingCmd => 5,
            Error::TooFewArgs => 6,
            Error::TooManyArgs => 7,
            Error::NoArgs => 8,
            Error::InvalidArg => 9,
            Error::ArgumentOverflow => 10,
            Error::Transport => 11,
        }
    }

    /// Map a wire code back to an error.
    ///
    /// Returns `None` for [`NONE_CODE`] and for codes outside the enumeration.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|error| error.code() == code)
    }

    /// Human readable description, suitable for printing on a terminal.
    pub const fn describe(self) -> &'static str {
        match self {
            Error::MissingStartChar => "Missing start character",
            Error::MissingStopChar => "Missing stop character",
            Error::MissingDelimiter => "Missing delimiter character",
            Error::InvalidCmd => "Invalid command",
            Error::NoMatchingCmd => "No matching command",
            Error::TooFewArgs => "Too few args",
            Error::TooManyArgs => "Too many args",
            Error::NoArgs => "No args",
            Error::InvalidArg => "Invalid argument",
            Error::ArgumentOverflow => "Too many arguments for the argument buffer",
            Error::Transport => "Transport failure",
        }
    }
}

/// Wire code of a command result, [`NONE_CODE`] for success.
pub fn code_of(result: &CommandResult) -> u8 {
    match result {
        Ok(()) => NONE_CODE,
        Err(error) => error.code(),
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::MissingStartChar => defmt::write!(f, "MissingStartChar"),
            Error::MissingStopChar => defmt::write!(f, "MissingStopChar"),
            Error::MissingDelimiter => defmt::write!(f, "MissingDelimiter"),
            Error::InvalidCmd => defmt::write!(f, "InvalidCmd"),
            Error::NoMatchingCmd => defmt::write!(f, "NoMatchingCmd"),
            Error::TooFewArgs => defmt::write!(f, "TooFewArgs"),
            Error::TooManyArgs => defmt::write!(f, "TooManyArgs"),
            Error::NoArgs => defmt::write!(f, "NoArgs"),
            Error::InvalidArg => defmt::write!(f, "InvalidArg"),
            Error::ArgumentOverflow => defmt::write!(f, "ArgumentOverflow"),
            Error::Transport => defmt::write!(f, "Transport"),
        }
    }
}
