//! Common error types for transport operations

/// A common error type for the transports shipped with this crate.
///
/// Custom transports are free to use their own error type; the dispatcher only
/// requires it to implement `Debug`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// No more lines can be queued.
    QueueFull,
    /// The output buffer cannot hold more text.
    OutputFull,
    /// A queued line exceeds the maximum line length.
    LineTooLong,
    /// An error occurred during a read operation.
    ReadError,
    /// An error occurred during a write operation.
    WriteError,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::QueueFull => defmt::write!(f, "QueueFull"),
            Error::OutputFull => defmt::write!(f, "OutputFull"),
            Error::LineTooLong => defmt::write!(f, "LineTooLong"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
        }
    }
}
