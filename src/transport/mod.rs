//! Line source abstraction for serial links
//!
//! The dispatcher only needs three capabilities from the link it is attached
//! to: a non-blocking check for pending input, a bounded read of one line,
//! and a way to print text. These are expressed as small traits so the same
//! dispatcher runs over a UART driver, a USB CDC endpoint, a test buffer or
//! `std` streams.

#![allow(async_fn_in_trait)]
#![deny(unsafe_code)]

/// Common error types for transport operations
pub mod error;

/// In-memory transport backed by fixed-capacity buffers
pub mod buffered;

/// Transport over `std::io` streams
#[cfg(feature = "std")]
pub mod io;

pub use buffered::BufferedTransport;
#[cfg(feature = "std")]
pub use io::IoTransport;

/// Re-exports of common traits
pub mod prelude {
    #[cfg(feature = "async")]
    pub use super::{AsyncLineRead, AsyncLineSource, AsyncWrite};
    pub use super::{LineRead, LineSource, Write};
}

/// Line oriented input.
pub trait LineRead {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Whether input is pending. Must not block.
    fn available(&mut self) -> bool;
    /// Read one line into `buf`, waiting at most `timeout_ms` for it to complete.
    ///
    /// Returns the number of bytes written. Line terminators are not required
    /// to be stripped, and a line longer than `buf` may be truncated.
    fn read_line(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error>;
}

/// Text output.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write a string to the link
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// A bidirectional line oriented link.
pub trait LineSource: LineRead + Write {}

impl<T: LineRead + Write> LineSource for T {}

/// Line oriented input, async flavour.
#[cfg(feature = "async")]
pub trait AsyncLineRead {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Whether input is pending. Must not block.
    fn available(&mut self) -> bool;
    /// Read one line into `buf` asynchronously
    async fn read_line(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error>;
}

/// Text output, async flavour.
#[cfg(feature = "async")]
pub trait AsyncWrite {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write a string to the link asynchronously
    async fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// A bidirectional line oriented link, async flavour.
#[cfg(feature = "async")]
pub trait AsyncLineSource: AsyncLineRead + AsyncWrite {}

#[cfg(feature = "async")]
impl<T: AsyncLineRead + AsyncWrite> AsyncLineSource for T {}
