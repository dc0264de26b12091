//! In-memory transport
//!
//! [`BufferedTransport`] queues whole lines and collects everything written to
//! it. It is useful for host-side tests, for replaying scripted sessions and
//! for feeding a dispatcher from an interrupt-driven receive buffer.

use heapless::{Deque, String};

use super::error::Error;
use super::{LineRead, Write};
use crate::command::MAX_LINE_LEN;

/// A line queue paired with an output buffer.
///
/// `LINES` bounds the number of pending lines, `OUTPUT` the number of bytes of
/// output retained until [`take_output`](Self::take_output) or
/// [`clear_output`](Self::clear_output) is called.
///
/// # Examples
///
/// ```rust
/// use serialcmd::transport::{BufferedTransport, LineRead};
///
/// let mut transport: BufferedTransport = BufferedTransport::new();
/// assert!(!transport.available());
/// transport.push_line("status").unwrap();
/// assert!(transport.available());
/// ```
#[derive(Debug, Default)]
pub struct BufferedTransport<const LINES: usize = 8, const OUTPUT: usize = 1024> {
    lines: Deque<String<MAX_LINE_LEN>, LINES>,
    output: String<OUTPUT>,
}

impl<const LINES: usize, const OUTPUT: usize> BufferedTransport<LINES, OUTPUT> {
    /// Create an empty transport.
    pub const fn new() -> Self {
        Self {
            lines: Deque::new(),
            output: String::new(),
        }
    }

    /// Queue a line to be returned by a later read.
    pub fn push_line(&mut self, line: &str) -> Result<(), Error> {
        let line = String::try_from(line).map_err(|_| Error::LineTooLong)?;
        self.lines.push_back(line).map_err(|_| Error::QueueFull)
    }

    /// Number of lines waiting to be read.
    pub fn pending(&self) -> usize {
        self.lines.len()
    }

    /// Everything written since the output was last taken or cleared.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take the collected output, leaving the buffer empty.
    pub fn take_output(&mut self) -> String<OUTPUT> {
        core::mem::take(&mut self.output)
    }

    /// Discard the collected output.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl<const LINES: usize, const OUTPUT: usize> LineRead for BufferedTransport<LINES, OUTPUT> {
    type Error = Error;

    fn available(&mut self) -> bool {
        !self.lines.is_empty()
    }

    fn read_line(&mut self, buf: &mut [u8], _timeout_ms: u32) -> Result<usize, Self::Error> {
        let Some(line) = self.lines.pop_front() else {
            return Ok(0);
        };
        let len = line.len().min(buf.len());
        buf[..len].copy_from_slice(&line.as_bytes()[..len]);
        Ok(len)
    }
}

impl<const LINES: usize, const OUTPUT: usize> Write for BufferedTransport<LINES, OUTPUT> {
    type Error = Error;

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.output.push_str(text).map_err(|_| Error::OutputFull)
    }
}

#[cfg(feature = "async")]
impl<const LINES: usize, const OUTPUT: usize> super::AsyncLineRead
    for BufferedTransport<LINES, OUTPUT>
{
    type Error = Error;

    fn available(&mut self) -> bool {
        LineRead::available(self)
    }

    async fn read_line(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error> {
        LineRead::read_line(self, buf, timeout_ms)
    }
}

#[cfg(feature = "async")]
impl<const LINES: usize, const OUTPUT: usize> super::AsyncWrite
    for BufferedTransport<LINES, OUTPUT>
{
    type Error = Error;

    async fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        Write::write_str(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_come_out_in_order() {
        let mut transport: BufferedTransport<2, 16> = BufferedTransport::new();
        transport.push_line("one").unwrap();
        transport.push_line("two").unwrap();
        assert_eq!(transport.push_line("three"), Err(Error::QueueFull));

        let mut buf = [0u8; 8];
        let len = transport.read_line(&mut buf, 100).unwrap();
        assert_eq!(&buf[..len], b"one");
        let len = transport.read_line(&mut buf, 100).unwrap();
        assert_eq!(&buf[..len], b"two");
        assert_eq!(transport.read_line(&mut buf, 100), Ok(0));
    }

    #[test]
    fn reads_truncate_to_buffer() {
        let mut transport: BufferedTransport = BufferedTransport::new();
        transport.push_line("abcdef").unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(transport.read_line(&mut buf, 100), Ok(4));
        assert_eq!(&buf, b"abcd");
        assert!(!transport.available());
    }

    #[test]
    fn output_is_bounded() {
        let mut transport: BufferedTransport<1, 4> = BufferedTransport::new();
        assert_eq!(transport.write_str("abc"), Ok(()));
        assert_eq!(transport.write_str("de"), Err(Error::OutputFull));
        assert_eq!(transport.take_output().as_str(), "abc");
        assert_eq!(transport.output(), "");
    }

    #[test]
    fn oversized_line_is_rejected() {
        let mut transport: BufferedTransport = BufferedTransport::new();
        let line = "x".repeat(MAX_LINE_LEN + 1);
        assert_eq!(transport.push_line(&line), Err(Error::LineTooLong));
    }
}
