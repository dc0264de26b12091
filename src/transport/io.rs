//! Transport over `std::io` streams
//!
//! Lets a host program drive a dispatcher from stdin/stdout, a pseudo terminal
//! or a serial port opened through the operating system.

use std::io::{self, BufRead, ErrorKind};

use super::error::Error;
use super::{LineRead, Write};

/// Adapter joining a buffered reader and a writer into a line source.
///
/// `available` has to ask the reader for data, so it returns as soon as the
/// stream does: immediately for streams opened non-blocking or with a read
/// timeout (`WouldBlock`/`TimedOut` count as "nothing pending"), but only once
/// a byte arrives or the stream ends for a blocking stream such as stdin.
/// Loops that must keep polling other work should hand it a stream with a
/// timeout.
///
/// A read failure seen by `available` is kept and returned by the next
/// `read_line`. Once the reader reports end of stream, [`is_closed`] turns
/// true.
///
/// Lines are copied as raw bytes; decoding is left to the dispatcher. A line
/// longer than the caller's buffer is truncated and the rest of it discarded.
///
/// [`is_closed`]: IoTransport::is_closed
#[derive(Debug)]
pub struct IoTransport<R, W> {
    reader: R,
    writer: W,
    failed: bool,
    closed: bool,
}

impl<R: BufRead, W: io::Write> IoTransport<R, W> {
    /// Join `reader` and `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            failed: false,
            closed: false,
        }
    }

    /// Whether the reader has reported end of stream.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The writer half.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Split the transport back into its halves.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

/// Nothing to read right now, try again later.
fn is_idle(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::WouldBlock | ErrorKind::TimedOut)
}

impl<R: BufRead, W: io::Write> LineRead for IoTransport<R, W> {
    type Error = Error;

    fn available(&mut self) -> bool {
        if self.failed {
            return true;
        }
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    self.closed = buf.is_empty();
                    return !self.closed;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if is_idle(e.kind()) => return false,
                Err(_) => {
                    self.failed = true;
                    return true;
                }
            }
        }
    }

    fn read_line(&mut self, buf: &mut [u8], _timeout_ms: u32) -> Result<usize, Self::Error> {
        if self.failed {
            self.failed = false;
            return Err(Error::ReadError);
        }

        let mut len = 0;
        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                // A partial line is still a line.
                Err(e) if len > 0 || is_idle(e.kind()) => return Ok(len),
                Err(_) => return Err(Error::ReadError),
            };
            if chunk.is_empty() {
                self.closed = true;
                return Ok(len);
            }

            let (used, complete) = match chunk.iter().position(|&b| b == b'\n') {
                Some(end) => (end + 1, true),
                None => (chunk.len(), false),
            };
            let copied = used.min(buf.len() - len);
            buf[len..len + copied].copy_from_slice(&chunk[..copied]);
            len += copied;
            self.reader.consume(used);

            if complete {
                return Ok(len);
            }
        }
    }
}

impl<R: BufRead, W: io::Write> Write for IoTransport<R, W> {
    type Error = Error;

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|_| Error::WriteError)
    }
}
