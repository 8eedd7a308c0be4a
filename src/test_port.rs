// In-memory byte streams for host tests.

use core::convert::Infallible;
use embedded_io_async::{ErrorKind, ErrorType, Write};

#[derive(Default)]
pub struct RecordingPort {
    pub bytes: Vec<u8>,
    pub writes: usize,
}

impl ErrorType for RecordingPort {
    type Error = Infallible;
}

impl Write for RecordingPort {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.writes += 1;
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Accepts at most one byte per write call, like a nearly full UART FIFO.
#[derive(Default)]
pub struct TricklePort {
    pub bytes: Vec<u8>,
}

impl ErrorType for TricklePort {
    type Error = Infallible;
}

impl Write for TricklePort {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        match buf.first() {
            Some(b) => {
                self.bytes.push(*b);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

pub struct UnpluggedPort;

impl ErrorType for UnpluggedPort {
    type Error = ErrorKind;
}

impl Write for UnpluggedPort {
    async fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        Err(ErrorKind::NotConnected)
    }
}

/// Fails the first write, records the rest.
#[derive(Default)]
pub struct FailFirstPort {
    pub bytes: Vec<u8>,
    failed: bool,
}

impl ErrorType for FailFirstPort {
    type Error = ErrorKind;
}

impl Write for FailFirstPort {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if !self.failed {
            self.failed = true;
            return Err(ErrorKind::Other);
        }
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }
}
