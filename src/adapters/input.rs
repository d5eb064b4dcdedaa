use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use std::io::{self, ErrorKind, Read};

/// Reads single characters from any byte reader, skipping ASCII whitespace
/// the way formatted console extraction does. Only single-byte reads are
/// needed: the recognized inputs are ASCII and everything else is a no-op
/// regardless of encoding.
pub struct ReaderInput<R: Read> {
    reader: R,
}

impl<R: Read> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderInput<io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> InputSource for ReaderInput<R> {
    fn next_char(&mut self) -> Result<Option<char>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    if !buf[0].is_ascii_whitespace() {
                        return Ok(Some(buf[0] as char));
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
