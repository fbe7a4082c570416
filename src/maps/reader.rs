// Fri Aug 21 2026 - Alex

use crate::maps::{LineRecord, MapsError};
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};

pub const MAPS_PATH: &str = "/proc/self/maps";

/// Longest logical line interpreted as a record. A line not terminated
/// within this bound is discarded up to its line boundary.
pub const LINE_MAX: usize = 2048;

enum RawLine {
    Eof,
    Oversized,
    Line(String),
}

/// Lazy, restartable reader over the process maps pseudo-file. Each
/// `open_self` call opens the file anew; there is no shared cursor. The
/// iterator yields parsed records until EOF, or one `Err` on the first
/// malformed line and nothing afterwards.
pub struct MapsReader<R: BufRead> {
    inner: R,
    line_max: usize,
    done: bool,
}

impl MapsReader<BufReader<File>> {
    pub fn open_self() -> std::io::Result<Self> {
        let file = File::open(MAPS_PATH)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> MapsReader<R> {
    pub fn from_reader(inner: R) -> Self {
        Self {
            inner,
            line_max: LINE_MAX,
            done: false,
        }
    }

    pub fn with_line_max(mut self, line_max: usize) -> Self {
        self.line_max = line_max;
        self
    }

    fn read_bounded_line(&mut self) -> std::io::Result<RawLine> {
        let mut buf = Vec::with_capacity(256);
        let n = std::io::Read::take(&mut self.inner, self.line_max as u64)
            .read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(RawLine::Eof);
        }
        if buf.last() != Some(&b'\n') && n == self.line_max {
            // Unterminated within the bound. The fragment must not be
            // interpreted as a record; skip to the next line boundary.
            let mut rest = Vec::new();
            self.inner.read_until(b'\n', &mut rest)?;
            return Ok(RawLine::Oversized);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(RawLine::Line(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead> Iterator for MapsReader<R> {
    type Item = Result<LineRecord, MapsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.read_bounded_line() {
                Err(e) => {
                    self.done = true;
                    return Some(Err(MapsError::Io(e)));
                }
                Ok(RawLine::Eof) => {
                    self.done = true;
                    return None;
                }
                Ok(RawLine::Oversized) => {
                    warn!("discarding maps line longer than {} bytes", self.line_max);
                    continue;
                }
                Ok(RawLine::Line(line)) => {
                    return Some(match LineRecord::parse(&line) {
                        Ok(record) => Ok(record),
                        Err(e) => {
                            self.done = true;
                            Err(e)
                        }
                    });
                }
            }
        }
    }
}
