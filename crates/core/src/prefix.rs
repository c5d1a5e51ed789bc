// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-prefixing writer.
//!
//! Parallel test runs share the console, so every line a run produces is
//! tagged with a fixed label. [`LinePrefixer`] wraps any [`Write`] sink and
//! injects the label at the start of each line, tracking whether the last
//! write ended mid-line so that a line split across several writes is
//! labeled exactly once.

use std::io::{self, Write};

/// A [`Write`] adapter that emits `prefix` before every line of output.
///
/// The only state carried between calls is whether the sink is at the start
/// of a line (and how much of the prefix a failed write already delivered).
/// One instance must not be written from several tasks without external
/// synchronization.
///
/// Each line segment reaches the sink together with its prefix in a single
/// `write` call, so several prefixers sharing one locked sink (such as
/// process stdout) never split a label from its line.
#[derive(Debug)]
pub struct LinePrefixer<W> {
    inner: W,
    prefix: Vec<u8>,
    at_line_start: bool,
    /// Prefix bytes already accepted for the pending line start.
    prefix_sent: usize,
    scratch: Vec<u8>,
}

impl<W: Write> LinePrefixer<W> {
    /// Wrap `inner`, labeling each line with `prefix`.
    pub fn new(inner: W, prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
            at_line_start: true,
            prefix_sent: 0,
            scratch: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// True when the next payload byte begins a new line.
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Write one segment: at most one line, newline included if present.
    ///
    /// Payload bytes accepted by the sink are added to `written`, so a
    /// failure part way through still reports accurate progress. Prefix
    /// bytes accepted before a failure are remembered and not sent twice.
    fn write_segment(&mut self, segment: &[u8], written: &mut usize) -> io::Result<()> {
        self.scratch.clear();
        let head: &[u8] = if self.at_line_start {
            &self.prefix[self.prefix_sent..]
        } else {
            &[]
        };
        let head_len = head.len();
        self.scratch.extend_from_slice(head);
        self.scratch.extend_from_slice(segment);

        let mut sent = 0;
        let result = loop {
            if sent == self.scratch.len() {
                break Ok(());
            }
            match self.inner.write(&self.scratch[sent..]) {
                Ok(0) => break Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => sent += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => break Err(e),
            }
        };

        *written += sent.saturating_sub(head_len);
        if sent >= head_len {
            self.at_line_start = false;
            self.prefix_sent = 0;
        } else {
            self.prefix_sent += sent;
        }
        if result.is_ok() {
            self.at_line_start = segment.ends_with(b"\n");
        }
        result
    }
}

impl<W: Write> Write for LinePrefixer<W> {
    /// Returns the number of payload bytes written; prefix bytes are not
    /// counted.
    ///
    /// The first sink failure stops the write. If no payload reached the
    /// sink the error is returned, otherwise the partial count is, and the
    /// caller sees the error on its next attempt.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut written = 0;
        for segment in buf.split_inclusive(|&b| b == b'\n') {
            if let Err(e) = self.write_segment(segment, &mut written) {
                return if written == 0 { Err(e) } else { Ok(written) };
            }
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;
