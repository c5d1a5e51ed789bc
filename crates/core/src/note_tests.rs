// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io;

struct Closed;

impl Write for Closed {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn note_writes_formatted_text() {
    let mut out = Vec::new();
    note(&mut out, format_args!("lumi: {}\n", "/usr/bin/lumi"));
    assert_eq!(out, b"lumi: /usr/bin/lumi\n");
}

#[test]
fn note_ignores_sink_failure() {
    note(&mut Closed, format_args!("dropped\n"));
}
