// WHY: display-time reordering for sinks that do no bidi processing themselves (plain terminals)
// Applied once, right before output; never to text that is about to be stored

use std::io::{self, Write};

use tracing::debug;

use crate::error::ReverseError;
use crate::markers::{LRM, RLM};
use crate::script::is_rtl;

/// Configuration for reverser behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverserConfig {
    /// Also reverse RTL runs that carry no markers
    pub aggressive: bool,
}

/// Reverse the marked spans of `text` (and, in aggressive mode, bare RTL runs).
///
/// Markers delimiting a span are consumed. An RLM without a closing LRM
/// reverses everything up to the end of `text`.
pub fn reverse_marked(text: &str, aggressive: bool) -> String {
    let mut result = String::with_capacity(text.len());
    reverse_marked_into(text, aggressive, &mut result);
    result
}

/// Reverse marked spans into supplied buffer to avoid allocation
pub fn reverse_marked_into(text: &str, aggressive: bool, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == RLM {
            let start = i + 1;
            let mut end = start;
            while end < chars.len() && chars[end] != LRM {
                end += 1;
            }
            buffer.extend(chars[start..end].iter().rev());
            // Skip the LRM; lands past the end when the span was unterminated
            i = end + 1;
        } else if aggressive && is_rtl(ch) {
            // Whitespace does not extend an unmarked run
            let start = i;
            while i < chars.len() && is_rtl(chars[i]) {
                i += 1;
            }
            buffer.extend(chars[start..i].iter().rev());
        } else {
            buffer.push(ch);
            i += 1;
        }
    }
}

/// Writer decorator that reverses RTL spans before passing text to `inner`.
///
/// Every write call is transformed on its own: a span whose RLM and LRM
/// arrive in different calls is not reassembled. The first call reverses
/// to the end of its buffer and the stray LRM of the second call is written
/// out as text. Callers that need spans intact must write whole lines (or
/// whole documents) per call.
///
/// One reverser owns one sink; sharing it across threads needs external
/// serialization like any other writer.
#[derive(Debug)]
pub struct Reverser<W: Write> {
    inner: Option<W>,
    config: ReverserConfig,
}

impl<W: Write> Reverser<W> {
    pub fn new(inner: W, config: ReverserConfig) -> Self {
        Self {
            inner: Some(inner),
            config,
        }
    }

    /// Reverser without a sink; every write fails with [`ReverseError::NoDestination`]
    pub fn unattached(config: ReverserConfig) -> Self {
        Self {
            inner: None,
            config,
        }
    }

    pub fn config(&self) -> ReverserConfig {
        self.config
    }

    pub fn get_ref(&self) -> Option<&W> {
        self.inner.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut W> {
        self.inner.as_mut()
    }

    /// Detach the sink, leaving the reverser unattached
    pub fn take_inner(&mut self) -> Option<W> {
        self.inner.take()
    }

    pub fn into_inner(self) -> Option<W> {
        self.inner
    }

    /// Transform `buf` and write the result to the sink in a single call.
    ///
    /// The returned count is always `buf.len()`, including on error: it
    /// reports how much input was accepted, not how many transformed bytes
    /// reached the sink. A sink that takes fewer bytes than offered without
    /// an error of its own yields [`ReverseError::ShortWrite`].
    pub fn write_transformed(&mut self, buf: &[u8]) -> (usize, Result<(), ReverseError>) {
        (buf.len(), self.transform_and_send(buf))
    }

    fn transform_and_send(&mut self, buf: &[u8]) -> Result<(), ReverseError> {
        let sink = self.inner.as_mut().ok_or(ReverseError::NoDestination)?;

        // WHY: invalid UTF-8 degrades to U+FFFD instead of failing the write
        let text = String::from_utf8_lossy(buf);
        let output = reverse_marked(&text, self.config.aggressive);

        let written = sink.write(output.as_bytes())?;
        if written != output.len() {
            debug!(written, expected = output.len(), "sink short write");
            return Err(ReverseError::ShortWrite {
                written,
                expected: output.len(),
            });
        }
        Ok(())
    }
}

impl<W: Write> Write for Reverser<W> {
    /// Returns `Ok(buf.len())` on success; see [`Reverser::write_transformed`]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let (consumed, result) = self.write_transformed(buf);
        result?;
        Ok(consumed)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.inner.as_mut() {
            Some(sink) => sink.flush(),
            None => Err(ReverseError::NoDestination.into()),
        }
    }
}
