// WHY: marks RTL runs for storage/serialization; reversal is a display concern handled by the reverser
// Scans by code point so multi-byte sequences are never split

use tracing::trace;

use crate::markers::{LRM, RLM};
use crate::script::is_rtl;

/// Wrap every maximal RTL run in `text` with an RLM/LRM pair.
///
/// The result differs from `text` only by inserted markers. Existing
/// RLM...LRM spans are copied untouched, so `wrap_rtl(&wrap_rtl(t)) == wrap_rtl(t)`.
///
/// ```
/// use bidiflip::wrap_rtl;
/// assert_eq!(wrap_rtl("Hello שלום World"), "Hello \u{200F}שלום\u{200E} World");
/// ```
pub fn wrap_rtl(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    wrap_rtl_into(text, &mut result);
    result
}

/// Wrap RTL runs into supplied buffer to avoid allocation
/// WHY: enables buffer reuse when wrapping line by line
pub fn wrap_rtl_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == RLM {
            // Existing span: copy through the closing LRM without reclassifying
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != LRM {
                i += 1;
            }
            let terminated = i < chars.len();
            if terminated {
                i += 1;
            }
            buffer.extend(&chars[start..i]);
            if !terminated {
                trace!(start, "repairing unterminated marked span");
                buffer.push(LRM);
            }
        } else if is_rtl(ch) {
            let start = i;
            i = rtl_run_end(&chars, i);
            trace!(start, end = i, "wrapping RTL run");
            buffer.push(RLM);
            buffer.extend(&chars[start..i]);
            buffer.push(LRM);
        } else {
            // Includes a bare LRM: without an opening RLM it is plain data
            buffer.push(ch);
            i += 1;
        }
    }
}

/// End (exclusive) of the RTL run starting at `start`.
///
/// Whitespace joins the run only when the whitespace stretch is followed by
/// another RTL code point; trailing whitespace is left outside.
fn rtl_run_end(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() {
        let ch = chars[i];
        if is_rtl(ch) {
            i += 1;
        } else if ch.is_whitespace() {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && is_rtl(chars[j]) {
                i = j;
            } else {
                break;
            }
        } else {
            break;
        }
    }
    i
}
