//! Text log syntax validation
//!
//! Walks the logical lines once, checking each against the slot it must
//! fill: the reference line first, then alternating header / readings blocks.
//! A header with zero readings is syntactically fine here; the parser drops
//! such sensors later.

use super::grammar::{is_header_line, is_reading_line, is_reference_line, logical_lines};

/// Check that `text` conforms to the text log grammar
pub fn is_valid_text_format(text: &str) -> bool {
    let lines = logical_lines(text);
    let mut cursor = lines.iter();

    match cursor.next() {
        Some(line) if is_reference_line(line.text) => {}
        Some(line) => {
            log_debug!("text log rejected at line {}: expected reference line", line.number);
            return false;
        }
        None => {
            log_debug!("text log rejected: no content");
            return false;
        }
    }

    let mut pending = cursor.peekable();
    while let Some(line) = pending.next() {
        if !is_header_line(line.text) {
            log_debug!("text log rejected at line {}: expected sensor header", line.number);
            return false;
        }
        while pending.next_if(|line| is_reading_line(line.text)).is_some() {}
    }

    true
}
