//! Canonical line grammar for text logs
//!
//! ```text
//! log       := reference (header reading*)*
//! reference := "reference" REF REF REF
//! header    := KIND NAME              KIND = thermometer | humidity | monoxide
//! reading   := TIMESTAMP VALUE        TIMESTAMP per crate::time
//! NAME      := [A-Za-z0-9_]+ "-" DIGITS
//! REF       := DIGITS ("." DIGITS)?
//! VALUE     := DIGIT DIGIT? ("." DIGITS)?
//! ```
//!
//! Numbers are unsigned. Reading values carry at most two integer digits.
//!
//! Tokens are separated by whitespace. The text validator and the text parser
//! both classify lines with the predicates below, so validation can never
//! accept a line that parsing would then throw away.

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::{Reading, SensorKind};
use crate::time::is_valid_timestamp;

lazy_static! {
    static ref REFERENCE_NUM: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("reference pattern is valid");
    static ref READING_NUM: Regex = Regex::new(r"^[0-9]{1,2}(\.[0-9]+)?$").expect("reading pattern is valid");
    static ref SENSOR_NAME: Regex = Regex::new(r"^[A-Za-z0-9_]+-[0-9]+$").expect("sensor name pattern is valid");
}

/// Keyword opening the reference line
pub const REFERENCE_KEYWORD: &str = "reference";

/// A trimmed, non-blank line with its 1-based position in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number, 0 when unknown
    pub number: usize,
    /// Trimmed content
    pub text: &'a str,
}

/// Split `text` into trimmed, non-blank lines
///
/// `\r\n` and `\n` endings are both accepted; stray `\r` is trimmed with the
/// rest of the surrounding whitespace.
pub fn logical_lines(text: &str) -> Vec<Line<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(index, raw)| Line { number: index + 1, text: raw.trim() })
        .filter(|line| !line.text.is_empty())
        .collect()
}

/// Check a token against the reference value grammar
pub fn is_reference_number(token: &str) -> bool {
    REFERENCE_NUM.is_match(token)
}

/// Parse a reference value token
pub fn parse_reference_number(token: &str) -> Option<f64> {
    is_reference_number(token).then(|| token.parse().ok()).flatten()
}

/// Check a token against the reading value grammar
pub fn is_reading_number(token: &str) -> bool {
    READING_NUM.is_match(token)
}

/// Parse a reading value token
pub fn parse_reading_number(token: &str) -> Option<f64> {
    is_reading_number(token).then(|| token.parse().ok()).flatten()
}

/// Sensor kind named by the first token of `line`, if any
pub fn header_keyword(line: &str) -> Option<SensorKind> {
    line.split_whitespace().next().and_then(SensorKind::from_keyword)
}

/// Whether `line` has the `reference NUM NUM NUM` shape
pub fn is_reference_line(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.len() == 4 && tokens[0] == REFERENCE_KEYWORD && tokens[1..].iter().all(|token| is_reference_number(token))
}

/// Split a header line into kind and name
pub fn parse_header(line: &str) -> Option<(SensorKind, &str)> {
    let mut tokens = line.split_whitespace();
    let kind = tokens.next().and_then(SensorKind::from_keyword)?;
    let name = tokens.next()?;
    if tokens.next().is_some() || !SENSOR_NAME.is_match(name) {
        return None;
    }
    Some((kind, name))
}

/// Whether `line` is a well-formed sensor header
pub fn is_header_line(line: &str) -> bool {
    parse_header(line).is_some()
}

/// Parse a `TIMESTAMP NUM` reading line
pub fn parse_reading(line: &str) -> Option<Reading> {
    let mut tokens = line.split_whitespace();
    let timestamp = tokens.next()?;
    let value = tokens.next()?;
    if tokens.next().is_some() || !is_valid_timestamp(timestamp) {
        return None;
    }
    let value = parse_reading_number(value)?;
    Some(Reading { timestamp: timestamp.to_string(), value })
}

/// Whether `line` is a well-formed reading
pub fn is_reading_line(line: &str) -> bool {
    parse_reading(line).is_some()
}
