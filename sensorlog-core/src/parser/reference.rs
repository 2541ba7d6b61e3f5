//! Reference line parsing

use crate::errors::{LogError, LogResult};
use crate::model::Reference;
use crate::validators::grammar::{parse_reference_number, REFERENCE_KEYWORD};

/// Parse `reference <temperature> <humidity> <monoxide>`
///
/// The shape (four tokens, literal `reference`) is checked before the values,
/// so `reference 1 2` is a format error even though its values are numeric.
pub fn parse_reference(line: &str) -> LogResult<Reference> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 4 || tokens[0] != REFERENCE_KEYWORD {
        return Err(LogError::invalid_reference_format());
    }

    let value = |token: &str| parse_reference_number(token).ok_or_else(LogError::invalid_reference_data);

    Ok(Reference {
        temperature: value(tokens[1])?,
        humidity: value(tokens[2])?,
        monoxide: value(tokens[3])?,
    })
}
