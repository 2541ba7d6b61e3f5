//! Timestamp grammar
//!
//! Readings carry minute-resolution timestamps of the form `YYYY-MM-DDTHH:MM`.
//! The check is syntactic with plausible ranges, not calendrical:
//!
//! - year: any four digits
//! - month: `01`-`12`
//! - day: `01`-`31` regardless of month (`02-31` passes)
//! - hour: `00`-`23`
//! - minute: `00`-`59`
//!
//! This is the only timestamp grammar in the crate. The text validator, the
//! text parser and the JSON reading check all go through [`is_valid_timestamp`].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TIMESTAMP: Regex = Regex::new(
        r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])T([01][0-9]|2[0-3]):[0-5][0-9]$"
    )
    .expect("timestamp pattern is valid");
}

/// Check that `timestamp` conforms to `YYYY-MM-DDTHH:MM`
pub fn is_valid_timestamp(timestamp: &str) -> bool {
    TIMESTAMP.is_match(timestamp)
}
