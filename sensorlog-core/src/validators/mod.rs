//! Structural validators
//!
//! Checks that run before any parsing or evaluation:
//!
//! - [`grammar`]: the line grammar shared with the text parser
//! - [`text`]: whole-document check for text logs
//! - [`json`]: shape check and item decoding for JSON logs

pub mod grammar;
pub mod json;
pub mod text;

pub use json::{decode_json_log, is_valid_json_format, JsonLog, JsonSensor};
pub use text::is_valid_text_format;
