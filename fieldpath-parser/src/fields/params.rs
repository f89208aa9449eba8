//! Parameter blocks
//!
//! A field may carry one `{key=value;...}` block, usually right after the segment it
//! configures:
//!
//!     site.id{first=param;another=try}
//!
//! Only the first block of a field is read. Keys are word characters right before
//! `=`; values run to the next `;` or `}` and are URL-decoded (`+` is a space), which
//! is how values carry commas, semicolons and other reserved characters. A repeated
//! key keeps its first position and takes the last value. [`parse_raw`] skips the
//! decoding and returns values exactly as written.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

pub const PARAMS_OPENER: char = '{';
pub const PARAMS_CLOSER: char = '}';
pub const PARAMS_SEPARATOR: char = ';';
pub const PARAMS_EQUAL: char = '=';

static PAIR_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"([A-Za-z0-9_]*?){equal}([^{separator}{closer}]*)",
        equal = regex::escape(&PARAMS_EQUAL.to_string()),
        separator = regex::escape(&PARAMS_SEPARATOR.to_string()),
        closer = regex::escape(&PARAMS_CLOSER.to_string()),
    );
    Regex::new(&pattern).unwrap()
});

/// A decoded key-value pair from a parameter block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub key: String,
    pub value: String,
}

impl Parameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, PARAMS_EQUAL, self.value)
    }
}

/// Byte range of the first complete `{...}` block, braces included
pub fn block_range(field: &str) -> Option<Range<usize>> {
    let open = field.find(PARAMS_OPENER)?;
    let close = open + field[open..].find(PARAMS_CLOSER)?;
    Some(open..close + PARAMS_CLOSER.len_utf8())
}

/// Reads the parameters of the first block in `field`, URL-decoding the values
pub fn parse(field: &str) -> Vec<Parameter> {
    read(field, true)
}

/// Like [`parse`], but keeps values as written
pub fn parse_raw(field: &str) -> Vec<Parameter> {
    read(field, false)
}

/// [`parse`] or [`parse_raw`], picked at runtime
pub fn read(field: &str, decode_values: bool) -> Vec<Parameter> {
    let Some(range) = block_range(field) else {
        return Vec::new();
    };

    let mut params: Vec<Parameter> = Vec::new();
    for captures in PAIR_REGEX.captures_iter(&field[range]) {
        let key = &captures[1];
        let value = if decode_values {
            decode(&captures[2])
        } else {
            captures[2].to_string()
        };
        match params.iter_mut().find(|param| param.key == key) {
            Some(existing) => existing.value = value,
            None => params.push(Parameter::new(key, value)),
        }
    }
    params
}

/// `field` without its first parameter block
pub fn strip(field: &str) -> String {
    match block_range(field) {
        Some(range) => format!("{}{}", &field[..range.start], &field[range.end..]),
        None => field.to_string(),
    }
}

fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes()))
            .into_owned(),
    }
}
