//! Marker-aware tokenizer
//!
//!     Splits a string into marker tokens and the text runs between them. Every
//!     token carries its byte range in the source, so later stages slice the
//!     source string instead of copying text around.
//!
//!     Parameter blocks are not special here: `{c=d;e=f}` is text as long as it
//!     holds no marker.

use super::markers::Markers;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
    Delimiter,
    /// A maximal run of characters that starts no marker
    Text,
}

impl Token {
    pub fn is_boundary(self) -> bool {
        matches!(self, Token::Open | Token::Delimiter)
    }
}

pub fn tokenize(source: &str, markers: &Markers) -> Vec<(Token, Range<usize>)> {
    let candidates = [
        (Token::Open, markers.open()),
        (Token::Close, markers.close()),
        (Token::Delimiter, markers.delimiter()),
    ];

    let mut tokens = Vec::new();
    let mut text_start: Option<usize> = None;
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        match candidates
            .iter()
            .find(|(_, marker)| rest.starts_with(marker))
        {
            Some((token, marker)) => {
                if let Some(start) = text_start.take() {
                    tokens.push((Token::Text, start..pos));
                }
                tokens.push((*token, pos..pos + marker.len()));
                pos += marker.len();
            }
            None => {
                text_start.get_or_insert(pos);
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if let Some(start) = text_start {
        tokens.push((Token::Text, start..source.len()));
    }
    tokens
}
