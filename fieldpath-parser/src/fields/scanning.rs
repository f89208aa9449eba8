//! Group locator
//!
//!     The scanner finds the groups that can be rewritten right now. A candidate
//!     group qualifies when all of the following hold:
//!
//!     1. Its prefix starts at the beginning of the string or right after a delimiter
//!        or open marker. The prefix is the text run up to the open marker and never
//!        contains a marker itself.
//!     2. Its content holds no open or close marker (it is an innermost group).
//!     3. Nothing to the right of its close marker nests: no open marker is followed
//!        by another open marker before a close marker. This is what makes expansion
//!        proceed deepest-first.
//!
//!     The suffix is then taken greedily: text and already flat groups, up to the next
//!     delimiter, close marker, or open marker that is never closed. Flat groups in the
//!     suffix are copied onto every alternative and expanded by a later pass.
//!
//!     Candidates are collected left to right without overlap, so one scan describes
//!     one full rewrite pass.

use super::markers::Markers;
use super::token::{tokenize, Token};
use std::ops::Range;

/// A group ready to be rewritten, with the text reattached to each alternative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMatch<'a> {
    pub prefix: &'a str,
    /// Raw group content, still delimiter-joined
    pub alternatives: &'a str,
    pub suffix: &'a str,
    /// Byte range covering prefix, group and suffix
    pub span: Range<usize>,
}

impl<'a> GroupMatch<'a> {
    /// Splits the raw content on the delimiter. An empty group yields one empty alternative.
    pub fn alternatives(&self, markers: &Markers) -> Vec<&'a str> {
        self.alternatives.split(markers.delimiter()).collect()
    }
}

pub struct Scanner<'m> {
    markers: &'m Markers,
}

impl<'m> Scanner<'m> {
    pub fn new(markers: &'m Markers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &'m Markers {
        self.markers
    }

    /// Leftmost group that can be rewritten, if any
    pub fn find<'a>(&self, source: &'a str) -> Option<GroupMatch<'a>> {
        self.scan(source).into_iter().next()
    }

    /// Every group rewritable in one pass, left to right, non-overlapping
    pub fn scan<'a>(&self, source: &'a str) -> Vec<GroupMatch<'a>> {
        let tokens = tokenize(source, self.markers);
        let nested = nesting_ahead(&tokens);

        let mut matches = Vec::new();
        let mut index = 0;
        while index < tokens.len() {
            let valid_start = index == 0 || tokens[index - 1].0.is_boundary();
            match valid_start
                .then(|| match_group(source, &tokens, &nested, index))
                .flatten()
            {
                Some((group, next)) => {
                    matches.push(group);
                    index = next;
                }
                None => index += 1,
            }
        }
        matches
    }
}

/// `nested[i]` tells whether some open marker at or after token `i` is directly
/// followed (ignoring text and delimiters) by another open marker.
fn nesting_ahead(tokens: &[(Token, Range<usize>)]) -> Vec<bool> {
    let mut nested = vec![false; tokens.len() + 1];
    let mut next_marker: Option<Token> = None;
    for (i, (token, _)) in tokens.iter().enumerate().rev() {
        nested[i] = nested[i + 1];
        match token {
            Token::Open => {
                nested[i] |= next_marker == Some(Token::Open);
                next_marker = Some(Token::Open);
            }
            Token::Close => next_marker = Some(Token::Close),
            Token::Delimiter | Token::Text => {}
        }
    }
    nested
}

/// Tries to match `prefix open content close suffix` starting at token `start`.
/// Returns the match and the index of the first token after it.
fn match_group<'a>(
    source: &'a str,
    tokens: &[(Token, Range<usize>)],
    nested: &[bool],
    start: usize,
) -> Option<(GroupMatch<'a>, usize)> {
    let (prefix, open) = match tokens[start] {
        (Token::Text, ref range) => (&source[range.clone()], start + 1),
        (Token::Open, _) => ("", start),
        _ => return None,
    };
    if !matches!(tokens.get(open), Some((Token::Open, _))) {
        return None;
    }

    let close = open
        + 1
        + tokens[open + 1..]
            .iter()
            .position(|(token, _)| matches!(token, Token::Open | Token::Close))?;
    if tokens[close].0 != Token::Close || nested[close + 1] {
        return None;
    }
    let content = tokens[open].1.end..tokens[close].1.start;

    let mut end = close + 1;
    while let Some((token, _)) = tokens.get(end) {
        match token {
            Token::Text => end += 1,
            Token::Open => {
                let Some(offset) = tokens[end + 1..]
                    .iter()
                    .position(|(token, _)| *token == Token::Close)
                else {
                    break;
                };
                end += offset + 2;
            }
            Token::Delimiter | Token::Close => break,
        }
    }
    let suffix = tokens[close].1.end..tokens[end - 1].1.end;

    let group = GroupMatch {
        prefix,
        alternatives: &source[content],
        suffix: &source[suffix.clone()],
        span: tokens[start].1.start..suffix.end,
    };
    Some((group, end))
}
