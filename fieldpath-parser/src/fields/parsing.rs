//! Public entry points
//!
//! ```rust,ignore
//! use fieldpath_parser::fields::{parse, Markers};
//!
//! let paths = parse(Some("a.b.(c,d),h.i"), &Markers::default(), &[]);
//! assert_eq!(paths, ["a.b.c", "a.b.d", "h.i"]);
//! ```
//!
//! Everything here is a pure function of its arguments. A [`FieldsParser`] holds
//! no mutable state and can be shared across threads.

use super::error::ParseError;
use super::expansion::Expander;
use super::markers::Markers;
use super::splitting::split;

/// Expands `raw` into its ordered list of paths.
///
/// An absent or empty input returns `default` as is, without expansion.
pub fn parse(raw: Option<&str>, markers: &Markers, default: &[String]) -> Vec<String> {
    match raw {
        None | Some("") => default.to_vec(),
        Some(raw) => split(&Expander::new(markers).expand(raw), markers),
    }
}

/// [`parse`] with the default markers and an empty default
pub fn parse_fields(raw: &str) -> Vec<String> {
    parse(Some(raw), &Markers::default(), &[])
}

/// Reusable parser configuration
#[derive(Debug, Clone, Default)]
pub struct FieldsParser {
    markers: Markers,
    default: Vec<String>,
    max_expanded_len: Option<usize>,
}

impl FieldsParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Value returned for absent or empty input
    pub fn with_default<I, S>(mut self, default: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default = default.into_iter().map(Into::into).collect();
        self
    }

    /// Bounds the length of the working string during expansion. Unbounded by default.
    pub fn with_max_expanded_len(mut self, limit: usize) -> Self {
        self.max_expanded_len = Some(limit);
        self
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn max_expanded_len(&self) -> Option<usize> {
        self.max_expanded_len
    }

    pub fn parse(&self, raw: Option<&str>) -> Result<Vec<String>, ParseError> {
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return Ok(self.default.clone());
        };
        let expanded =
            Expander::new(&self.markers).expand_bounded(raw, self.max_expanded_len)?;
        Ok(split(&expanded, &self.markers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_return_default() {
        let default = vec!["id".to_string()];
        assert_eq!(parse(None, &Markers::default(), &default), default);
        assert_eq!(parse(Some(""), &Markers::default(), &default), default);
        assert!(parse_fields("").is_empty());
    }

    #[test]
    fn test_parse_fields() {
        assert_eq!(parse_fields("a.b.(c,d),h.i"), vec!["a.b.c", "a.b.d", "h.i"]);
    }

    #[test]
    fn test_parser_default_value() {
        let parser = FieldsParser::new().with_default(["site.id"]);
        assert_eq!(parser.parse(None), Ok(vec!["site.id".to_string()]));
        assert_eq!(parser.parse(Some("")), Ok(vec!["site.id".to_string()]));
    }

    #[test]
    fn test_parser_custom_markers() {
        let parser = FieldsParser::new().with_markers(Markers::new("[", "]", ";").unwrap());
        assert_eq!(
            parser.parse(Some("a.[b;c].d;e")),
            Ok(vec!["a.b.d".to_string(), "a.c.d".to_string(), "e".to_string()])
        );
    }

    #[test]
    fn test_parser_limit() {
        let parser = FieldsParser::new().with_max_expanded_len(8);
        assert_eq!(parser.max_expanded_len(), Some(8));
        assert!(matches!(
            parser.parse(Some("a.(b,c,d,e)")),
            Err(ParseError::ExpansionLimit { limit: 8, .. })
        ));
        assert_eq!(
            parser.parse(Some("a.(b,c)")),
            Ok(vec!["a.b".to_string(), "a.c".to_string()])
        );
    }
}
