//! Fixpoint rewrite loop
//!
//!     A pass takes every group the [Scanner] reports and replaces its span
//!     (`prefix group suffix`) with `prefix alt suffix` for each alternative, joined
//!     by the delimiter and kept in textual order. Passes repeat until the scanner
//!     finds nothing.
//!
//! Enumeration Order
//!
//!     Because a group only qualifies once nothing to its right nests, the order is the
//!     one produced by that substitution sequence, not a plain "outer varies slowest"
//!     product:
//!
//!         j.(k,l,m).(n,o.(p,q),(r,s).t)
//!         pass 1:  j.(k,l,m).(n,o.p,o.q,r.t,s.t)
//!         pass 2:  j.k.(n,o.p,o.q,r.t,s.t),j.l.(...),j.m.(...)
//!         pass 3:  j.k.n,j.k.o.p,j.k.o.q,j.k.r.t,j.k.s.t,j.l.n,...,j.m.s.t
//!
//! Cost
//!
//!     Output grows with the product of alternative counts, so deep nesting is
//!     exponential. [Expander::expand] never stops early; [Expander::expand_bounded]
//!     gives up once the working string passes a caller-chosen length.

use super::error::ParseError;
use super::markers::Markers;
use super::scanning::{GroupMatch, Scanner};
use tracing::{debug, trace};

pub struct Expander<'m> {
    scanner: Scanner<'m>,
}

impl<'m> Expander<'m> {
    pub fn new(markers: &'m Markers) -> Self {
        Self {
            scanner: Scanner::new(markers),
        }
    }

    /// Runs one rewrite pass. Returns `None` once no group is left.
    pub fn pass(&self, source: &str) -> Option<String> {
        let groups = self.scanner.scan(source);
        if groups.is_empty() {
            return None;
        }

        let mut output = String::with_capacity(source.len() * 2);
        let mut cursor = 0;
        for group in &groups {
            output.push_str(&source[cursor..group.span.start]);
            self.rewrite(group, &mut output);
            cursor = group.span.end;
        }
        output.push_str(&source[cursor..]);

        trace!(groups = groups.len(), len = output.len(), "rewrote groups");
        Some(output)
    }

    /// Expands until no group is left
    pub fn expand(&self, source: &str) -> String {
        let mut current = source.to_string();
        let mut passes = 0;
        while let Some(next) = self.pass(&current) {
            passes += 1;
            current = next;
        }
        debug!(passes, len = current.len(), "expansion reached fixpoint");
        current
    }

    /// Expands until no group is left, failing once the working string grows past `limit` bytes
    pub fn expand_bounded(&self, source: &str, limit: Option<usize>) -> Result<String, ParseError> {
        let mut current = source.to_string();
        let mut passes = 0;
        while let Some(next) = self.pass(&current) {
            passes += 1;
            if let Some(limit) = limit.filter(|limit| next.len() > *limit) {
                return Err(ParseError::ExpansionLimit {
                    limit,
                    reached: next.len(),
                    pass: passes,
                });
            }
            current = next;
        }
        debug!(passes, len = current.len(), "expansion reached fixpoint");
        Ok(current)
    }

    fn rewrite(&self, group: &GroupMatch<'_>, output: &mut String) {
        let delimiter = self.scanner.markers().delimiter();
        for (i, alternative) in group.alternatives(self.scanner.markers()).iter().enumerate() {
            if i > 0 {
                output.push_str(delimiter);
            }
            output.push_str(group.prefix);
            output.push_str(alternative);
            output.push_str(group.suffix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(source: &str) -> String {
        let markers = Markers::default();
        Expander::new(&markers).expand(source)
    }

    #[test]
    fn test_single_pass() {
        let markers = Markers::default();
        let expander = Expander::new(&markers);
        assert_eq!(
            expander.pass("j.(k,l,m).(n,o.(p,q),(r,s).t)").as_deref(),
            Some("j.(k,l,m).(n,o.p,o.q,r.t,s.t)")
        );
        assert_eq!(expander.pass("a.b,c"), None);
    }

    #[test]
    fn test_expand_to_fixpoint() {
        assert_eq!(expand("a.(b,c).d"), "a.b.d,a.c.d");
        assert_eq!(
            expand("a.(b,c).d.(e,f)"),
            "a.b.d.e,a.b.d.f,a.c.d.e,a.c.d.f"
        );
    }

    #[test]
    fn test_group_free_input_unchanged() {
        assert_eq!(expand("a.b.c,d.e"), "a.b.c,d.e");
    }

    #[test]
    fn test_empty_group_attaches_empty_alternative() {
        assert_eq!(expand("a.().b"), "a..b");
        assert_eq!(expand("()"), "");
    }

    #[test]
    fn test_custom_delimiter_rejoins_with_same_delimiter() {
        let markers = Markers::new("[", "]", "|").unwrap();
        assert_eq!(Expander::new(&markers).expand("a.[b|c].d"), "a.b.d|a.c.d");
    }

    #[test]
    fn test_bounded_expansion_stops() {
        let markers = Markers::default();
        let err = Expander::new(&markers)
            .expand_bounded("x.(a,b,c,d).(e,f,g,h)", Some(20))
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpansionLimit {
                limit: 20,
                reached: 55,
                pass: 1
            }
        );
    }

    #[test]
    fn test_bounded_expansion_within_limit() {
        let markers = Markers::default();
        assert_eq!(
            Expander::new(&markers).expand_bounded("a.(b,c)", Some(64)),
            Ok("a.b,a.c".to_string())
        );
    }
}
