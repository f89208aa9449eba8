//! Field path expansion
//!
//!     The grammar has three moving parts: groups, alternatives and parameter blocks.
//!
//!     Groups:
//!         An open marker, a delimiter-separated list of alternatives, and a close marker.
//!         Text right before a group (its prefix) and right after it (its suffix) is
//!         reattached to every alternative, so `a.(b,c).d` reads as `a.b.d,a.c.d`.
//!
//!     Nesting:
//!         Alternatives may contain groups themselves. Expansion always rewrites the
//!         innermost groups first and only once nothing to their right nests any further,
//!         which fixes the enumeration order. See [expansion] for a worked example.
//!
//!     Parameter Blocks:
//!         `{key=value;...}` annotations ride along with the segment they follow. They are
//!         plain text to the expander. Values must be URL-encoded if they need to carry the
//!         delimiter; [params] decodes them.
//!
//!     Pipeline:
//!         raw string -> Expander (passes until fixpoint, each pass driven by the Scanner)
//!         -> Splitter -> ordered paths.

pub mod error;
pub mod expansion;
pub mod markers;
pub mod params;
pub mod parsing;
pub mod scanning;
pub mod splitting;
pub mod token;

pub use error::{MarkerError, ParseError};
pub use expansion::Expander;
pub use markers::{MarkerRole, Markers};
pub use params::Parameter;
pub use parsing::{parse, parse_fields, FieldsParser};
pub use scanning::{GroupMatch, Scanner};
pub use splitting::split;
pub use token::{tokenize, Token};
