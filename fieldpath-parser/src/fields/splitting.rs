//! Final top-level split of a fully expanded string
//!
//!     Once expansion reaches its fixpoint the string holds no group, so every
//!     delimiter left is a top-level one. Empty segments (a stray delimiter, an empty
//!     group) are kept so the result length still matches the cartesian count.
//!
//!     Parameter blocks are not protected here: a raw delimiter inside `{...}` splits
//!     the path. Values that need the delimiter must be URL-encoded.

use super::markers::Markers;

pub fn split(expanded: &str, markers: &Markers) -> Vec<String> {
    expanded
        .split(markers.delimiter())
        .map(str::to_string)
        .collect()
}
