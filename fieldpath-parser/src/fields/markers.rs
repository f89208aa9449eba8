//! Marker configuration
//!
//!     Markers are literal tokens, one or more characters long. The scanner assumes
//!     that at any position at most one marker can start, so no marker may be empty
//!     or contain another one. That precondition is checked once, here, and a
//!     [`Markers`] value is valid for its whole life.

use super::error::MarkerError;
use std::fmt;

/// Which marker a value configures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Open,
    Close,
    Delimiter,
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerRole::Open => write!(f, "open"),
            MarkerRole::Close => write!(f, "close"),
            MarkerRole::Delimiter => write!(f, "delimiter"),
        }
    }
}

/// Group open/close markers and the alternative delimiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    open: String,
    close: String,
    delimiter: String,
}

impl Markers {
    pub const DEFAULT_OPEN: &'static str = "(";
    pub const DEFAULT_CLOSE: &'static str = ")";
    pub const DEFAULT_DELIMITER: &'static str = ",";

    pub fn new(
        open: impl Into<String>,
        close: impl Into<String>,
        delimiter: impl Into<String>,
    ) -> Result<Self, MarkerError> {
        let markers = Self {
            open: open.into(),
            close: close.into(),
            delimiter: delimiter.into(),
        };
        markers.validate()?;
        Ok(markers)
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn roles(&self) -> [(MarkerRole, &str); 3] {
        [
            (MarkerRole::Open, self.open.as_str()),
            (MarkerRole::Close, self.close.as_str()),
            (MarkerRole::Delimiter, self.delimiter.as_str()),
        ]
    }

    fn validate(&self) -> Result<(), MarkerError> {
        let roles = self.roles();
        for (role, value) in roles {
            if value.is_empty() {
                return Err(MarkerError::Empty { role });
            }
        }
        for (i, (first, first_value)) in roles.iter().enumerate() {
            for (second, second_value) in &roles[i + 1..] {
                if first_value.contains(second_value) || second_value.contains(first_value) {
                    return Err(MarkerError::Overlap {
                        first: *first,
                        first_value: first_value.to_string(),
                        second: *second,
                        second_value: second_value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: Self::DEFAULT_OPEN.to_string(),
            close: Self::DEFAULT_CLOSE.to_string(),
            delimiter: Self::DEFAULT_DELIMITER.to_string(),
        }
    }
}
