//! WhatsApp recipient handle.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`RecipientHandle`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipientHandleError {
    /// The input string is empty.
    #[error("recipient handle cannot be empty")]
    Empty,
    /// The input is shorter than a dialable international number.
    #[error("recipient handle must be at least {min} digits")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The input is longer than any E.164 number.
    #[error("recipient handle must be at most {max} digits")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains something other than ASCII digits.
    #[error("recipient handle must contain only digits (no '+', spaces, or dashes)")]
    NonDigit,
}

/// The destination of an order message: a `wa.me` phone handle.
///
/// The handle is the international phone number with no `+` prefix and no
/// separators, exactly as it appears in a `https://wa.me/<handle>` link.
///
/// ## Constraints
///
/// - 6-15 digits (E.164 upper bound)
/// - ASCII digits only
///
/// ## Examples
///
/// ```
/// use spaza_core::RecipientHandle;
///
/// assert!(RecipientHandle::parse("27795430029").is_ok());
///
/// assert!(RecipientHandle::parse("").is_err());            // empty
/// assert!(RecipientHandle::parse("+27795430029").is_err()); // '+' prefix
/// assert!(RecipientHandle::parse("079 543 0029").is_err()); // spaces
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub struct RecipientHandle(String);

impl RecipientHandle {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 6;

    /// Maximum number of digits (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `RecipientHandle` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, outside the 6-15 digit
    /// range, or contains non-digit characters.
    pub fn parse(s: &str) -> Result<Self, RecipientHandleError> {
        if s.is_empty() {
            return Err(RecipientHandleError::Empty);
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecipientHandleError::NonDigit);
        }

        if s.len() < Self::MIN_DIGITS {
            return Err(RecipientHandleError::TooShort {
                min: Self::MIN_DIGITS,
            });
        }

        if s.len() > Self::MAX_DIGITS {
            return Err(RecipientHandleError::TooLong {
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecipientHandle {
    type Err = RecipientHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RecipientHandle {
    type Error = RecipientHandleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<RecipientHandle> for String {
    fn from(handle: RecipientHandle) -> Self {
        handle.0
    }
}

impl AsRef<str> for RecipientHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(RecipientHandle::parse("27795430029").is_ok());
        assert!(RecipientHandle::parse("27610325686").is_ok());
        assert!(RecipientHandle::parse("123456").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            RecipientHandle::parse(""),
            Err(RecipientHandleError::Empty)
        ));
    }

    #[test]
    fn test_parse_plus_prefix() {
        assert!(matches!(
            RecipientHandle::parse("+27795430029"),
            Err(RecipientHandleError::NonDigit)
        ));
    }

    #[test]
    fn test_parse_separators() {
        assert!(matches!(
            RecipientHandle::parse("079 543 0029"),
            Err(RecipientHandleError::NonDigit)
        ));
        assert!(matches!(
            RecipientHandle::parse("079-543-0029"),
            Err(RecipientHandleError::NonDigit)
        ));
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(
            RecipientHandle::parse("12345"),
            Err(RecipientHandleError::TooShort { .. })
        ));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            RecipientHandle::parse("1234567890123456"),
            Err(RecipientHandleError::TooLong { .. })
        ));
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let parsed: Result<RecipientHandle, _> = serde_json::from_str("\"+2779\"");
        assert!(parsed.is_err());

        let handle: RecipientHandle = serde_json::from_str("\"27795430029\"").unwrap();
        assert_eq!(handle.as_str(), "27795430029");
    }
}
