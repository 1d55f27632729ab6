//! Named constructors for `ResolveError`.

use super::ResolveError;

impl ResolveError {
    /// Construct an unsupported-input error for `processor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use input_resolver::ResolveError;
    /// let e = ResolveError::unsupported_input("HTTP", "input_resolver::HttpRequest");
    /// assert!(matches!(e, ResolveError::UnsupportedInput { processor: "HTTP", .. }));
    /// ```
    #[must_use]
    pub const fn unsupported_input(processor: &'static str, expected: &'static str) -> Self {
        Self::UnsupportedInput {
            processor,
            expected,
        }
    }

    /// Construct an error naming an option key outside the recognised set.
    #[must_use]
    pub fn unrecognized_option(key: impl Into<String>) -> Self {
        Self::UnrecognizedOption { key: key.into() }
    }

    /// Construct an error for a recognised option with a malformed value.
    ///
    /// # Examples
    ///
    /// ```
    /// use input_resolver::ResolveError;
    /// let e = ResolveError::invalid_option("order", "unknown source tag 'X'");
    /// assert_eq!(
    ///     e.to_string(),
    ///     "invalid value for option 'order': unknown source tag 'X'"
    /// );
    /// ```
    #[must_use]
    pub fn invalid_option(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Construct an error for a typed field that rejected its value.
    #[must_use]
    pub fn field_assignment(field: impl Into<String>, source: serde_json::Error) -> Self {
        Self::FieldAssignment {
            field: field.into(),
            source,
        }
    }
}
