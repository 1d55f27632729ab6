//! Source identifiers.

use std::fmt;
use std::str::FromStr;

/// Identifies one of the fixed request input slots.
///
/// Variants are declared in default priority order, lowest first, so the
/// derived [`Ord`] matches the default resolution order `GPFCSHA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceTag {
    /// Query string parameters (`G`).
    Query,
    /// Decoded form body (`P`).
    Body,
    /// Uploaded files (`F`).
    Files,
    /// Cookies (`C`).
    Cookies,
    /// Server and environment metadata (`S`).
    Server,
    /// Request headers (`H`).
    Headers,
    /// Routing attributes (`A`).
    Attributes,
}

impl SourceTag {
    /// Every tag in default resolution order.
    pub const ALL: [Self; 7] = [
        Self::Query,
        Self::Body,
        Self::Files,
        Self::Cookies,
        Self::Server,
        Self::Headers,
        Self::Attributes,
    ];

    /// Single-letter code used in `order` and `restrict` options.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Query => 'G',
            Self::Body => 'P',
            Self::Files => 'F',
            Self::Cookies => 'C',
            Self::Server => 'S',
            Self::Headers => 'H',
            Self::Attributes => 'A',
        }
    }

    /// Long, lower-case name of the slot.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Body => "body",
            Self::Files => "files",
            Self::Cookies => "cookies",
            Self::Server => "server",
            Self::Headers => "headers",
            Self::Attributes => "attributes",
        }
    }

    /// Look up a tag by its single-letter code.
    ///
    /// ```
    /// use input_resolver::SourceTag;
    /// assert_eq!(SourceTag::from_letter('C'), Some(SourceTag::Cookies));
    /// assert_eq!(SourceTag::from_letter('c'), None);
    /// ```
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'G' => Some(Self::Query),
            'P' => Some(Self::Body),
            'F' => Some(Self::Files),
            'C' => Some(Self::Cookies),
            'S' => Some(Self::Server),
            'H' => Some(Self::Headers),
            'A' => Some(Self::Attributes),
            _ => None,
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Error returned when a string names no known source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown source tag '{0}'")]
pub struct UnknownSourceTag(pub String);

impl FromStr for SourceTag {
    type Err = UnknownSourceTag;

    /// Accepts the single-letter code or the long slot name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Self::from_letter(letter).ok_or_else(|| UnknownSourceTag(s.to_owned()));
        }
        match s {
            "query" | "get" => Ok(Self::Query),
            "body" | "request" | "post" => Ok(Self::Body),
            "files" => Ok(Self::Files),
            "cookies" => Ok(Self::Cookies),
            "server" => Ok(Self::Server),
            "headers" => Ok(Self::Headers),
            "attributes" | "attrs" => Ok(Self::Attributes),
            _ => Err(UnknownSourceTag(s.to_owned())),
        }
    }
}
