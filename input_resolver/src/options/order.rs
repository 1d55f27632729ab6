//! Resolution order parsing.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::{ResolveError, ResolveResult, SourceTag, UnknownSourceTag};

/// Ordered, duplicate-free sequence of sources, lowest priority first.
///
/// When two sources both define a field, the one listed later wins. Sources
/// left out of the order are never consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionOrder(Vec<SourceTag>);

impl Default for ResolutionOrder {
    /// `GPFCSHA`: attributes win over headers, server, cookies, files, body
    /// and query, in that order.
    fn default() -> Self {
        Self(SourceTag::ALL.to_vec())
    }
}

impl ResolutionOrder {
    /// Build an order from `tags`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidOption`] when `tags` is empty or
    /// repeats a tag.
    pub fn new(tags: impl IntoIterator<Item = SourceTag>) -> ResolveResult<Self> {
        let mut order = Vec::with_capacity(SourceTag::ALL.len());
        for tag in tags {
            if order.contains(&tag) {
                return Err(ResolveError::invalid_option(
                    "order",
                    format!("source tag '{tag}' appears more than once"),
                ));
            }
            order.push(tag);
        }
        if order.is_empty() {
            return Err(ResolveError::invalid_option(
                "order",
                "at least one source tag is required",
            ));
        }
        Ok(Self(order))
    }

    /// Parse the `order` option: a letter string such as `"GPC"` or an array
    /// of letters or slot names.
    pub(crate) fn from_value(value: &Value) -> ResolveResult<Self> {
        match value {
            Value::String(letters) => letters.parse(),
            Value::Array(items) => {
                let tags = items
                    .iter()
                    .map(|item| tag_from_value("order", item))
                    .collect::<ResolveResult<Vec<_>>>()?;
                Self::new(tags)
            }
            other => Err(ResolveError::invalid_option(
                "order",
                format!("expected a string or array of source tags, found {}", kind(other)),
            )),
        }
    }

    /// Tags in resolution order.
    #[must_use]
    pub fn tags(&self) -> &[SourceTag] {
        &self.0
    }

    /// Whether `tag` takes part in resolution.
    #[must_use]
    pub fn contains(&self, tag: SourceTag) -> bool {
        self.0.contains(&tag)
    }
}

impl FromStr for ResolutionOrder {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_letters("order", s)?)
    }
}

impl fmt::Display for ResolutionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|tag| write!(f, "{tag}"))
    }
}

/// Parse a compact letter string (`"SC"`) into tags for option `key`.
pub(super) fn parse_letters(key: &str, letters: &str) -> ResolveResult<Vec<SourceTag>> {
    letters
        .chars()
        .map(|letter| {
            SourceTag::from_letter(letter).ok_or_else(|| {
                ResolveError::invalid_option(key, format!("unknown source tag '{letter}'"))
            })
        })
        .collect()
}

/// Parse one array element naming a source for option `key`.
pub(super) fn tag_from_value(key: &str, value: &Value) -> ResolveResult<SourceTag> {
    let Value::String(name) = value else {
        return Err(ResolveError::invalid_option(
            key,
            format!("expected a source tag string, found {}", kind(value)),
        ));
    };
    name.parse()
        .map_err(|err: UnknownSourceTag| ResolveError::invalid_option(key, err.to_string()))
}

/// Short description of a JSON value's type for error messages.
pub(super) const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
