//! Request envelopes: the collaborator that owns the raw input slots.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::SourceTag;

/// Read access to a request's input slots and raw body.
///
/// Implement this for a web framework's request type to feed it to
/// [`crate::HttpInputProcessor::initialize_from_http`] or
/// [`crate::JsonInputProcessor::initialize_from_json`].
pub trait RequestEnvelope {
    /// All key/value pairs currently held by the slot identified by `tag`.
    fn all(&self, tag: SourceTag) -> Cow<'_, Map<String, Value>>;

    /// Raw request body.
    fn content(&self) -> &[u8];
}

/// Flat key/value container backing one request slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterBag(Map<String, Value>);

impl ParameterBag {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Every key/value pair in the bag.
    #[must_use]
    pub const fn all(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Number of entries in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ParameterBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ParameterBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// In-memory HTTP request envelope with one [`ParameterBag`] per slot.
///
/// ```
/// use input_resolver::{HttpRequest, ParameterBag, RequestEnvelope, SourceTag};
/// use serde_json::json;
///
/// let request = HttpRequest::new()
///     .with_bag(SourceTag::Query, ParameterBag::from_iter([("q", "cheap hotels")]))
///     .with_content(r#"{"page": 2}"#);
/// assert_eq!(request.all(SourceTag::Query).get("q"), Some(&json!("cheap hotels")));
/// assert!(request.all(SourceTag::Cookies).is_empty());
/// assert_eq!(request.content(), br#"{"page": 2}"#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HttpRequest {
    query: ParameterBag,
    request: ParameterBag,
    files: ParameterBag,
    cookies: ParameterBag,
    server: ParameterBag,
    headers: ParameterBag,
    attributes: ParameterBag,
    content: Vec<u8>,
}

impl HttpRequest {
    /// Create a request with empty slots and an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bag for `tag`.
    #[must_use]
    pub fn with_bag(mut self, tag: SourceTag, bag: ParameterBag) -> Self {
        *self.bag_mut(tag) = bag;
        self
    }

    /// Replace the raw body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }

    /// Borrow the bag for `tag`.
    #[must_use]
    pub const fn bag(&self, tag: SourceTag) -> &ParameterBag {
        match tag {
            SourceTag::Query => &self.query,
            SourceTag::Body => &self.request,
            SourceTag::Files => &self.files,
            SourceTag::Cookies => &self.cookies,
            SourceTag::Server => &self.server,
            SourceTag::Headers => &self.headers,
            SourceTag::Attributes => &self.attributes,
        }
    }

    /// Mutably borrow the bag for `tag`.
    pub const fn bag_mut(&mut self, tag: SourceTag) -> &mut ParameterBag {
        match tag {
            SourceTag::Query => &mut self.query,
            SourceTag::Body => &mut self.request,
            SourceTag::Files => &mut self.files,
            SourceTag::Cookies => &mut self.cookies,
            SourceTag::Server => &mut self.server,
            SourceTag::Headers => &mut self.headers,
            SourceTag::Attributes => &mut self.attributes,
        }
    }
}

impl RequestEnvelope for HttpRequest {
    fn all(&self, tag: SourceTag) -> Cow<'_, Map<String, Value>> {
        Cow::Borrowed(self.bag(tag).all())
    }

    fn content(&self) -> &[u8] {
        &self.content
    }
}
