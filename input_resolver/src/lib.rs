//! Populate request objects from several prioritised input sources.
//!
//! A request arriving at an application carries values in up to seven
//! independent slots: query string, body, uploaded files, cookies, server
//! metadata, headers and routing attributes. This crate decides, field by
//! field, which slot's value wins, optionally renames source keys and
//! restricts which slots may supply a field, and assigns the result onto a
//! target object.
//!
//! The pipeline is:
//!
//! 1. [`ResolveOptions::from_value`] rejects unknown option keys and parses
//!    `order`, `map` and `restrict`;
//! 2. [`SourceSet`] snapshots the slots of a [`RequestEnvelope`];
//! 3. [`resolve`] overlays the slots in order into [`ResolvedFields`];
//! 4. [`populate`] assigns the values onto any [`FieldTarget`].
//!
//! The input processors ([`HttpInputProcessor`], [`JsonInputProcessor`],
//! [`ArrayInputProcessor`]) run the whole pipeline in one call.
//!
//! ```
//! use input_resolver::{FieldTarget, HttpInputProcessor, HttpRequest, ParameterBag, SourceTag};
//! use serde_json::json;
//!
//! #[derive(Debug, Default, FieldTarget)]
//! #[field_target(rename_all = "camelCase")]
//! struct SearchRequest {
//!     search_query: Option<String>,
//!     page_number: Option<u32>,
//!     session_id: Option<String>,
//! }
//!
//! let request = HttpRequest::new()
//!     .with_bag(SourceTag::Query, ParameterBag::from_iter([("q", json!("cheap hotels")), ("p", json!(3))]))
//!     .with_bag(SourceTag::Cookies, ParameterBag::from_iter([("PHPSESSID", "asd123")]));
//!
//! let mut search = SearchRequest::default();
//! HttpInputProcessor.initialize_from_http(
//!     &mut search,
//!     &request,
//!     &json!({"map": {"q": "searchQuery", "p": "pageNumber", "PHPSESSID": "sessionId"}}),
//! )?;
//! assert_eq!(search.search_query.as_deref(), Some("cheap hotels"));
//! assert_eq!(search.page_number, Some(3));
//! assert_eq!(search.session_id.as_deref(), Some("asd123"));
//! # Ok::<_, input_resolver::ResolveError>(())
//! ```

pub use input_resolver_macros::FieldTarget;

mod error;
mod input;
mod options;
mod populate;
mod resolve;
mod source;

pub use error::{DecodeError, ResolveError, ResolveResult};
pub use input::{
    ArrayInputProcessor, Decoder, HttpInputProcessor, InputProcessor, JsonDecoder,
    JsonInputProcessor,
};
pub use options::{
    FieldMap, RECOGNIZED_OPTIONS, ResolutionOrder, ResolveOptions, RestrictMap,
    validate_option_keys,
};
pub use populate::{FieldRecord, FieldTarget, populate};
pub use resolve::{Provenance, ResolvedFields, resolve, resolve_single};
pub use source::{HttpRequest, ParameterBag, RequestEnvelope, SourceSet, SourceTag, UnknownSourceTag};

/// Items referenced by `#[derive(FieldTarget)]` expansions.
#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
