//! Per-call snapshot of every input slot.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::{RequestEnvelope, SourceTag};

/// Read-only snapshot of the input slots consulted by a single resolution.
///
/// Slots are stored as [`Cow`]s so a snapshot taken from a borrowed request
/// avoids cloning. A slot that was never inserted reads as an empty mapping.
#[derive(Clone, Debug, Default)]
pub struct SourceSet<'a> {
    slots: BTreeMap<SourceTag, Cow<'a, Map<String, Value>>>,
}

impl<'a> SourceSet<'a> {
    /// Create a snapshot with no populated slots.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Capture all seven slots from `envelope`.
    #[must_use]
    pub fn from_envelope<E: RequestEnvelope + ?Sized>(envelope: &'a E) -> Self {
        let slots = SourceTag::ALL
            .into_iter()
            .map(|tag| (tag, envelope.all(tag)))
            .collect();
        Self { slots }
    }

    /// Add or replace the owned mapping for `tag`, returning the updated set.
    #[must_use]
    pub fn with(mut self, tag: SourceTag, values: Map<String, Value>) -> Self {
        self.insert(tag, Cow::Owned(values));
        self
    }

    /// Add or replace the mapping for `tag`.
    pub fn insert(&mut self, tag: SourceTag, values: Cow<'a, Map<String, Value>>) {
        self.slots.insert(tag, values);
    }

    /// Mapping held for `tag`, if the slot was captured.
    #[must_use]
    pub fn get(&self, tag: SourceTag) -> Option<&Map<String, Value>> {
        self.slots.get(&tag).map(|values| &**values)
    }

    /// Iterate captured slots in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (SourceTag, &Map<String, Value>)> {
        self.slots.iter().map(|(tag, values)| (*tag, &**values))
    }
}
