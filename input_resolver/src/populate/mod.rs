//! Assign resolved values onto target objects.
//!
//! Targets expose their fields by name through [`FieldTarget`], which is
//! usually derived. The populator only ever touches declared fields that the
//! resolved mapping contains; every other field keeps whatever value it
//! already had.

mod record;
mod target;

pub use record::FieldRecord;
pub use target::FieldTarget;

use serde_json::Value;
use tracing::{debug, trace};

use crate::{ResolveResult, ResolvedFields};

/// Copy every resolved value whose name `target` declares onto `target`.
///
/// Keys in `resolved` that `target` does not declare are ignored. Calling this
/// twice with the same mapping leaves `target` as a single call would.
///
/// # Errors
///
/// Returns [`crate::ResolveError::FieldAssignment`] when a typed field rejects
/// its value. Assignment goes through [`FieldTarget::set_fields`], so a failed
/// call leaves `target` as it found it.
///
/// ```
/// use input_resolver::{FieldRecord, ResolveOptions, SourceSet, SourceTag, populate, resolve};
/// use serde_json::json;
///
/// let query = json!({"q": "cheap hotels", "debug": true});
/// let sources = SourceSet::new()
///     .with(SourceTag::Query, query.as_object().cloned().unwrap_or_default());
/// let resolved = resolve(&sources, &ResolveOptions::new().rename("q", "searchQuery"));
///
/// let mut target = FieldRecord::new(["searchQuery", "pageNumber"])
///     .with_default("pageNumber", 1);
/// populate(&mut target, &resolved)?;
/// assert_eq!(target.get("searchQuery"), Some(&json!("cheap hotels")));
/// assert_eq!(target.get("pageNumber"), Some(&json!(1)));
/// assert_eq!(target.get("debug"), None);
/// # Ok::<_, input_resolver::ResolveError>(())
/// ```
pub fn populate<'t, T>(target: &'t mut T, resolved: &ResolvedFields) -> ResolveResult<&'t mut T>
where
    T: FieldTarget + ?Sized,
{
    let mut staged: Vec<(&str, Value)> = Vec::with_capacity(resolved.len());
    for (name, value) in resolved.iter() {
        if target.declares(name) {
            staged.push((name, value.clone()));
        } else {
            trace!(field = name, "ignored resolved value with no matching target field");
        }
    }
    let assigned = target.set_fields(&staged)?;
    debug!(assigned, resolved = resolved.len(), "populated target");
    Ok(target)
}
