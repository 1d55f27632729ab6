//! The settable-by-name capability targets implement.

use serde_json::Value;
use tracing::debug;

use crate::ResolveResult;

/// A structure whose fields can be listed, read and written by name.
///
/// Usually derived with `#[derive(FieldTarget)]`; implement it by hand for
/// targets that need custom storage.
///
/// ```
/// use input_resolver::{FieldTarget, ResolveResult};
/// use serde_json::Value;
///
/// #[derive(Default)]
/// struct Search {
///     query: Value,
/// }
///
/// impl FieldTarget for Search {
///     fn field_names(&self) -> Vec<String> {
///         vec![String::from("query")]
///     }
///
///     fn field(&self, name: &str) -> Option<Value> {
///         (name == "query").then(|| self.query.clone())
///     }
///
///     fn set_field(&mut self, name: &str, value: Value) -> ResolveResult<bool> {
///         if name != "query" {
///             return Ok(false);
///         }
///         self.query = value;
///         Ok(true)
///     }
/// }
///
/// let mut search = Search::default();
/// assert!(search.set_field("query", Value::from("hotels"))?);
/// assert!(!search.set_field("page", Value::from(2))?);
/// assert_eq!(search.field("query"), Some(Value::from("hotels")));
/// # Ok::<_, input_resolver::ResolveError>(())
/// ```
pub trait FieldTarget {
    /// Names of the fields the populator may assign, in declaration order.
    fn field_names(&self) -> Vec<String>;

    /// Whether `name` is one of [`Self::field_names`].
    fn declares(&self, name: &str) -> bool {
        self.field_names().iter().any(|declared| declared == name)
    }

    /// Current value of `name`, or `None` when undeclared or unreadable.
    fn field(&self, name: &str) -> Option<Value>;

    /// Assign `value` to `name`.
    ///
    /// Returns `Ok(false)` when the target does not declare `name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResolveError::FieldAssignment`] when the field's type
    /// cannot hold `value`.
    fn set_field(&mut self, name: &str, value: Value) -> ResolveResult<bool>;

    /// Assign every entry of `values`, or none of them.
    ///
    /// Returns how many entries were assigned. A later entry for the same
    /// name replaces an earlier one.
    ///
    /// The provided implementation assigns one entry at a time and, on
    /// failure, writes back what [`Self::field`] reported beforehand. That is
    /// only exact when `field` reproduces every value losslessly; derived
    /// targets override it to convert all values before touching any field.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResolveError::FieldAssignment`] for the first value a
    /// field rejects, after which the target is unchanged.
    fn set_fields(&mut self, values: &[(&str, Value)]) -> ResolveResult<usize> {
        let mut assigned: Vec<(&str, Option<Value>)> = Vec::new();
        for &(name, ref value) in values {
            let previous = self.field(name);
            match self.set_field(name, value.clone()) {
                Ok(true) => assigned.push((name, previous)),
                Ok(false) => {}
                Err(err) => {
                    restore(self, assigned);
                    return Err(err);
                }
            }
        }
        Ok(assigned.len())
    }
}

/// Put back the values captured before a failed assignment.
fn restore<T: FieldTarget + ?Sized>(target: &mut T, assigned: Vec<(&str, Option<Value>)>) {
    for (name, previous) in assigned.into_iter().rev() {
        let Some(previous) = previous else {
            debug!(field = name, "no readable previous value to restore");
            continue;
        };
        if let Err(err) = target.set_field(name, previous) {
            debug!(field = name, error = %err, "failed to restore previous value");
        }
    }
}
