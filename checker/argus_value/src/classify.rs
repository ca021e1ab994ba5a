//! Classification of runtime values into human-readable type names.
//!
//! Classification is used for error text only; the pass/fail decision in
//! the checking engine goes through [`Value::matches`] directly.

use crate::tag::TYPE_TABLE;
use crate::value::Value;

/// Label for values whose type identity is absent from the table.
pub const CUSTOM_CLASS_LABEL: &str = "(custom-class instance)";

/// Resolve a value to the human-readable name of its type.
///
/// The sentinels resolve directly (no identity check is possible for
/// them); every other value is tested against the [`TYPE_TABLE`] in
/// declared order, skipping entries that carry no identity, and the first
/// match wins. Values the table does not know (user-defined class
/// instances) resolve to [`CUSTOM_CLASS_LABEL`].
///
/// Deterministic: the same value always resolves to the same name.
pub fn classify(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Undefined => "undefined",
        _ => TYPE_TABLE
            .iter()
            .filter_map(|entry| entry.identity.as_ref().map(|identity| (entry.name, identity)))
            .find(|(_, identity)| value.matches(identity))
            .map_or(CUSTOM_CLASS_LABEL, |(name, _)| name),
    }
}
