//! Runtime values under check.
//!
//! [`Value`] is the owned representation of a dynamically-typed argument at
//! the moment it is checked. Construction goes through the factory methods
//! where a conversion is involved (`Value::string`, `Value::object`, …);
//! the sentinel and scalar variants are used directly.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::tag::TypeTag;

/// Named reference to a callable value.
///
/// The checker never invokes functions; it only needs a stable identity and
/// a name for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionRef {
    name: Box<str>,
}

impl FunctionRef {
    /// Create a reference to a named callable.
    pub fn new(name: impl Into<Box<str>>) -> Self {
        FunctionRef { name: name.into() }
    }

    /// The callable's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Instance of a user-defined class: the class name plus its fields.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct InstanceValue {
    class: Box<str>,
    fields: FxHashMap<String, Value>,
}

impl InstanceValue {
    /// Create an instance of the named class.
    pub fn new(class: impl Into<Box<str>>, fields: FxHashMap<String, Value>) -> Self {
        InstanceValue {
            class: class.into(),
            fields,
        }
    }

    /// The class name this instance was constructed from.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A dynamically-typed runtime value at the moment of a check.
///
/// The two absence sentinels are distinct on purpose: `Null` is an explicit
/// "no value" that still counts as supplied, while `Undefined` marks an
/// argument that was never supplied at all.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// Explicit "no value"; present.
    Null,
    /// Never supplied.
    #[default]
    Undefined,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value.
    Str(String),
    /// Ordered list of values.
    Array(Vec<Value>),
    /// Plain keyed object.
    Object(FxHashMap<String, Value>),
    /// Callable reference.
    Function(FunctionRef),
    /// Calendar timestamp, milliseconds since the Unix epoch.
    Date(i64),
    /// Regular-expression source text.
    Regexp(String),
    /// Plain error carrying a message.
    Error(String),
    /// Type error carrying a message. Distinct identity from [`Value::Error`].
    TypeError(String),
    /// Instance of a user-defined class.
    Instance(InstanceValue),
}

impl Value {
    /// Create a numeric value.
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create an array value.
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// Create a plain object value from key/value pairs.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Create a named callable reference.
    #[inline]
    pub fn function(name: impl Into<Box<str>>) -> Self {
        Value::Function(FunctionRef::new(name))
    }

    /// Create a date value from milliseconds since the Unix epoch.
    #[inline]
    pub fn date(epoch_ms: i64) -> Self {
        Value::Date(epoch_ms)
    }

    /// Create a regular-expression value from its source text.
    #[inline]
    pub fn regexp(source: impl Into<String>) -> Self {
        Value::Regexp(source.into())
    }

    /// Create a plain error value.
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Create a type-error value.
    #[inline]
    pub fn type_error(message: impl Into<String>) -> Self {
        Value::TypeError(message.into())
    }

    /// Create a user-defined class instance from key/value field pairs.
    pub fn instance<K, I>(class: impl Into<Box<str>>, fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Instance(InstanceValue::new(
            class,
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        ))
    }

    /// Whether this is the explicit "no value" sentinel.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this argument was never supplied.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Try to view this value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view this value as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to view this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to view this value as an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this value's type identity equals the given tag.
    ///
    /// Exact identity equality, no coercion: an `Array` does not match
    /// `Object`, a `TypeError` does not match `Error`, and the
    /// host-environment-only element tags match nothing. The sentinels
    /// match only their own literal tags, so listing `TypeTag::Null` is
    /// how a nullable argument is declared.
    pub fn matches(&self, tag: &TypeTag) -> bool {
        match (self, tag) {
            (Value::Null, TypeTag::Null)
            | (Value::Undefined, TypeTag::Undefined)
            | (Value::Bool(_), TypeTag::Boolean)
            | (Value::Number(_), TypeTag::Number)
            | (Value::Str(_), TypeTag::String)
            | (Value::Array(_), TypeTag::Array)
            | (Value::Object(_), TypeTag::Object)
            | (Value::Function(_), TypeTag::Function)
            | (Value::Date(_), TypeTag::Date)
            | (Value::Regexp(_), TypeTag::Regexp)
            | (Value::Error(_), TypeTag::Error)
            | (Value::TypeError(_), TypeTag::TypeError) => true,
            (Value::Instance(instance), TypeTag::Class(class)) => instance.class() == &**class,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                let inner: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", inner.join(", "))
            }
            Value::Object(fields) => {
                let inner: Vec<String> = fields
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect();
                write!(f, "{{{}}}", inner.join(", "))
            }
            Value::Function(func) => write!(f, "<function {}>", func.name()),
            Value::Date(epoch_ms) => write!(f, "<date {epoch_ms}>"),
            Value::Regexp(source) => write!(f, "/{source}/"),
            Value::Error(message) => write!(f, "<error: {message}>"),
            Value::TypeError(message) => write!(f, "<typeError: {message}>"),
            Value::Instance(instance) => write!(f, "<{} instance>", instance.class()),
        }
    }
}

#[cfg(test)]
mod tests;
