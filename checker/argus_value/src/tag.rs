//! Acceptable-type identities and the canonical type-name table.

use std::fmt;

/// Identity of an acceptable type for an argument under check.
///
/// A closed tag per canonical type name, plus [`TypeTag::Class`] for
/// user-defined classes. The canonical names are fixed for compatibility
/// and must match the [`TYPE_TABLE`] spelling exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Object,
    Function,
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Date,
    Array,
    Regexp,
    Error,
    TypeError,
    /// Host-environment-only; unavailable here and never matches a value.
    HtmlImageElement,
    /// Host-environment-only; unavailable here and never matches a value.
    HtmlOptionElement,
    /// User-defined class, identified by name.
    Class(Box<str>),
}

impl TypeTag {
    /// Identity of a user-defined class.
    pub fn class(name: impl Into<Box<str>>) -> Self {
        TypeTag::Class(name.into())
    }

    /// The human-readable name used in error messages.
    ///
    /// Built-in tags use their canonical table name; a [`TypeTag::Class`]
    /// uses the class's own name.
    pub fn name(&self) -> &str {
        match self {
            Self::Object => "object",
            Self::Function => "function",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Date => "date",
            Self::Array => "array",
            Self::Regexp => "regexp",
            Self::Error => "error",
            Self::TypeError => "typeError",
            Self::HtmlImageElement => "htmlImageElement",
            Self::HtmlOptionElement => "htmlOptionElement",
            Self::Class(name) => name,
        }
    }

    /// Parse a canonical type name. Class names are not canonical and do
    /// not parse; use [`TypeTag::class`] for those.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "object" => Some(Self::Object),
            "function" => Some(Self::Function),
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "null" => Some(Self::Null),
            "undefined" => Some(Self::Undefined),
            "date" => Some(Self::Date),
            "array" => Some(Self::Array),
            "regexp" => Some(Self::Regexp),
            "error" => Some(Self::Error),
            "typeError" => Some(Self::TypeError),
            "htmlImageElement" => Some(Self::HtmlImageElement),
            "htmlOptionElement" => Some(Self::HtmlOptionElement),
            _ => None,
        }
    }

    /// Whether values of this type can exist in this environment.
    ///
    /// `false` only for the host-environment-only element types, which are
    /// kept in the taxonomy for name compatibility but never match.
    #[inline]
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::HtmlImageElement | Self::HtmlOptionElement)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the [`TYPE_TABLE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeEntry {
    /// Canonical type name, fixed for compatibility.
    pub name: &'static str,
    /// The identity checked during classification, or `None` when no
    /// identity check is possible for this name: the `null`/`undefined`
    /// sentinels and the host-environment-only element types.
    pub identity: Option<TypeTag>,
}

/// The fixed mapping from canonical type names to type identities.
///
/// Immutable, unique keys, scanned in declared order during
/// classification with the first match winning.
pub static TYPE_TABLE: [TypeEntry; 14] = [
    TypeEntry {
        name: "object",
        identity: Some(TypeTag::Object),
    },
    TypeEntry {
        name: "function",
        identity: Some(TypeTag::Function),
    },
    TypeEntry {
        name: "string",
        identity: Some(TypeTag::String),
    },
    TypeEntry {
        name: "number",
        identity: Some(TypeTag::Number),
    },
    TypeEntry {
        name: "boolean",
        identity: Some(TypeTag::Boolean),
    },
    TypeEntry {
        name: "null",
        identity: None,
    },
    TypeEntry {
        name: "undefined",
        identity: None,
    },
    TypeEntry {
        name: "date",
        identity: Some(TypeTag::Date),
    },
    TypeEntry {
        name: "array",
        identity: Some(TypeTag::Array),
    },
    TypeEntry {
        name: "regexp",
        identity: Some(TypeTag::Regexp),
    },
    TypeEntry {
        name: "error",
        identity: Some(TypeTag::Error),
    },
    TypeEntry {
        name: "typeError",
        identity: Some(TypeTag::TypeError),
    },
    TypeEntry {
        name: "htmlImageElement",
        identity: None,
    },
    TypeEntry {
        name: "htmlOptionElement",
        identity: None,
    },
];
