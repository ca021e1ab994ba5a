//! Value taxonomy for the Argus runtime argument checker.
//!
//! This crate provides the pieces the checking engine classifies against:
//! - [`Value`]: the owned dynamic-value representation, including the two
//!   distinct absence sentinels (`Null` is present-but-empty, `Undefined`
//!   was never supplied)
//! - [`TypeTag`]: the closed acceptable-type identity enum
//! - [`TYPE_TABLE`]: the fixed, ordered table mapping canonical type names
//!   to identities
//! - [`classify`]: resolution of a value to a human-readable type name for
//!   error messages
//!
//! Matching ([`Value::matches`]) is exact identity equality: an array is not
//! an object, a `typeError` is not an `error`, and the two
//! host-environment-only element types never match anything here.

mod classify;
mod tag;
mod value;

pub use classify::{classify, CUSTOM_CLASS_LABEL};
pub use tag::{TypeEntry, TypeTag, TYPE_TABLE};
pub use value::{FunctionRef, InstanceValue, Value};
