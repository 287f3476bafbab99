//! Core types shared by attribute accessors.
//!
//! This crate defines the collaborators an accessor is bound against:
//!
//! - [`ObjectBase`] - the opaque object handle, with checked downcasts
//! - [`AttributeValue`] / [`ValueBox`] - the opaque value handle and its raw conversions
//! - [`TypeInfo`] / [`TypeHash`] - stable type identity
//! - [`AccessError`] - why a get or set did not happen

mod any;
mod error;
mod object;
mod type_hash;
mod value;

pub use any::{AsAny, TypeInfo};
pub use error::{AccessError, AccessKind};
pub use object::{ObjectBase, downcast_object, downcast_object_mut};
pub use type_hash::TypeHash;
pub use value::{
    AttributeValue, BooleanValue, DoubleValue, IntegerValue, StringValue, UintegerValue, ValueBox,
    downcast_value, downcast_value_mut,
};
