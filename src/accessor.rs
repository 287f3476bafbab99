//! The get/set capability exposed to an attribute registry.

use std::fmt;
use std::sync::Arc;

use attribute_core::{AccessError, AttributeValue, ObjectBase, TypeHash};

/// Type-erased access to one attribute of an object.
///
/// Implemented by every [`Binding`](crate::Binding) through the
/// [`AccessorHelper`](crate::AccessorHelper) adapter. Implementations never
/// panic: every mismatch is reported as an [`AccessError`] from the `try_*`
/// forms, or as `false` from [`get`](AttributeAccessor::get) and
/// [`set`](AttributeAccessor::set). A failed call has no side effect.
pub trait AttributeAccessor: Send + Sync {
    /// Read the attribute of `object` into `value`.
    fn try_get(
        &self,
        object: &dyn ObjectBase,
        value: &mut dyn AttributeValue,
    ) -> Result<(), AccessError>;

    /// Write the attribute of `object` from `value`.
    fn try_set(
        &self,
        object: &mut dyn ObjectBase,
        value: &dyn AttributeValue,
    ) -> Result<(), AccessError>;

    /// Whether [`get`](AttributeAccessor::get) can ever succeed.
    fn has_getter(&self) -> bool;

    /// Whether [`set`](AttributeAccessor::set) can ever succeed.
    fn has_setter(&self) -> bool;

    /// Hash of the object type this accessor is bound to.
    fn object_type(&self) -> TypeHash;

    /// Hash of the value-box type this accessor reads and writes.
    fn value_type(&self) -> TypeHash;

    /// Name of the object type this accessor is bound to.
    fn object_type_name(&self) -> &'static str;

    /// Name of the value-box type this accessor reads and writes.
    fn value_type_name(&self) -> &'static str;

    /// Read the attribute, returning whether it succeeded.
    fn get(&self, object: &dyn ObjectBase, value: &mut dyn AttributeValue) -> bool {
        self.try_get(object, value).is_ok()
    }

    /// Write the attribute, returning whether it succeeded.
    fn set(&self, object: &mut dyn ObjectBase, value: &dyn AttributeValue) -> bool {
        self.try_set(object, value).is_ok()
    }
}

/// A shared, immutable accessor as stored by a registry.
pub type Accessor = Arc<dyn AttributeAccessor>;

impl fmt::Debug for dyn AttributeAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeAccessor")
            .field("object", &self.object_type_name())
            .field("value", &self.value_type_name())
            .field("getter", &self.has_getter())
            .field("setter", &self.has_setter())
            .finish()
    }
}
