//! Static and dynamic type identity.
//!
//! [`TypeInfo`] gives a type a stable name and [`TypeHash`]. It must be
//! implemented by every object and value-box type an accessor is bound to.
//! [`AsAny`] is the type-erasure hook the checked downcasts are built on.
//!
//! # Example
//!
//! ```
//! use attribute_core::{TypeHash, TypeInfo};
//!
//! struct Wheel {
//!     radius: f64,
//! }
//!
//! impl TypeInfo for Wheel {
//!     fn type_name() -> &'static str {
//!         "Wheel"
//!     }
//! }
//!
//! assert_eq!(Wheel::type_hash(), TypeHash::from_name("Wheel"));
//! ```
//!
//! With `#[derive(Object)]`, re-exported by `attribute-accessor`:
//!
//! ```ignore
//! #[derive(Object)]
//! #[object(name = "Wheel")]
//! pub struct Wheel {
//!     pub radius: f64,
//! }
//! ```

use std::any::Any;

use crate::TypeHash;

/// Type identity for objects and value boxes.
pub trait TypeInfo: 'static {
    /// The name this type is known by.
    fn type_name() -> &'static str;

    /// Get the type hash for this type.
    ///
    /// Defaults to the hash of [`TypeInfo::type_name`].
    fn type_hash() -> TypeHash {
        TypeHash::from_name(Self::type_name())
    }
}

/// Access to a value as `dyn Any`, used for checked downcasts.
///
/// Blanket-implemented for every `'static` sized type, so trait objects whose
/// trait has `AsAny` as a supertrait dispatch to the concrete type.
pub trait AsAny: Any {
    /// Borrow as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Borrow as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl TypeInfo for Probe {
        fn type_name() -> &'static str {
            "Probe"
        }
    }

    #[test]
    fn default_type_hash_uses_name() {
        assert_eq!(Probe::type_hash(), TypeHash::from_name("Probe"));
    }

    #[test]
    fn as_any_round_trip() {
        let mut value = 7u32;
        assert!(value.as_any().is::<u32>());
        *value.as_any_mut().downcast_mut::<u32>().unwrap() = 9;
        assert_eq!(value, 9);
    }
}
