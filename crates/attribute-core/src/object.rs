//! The object model accessors operate on.
//!
//! An accessor receives objects as `&dyn ObjectBase` and must find the
//! concrete type it was bound to before touching a field. Rust has no
//! inheritance, so an object that embeds a "parent" object exposes it through
//! [`ObjectBase::base`] and [`ObjectBase::base_mut`]; the checked downcasts
//! walk that chain, so a binding on the parent type also works on the child.
//!
//! # Example
//!
//! ```
//! use attribute_core::{ObjectBase, downcast_object};
//!
//! struct Device {
//!     mtu: u16,
//! }
//!
//! struct WifiDevice {
//!     device: Device,
//!     channel: u8,
//! }
//!
//! impl ObjectBase for Device {
//!     fn object_type_name(&self) -> &'static str {
//!         "Device"
//!     }
//! }
//!
//! impl ObjectBase for WifiDevice {
//!     fn object_type_name(&self) -> &'static str {
//!         "WifiDevice"
//!     }
//!
//!     fn base(&self) -> Option<&dyn ObjectBase> {
//!         Some(&self.device)
//!     }
//!
//!     fn base_mut(&mut self) -> Option<&mut dyn ObjectBase> {
//!         Some(&mut self.device)
//!     }
//! }
//!
//! let wifi = WifiDevice { device: Device { mtu: 1500 }, channel: 6 };
//! let device = downcast_object::<Device>(&wifi).unwrap();
//! assert_eq!(device.mtu, 1500);
//! ```

use crate::AsAny;

/// A type-erased object whose attributes can be accessed.
///
/// `object_type_name` must return the same name the type reports through
/// [`TypeInfo`](crate::TypeInfo), so mismatch errors name both sides alike.
/// `#[derive(Object)]` implements both from one name.
pub trait ObjectBase: AsAny {
    /// Registered name of the concrete type, used in error reports.
    fn object_type_name(&self) -> &'static str;

    /// The embedded parent object, if this type extends one.
    fn base(&self) -> Option<&dyn ObjectBase> {
        None
    }

    /// Mutable access to the embedded parent object.
    ///
    /// Must expose the same object as [`ObjectBase::base`].
    fn base_mut(&mut self) -> Option<&mut dyn ObjectBase> {
        None
    }
}

/// Checked downcast of an object handle to `T`.
///
/// Returns `None` if neither the object nor any of its bases is a `T`.
pub fn downcast_object<T: ObjectBase>(object: &dyn ObjectBase) -> Option<&T> {
    if let Some(found) = object.as_any().downcast_ref::<T>() {
        return Some(found);
    }
    object.base().and_then(downcast_object::<T>)
}

/// Checked mutable downcast of an object handle to `T`.
///
/// Walks the base chain like [`downcast_object`].
pub fn downcast_object_mut<T: ObjectBase>(object: &mut dyn ObjectBase) -> Option<&mut T> {
    if (*object).as_any().is::<T>() {
        return object.as_any_mut().downcast_mut::<T>();
    }
    object.base_mut().and_then(downcast_object_mut::<T>)
}
