//! Type-checked get/set bindings for object attributes.
//!
//! This crate turns a struct field, a getter, a setter, or a getter/setter
//! pair into an [`Accessor`]: a shared, immutable object that reads and writes
//! the attribute on any `&dyn ObjectBase` through any `&dyn AttributeValue`.
//! Both handles are checked against the bound types before the field or
//! method is touched, and every failure is reported instead of panicking.
//!
//! # Example
//!
//! ```
//! use std::sync::LazyLock;
//! use attribute_accessor::{
//!     Accessor, DoubleValue, Object, checked_setter, field, getter, make_accessor,
//!     make_accessor_pair,
//! };
//!
//! #[derive(Object, Default)]
//! struct Wheel {
//!     radius: f64,
//!     pressure: f64,
//! }
//!
//! impl Wheel {
//!     fn pressure(&self) -> f64 {
//!         self.pressure
//!     }
//!
//!     fn set_pressure(&mut self, bar: f64) -> bool {
//!         if bar < 0.0 {
//!             return false;
//!         }
//!         self.pressure = bar;
//!         true
//!     }
//! }
//!
//! static RADIUS: LazyLock<Accessor> =
//!     LazyLock::new(|| make_accessor::<DoubleValue, _>(field!(Wheel, radius)));
//! static PRESSURE: LazyLock<Accessor> = LazyLock::new(|| {
//!     make_accessor_pair::<DoubleValue, _, _>(
//!         checked_setter(Wheel::set_pressure),
//!         getter(Wheel::pressure),
//!     )
//! });
//!
//! let mut wheel = Wheel::default();
//! assert!(RADIUS.set(&mut wheel, &DoubleValue(5.0)));
//! assert!(!PRESSURE.set(&mut wheel, &DoubleValue(-1.0)));
//! assert!(PRESSURE.set(&mut wheel, &DoubleValue(2.2)));
//!
//! let mut out = DoubleValue::default();
//! assert!(RADIUS.get(&wheel, &mut out));
//! assert_eq!(out, DoubleValue(5.0));
//! ```
//!
//! # Features
//!
//! - `derive` (default) - `#[derive(Object)]`
//! - `profiling` - instrument `try_get`/`try_set` with the `profiling` crate
//! - `tracing` - emit a `trace!` event for every failed access

mod accessor;
mod adapter;
mod binding;
mod factory;
mod parts;

pub use accessor::{Accessor, AttributeAccessor};
pub use adapter::AccessorHelper;
pub use binding::{Binding, BindingShape, SetterKind};
pub use factory::{AccessorParts, make_accessor, make_accessor_pair};
pub use parts::{
    CheckedSetter, Field, Getter, Setter, checked_ref_setter, checked_setter, getter, ref_getter,
    ref_setter, setter,
};

pub use attribute_core::{
    AccessError, AccessKind, AsAny, AttributeValue, BooleanValue, DoubleValue, IntegerValue,
    ObjectBase, StringValue, TypeHash, TypeInfo, UintegerValue, ValueBox, downcast_object,
    downcast_object_mut, downcast_value, downcast_value_mut,
};

#[cfg(feature = "derive")]
pub use attribute_macros::Object;
