//! Building accessors from fields and accessor methods.
//!
//! [`make_accessor`] picks the binding shape from the static type of its
//! argument:
//!
//! | Argument | Shape |
//! |----------|-------|
//! | [`Field`] | `Field` |
//! | [`Getter`] | `Getter` |
//! | [`Setter`] | `Setter(Unit)` |
//! | [`CheckedSetter`] | `Setter(Checked)` |
//! | `(Getter, Setter)` or `(Setter, Getter)` | `Combined(Unit)` |
//! | `(Getter, CheckedSetter)` or `(CheckedSetter, Getter)` | `Combined(Checked)` |
//!
//! The order of a getter/setter pair does not affect the result. Any other
//! combination does not implement [`AccessorParts`] and fails to compile:
//!
//! ```compile_fail,E0277
//! use attribute_accessor::{DoubleValue, ObjectBase, TypeInfo, getter, make_accessor_pair};
//!
//! struct Wheel { radius: f64 }
//! impl ObjectBase for Wheel {
//!     fn object_type_name(&self) -> &'static str { "Wheel" }
//! }
//! impl TypeInfo for Wheel {
//!     fn type_name() -> &'static str { "Wheel" }
//! }
//!
//! // Two getters are not a supported shape.
//! let _ = make_accessor_pair::<DoubleValue, _, _>(
//!     getter(|w: &Wheel| w.radius),
//!     getter(|w: &Wheel| w.radius * 2.0),
//! );
//! ```
//!
//! Neither is a value box that cannot hold the bound type:
//!
//! ```compile_fail,E0277
//! use attribute_accessor::{BooleanValue, ObjectBase, TypeInfo, field, make_accessor};
//!
//! struct Wheel { radius: f64 }
//! impl ObjectBase for Wheel {
//!     fn object_type_name(&self) -> &'static str { "Wheel" }
//! }
//! impl TypeInfo for Wheel {
//!     fn type_name() -> &'static str { "Wheel" }
//! }
//!
//! let _ = make_accessor::<BooleanValue, _>(field!(Wheel, radius));
//! ```

use std::sync::Arc;

use attribute_core::{AttributeValue, ObjectBase, TypeInfo, ValueBox};

use crate::accessor::Accessor;
use crate::binding::Binding;
use crate::parts::{CheckedSetter, Field, Getter, Setter};

/// A supported set of binding parts for value box `V`.
pub trait AccessorParts<V> {
    /// The object type the parts operate on.
    type Object: ObjectBase + TypeInfo;

    /// Build the matching binding.
    fn into_binding(self) -> Binding<Self::Object, V>;
}

/// Build a shared accessor from one part or a getter/setter pair.
///
/// # Example
///
/// ```
/// use attribute_accessor::{DoubleValue, ObjectBase, TypeInfo, field, make_accessor};
///
/// #[derive(Default)]
/// struct Wheel {
///     radius: f64,
/// }
///
/// impl ObjectBase for Wheel {
///     fn object_type_name(&self) -> &'static str {
///         "Wheel"
///     }
/// }
///
/// impl TypeInfo for Wheel {
///     fn type_name() -> &'static str {
///         "Wheel"
///     }
/// }
///
/// let radius = make_accessor::<DoubleValue, _>(field!(Wheel, radius));
/// let mut wheel = Wheel::default();
///
/// assert!(radius.set(&mut wheel, &DoubleValue(5.0)));
/// assert_eq!(wheel.radius, 5.0);
///
/// let mut out = DoubleValue::default();
/// assert!(radius.get(&wheel, &mut out));
/// assert_eq!(out, DoubleValue(5.0));
/// ```
pub fn make_accessor<V, P>(parts: P) -> Accessor
where
    V: AttributeValue + TypeInfo,
    P: AccessorParts<V>,
{
    Arc::new(parts.into_binding())
}

/// Build a shared accessor from a getter and a setter, in either order.
pub fn make_accessor_pair<V, A, B>(first: A, second: B) -> Accessor
where
    V: AttributeValue + TypeInfo,
    (A, B): AccessorParts<V>,
{
    make_accessor::<V, _>((first, second))
}

/// Build a [`Field`] from a type and one of its members.
///
/// ```
/// use attribute_accessor::{Field, field};
///
/// struct Channel(u16);
///
/// let number: Field<Channel, u16> = field!(Channel, 0);
/// assert_eq!(*number.get(&Channel(11)), 11);
/// ```
#[macro_export]
macro_rules! field {
    ($owner:ty, $member:tt) => {
        $crate::Field::<$owner, _>::new(
            |object| &object.$member,
            |object| &mut object.$member,
        )
    };
}

impl<T, U, V> AccessorParts<V> for Field<T, U>
where
    T: ObjectBase + TypeInfo,
    U: Clone + 'static,
    V: AttributeValue + TypeInfo + ValueBox<U>,
{
    type Object = T;

    fn into_binding(self) -> Binding<T, V> {
        Binding::field(self)
    }
}

impl<T, U, V> AccessorParts<V> for Getter<T, U>
where
    T: ObjectBase + TypeInfo,
    U: 'static,
    V: AttributeValue + TypeInfo + ValueBox<U>,
{
    type Object = T;

    fn into_binding(self) -> Binding<T, V> {
        Binding::getter(self)
    }
}

impl<T, U, V> AccessorParts<V> for Setter<T, U>
where
    T: ObjectBase + TypeInfo,
    U: 'static,
    V: AttributeValue + TypeInfo + ValueBox<U>,
{
    type Object = T;

    fn into_binding(self) -> Binding<T, V> {
        Binding::setter(self)
    }
}

impl<T, U, V> AccessorParts<V> for CheckedSetter<T, U>
where
    T: ObjectBase + TypeInfo,
    U: 'static,
    V: AttributeValue + TypeInfo + ValueBox<U>,
{
    type Object = T;

    fn into_binding(self) -> Binding<T, V> {
        Binding::checked_setter(self)
    }
}

impl<T, G, S, V> AccessorParts<V> for (Getter<T, G>, Setter<T, S>)
where
    T: ObjectBase + TypeInfo,
    G: 'static,
    S: 'static,
    V: AttributeValue + TypeInfo + ValueBox<G> + ValueBox<S>,
{
    type Object = T;

    fn into_binding(self) -> Binding<T, V> {
        let (getter, setter) = self;
        Binding::combined(getter, setter)
    }
}

impl<T, G, S, V> AccessorParts<V> for (Setter<T, S>, Getter<T, G>)
where
    T: ObjectBase + TypeInfo,
    G: 'static,
    S: 'static,
    V: AttributeValue + TypeInfo + ValueBox<G> + ValueBox<S>,
{
    type Object = T;

    fn into_binding(self) -> Binding<T, V> {
        let (setter, getter) = self;
        Binding::combined(getter, setter)
    }
}

impl<T, G, S, V> AccessorParts<V> for (Getter<T, G>, CheckedSetter<T, S>)
where
    T: ObjectBase + TypeInfo,
    G: 'static,
    S: 'static,
    V: AttributeValue + TypeInfo + ValueBox<G> + ValueBox<S>,
{
    type Object = T;

    fn into_binding(self) -> Binding<T, V> {
        let (getter, setter) = self;
        Binding::combined_checked(getter, setter)
    }
}

impl<T, G, S, V> AccessorParts<V> for (CheckedSetter<T, S>, Getter<T, G>)
where
    T: ObjectBase + TypeInfo,
    G: 'static,
    S: 'static,
    V: AttributeValue + TypeInfo + ValueBox<G> + ValueBox<S>,
{
    type Object = T;

    fn into_binding(self) -> Binding<T, V> {
        let (setter, getter) = self;
        Binding::combined_checked(getter, setter)
    }
}
