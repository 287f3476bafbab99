//! Concrete bindings: one attribute of `T` exposed through value box `V`.
//!
//! A [`Binding`] is a closed set of shapes:
//!
//! | Shape | get | set |
//! |-------|-----|-----|
//! | `Field` | clone field into box | extract, assign field |
//! | `Getter` | call getter | unsupported |
//! | `Setter(Unit)` | unsupported | extract, call setter |
//! | `Setter(Checked)` | unsupported | extract, call setter, may reject |
//! | `Combined(Unit)` | call getter | extract, call setter |
//! | `Combined(Checked)` | call getter | extract, call setter, may reject |
//!
//! The raw value types are erased at construction, so a combined binding may
//! read a `G` and write an `S` as long as `V` converts both.

use std::fmt;

use attribute_core::{AccessError, AccessKind, AttributeValue, ObjectBase, TypeInfo, ValueBox};

use crate::adapter::AccessorHelper;
use crate::parts::{CheckedSetter, Field, Getter, Setter};

type ReadFn<T, V> = Box<dyn Fn(&T, &mut V) + Send + Sync>;
type WriteFn<T, V> = Box<dyn Fn(&mut T, &V) -> Result<(), AccessError> + Send + Sync>;

/// How a binding's setter reports its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetterKind {
    /// Returns nothing; every extracted value is accepted
    Unit,
    /// Returns `bool`; `false` rejects the value
    Checked,
}

/// Which shape a binding was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingShape {
    /// A data field
    Field,
    /// A getter only
    Getter,
    /// A setter only
    Setter(SetterKind),
    /// A getter and a setter
    Combined(SetterKind),
}

impl BindingShape {
    /// Whether bindings of this shape can read.
    pub fn has_getter(self) -> bool {
        !matches!(self, BindingShape::Setter(_))
    }

    /// Whether bindings of this shape can write.
    pub fn has_setter(self) -> bool {
        !matches!(self, BindingShape::Getter)
    }
}

enum Access<T, V> {
    Field { read: ReadFn<T, V>, write: WriteFn<T, V> },
    Getter { read: ReadFn<T, V> },
    Setter { write: WriteFn<T, V>, kind: SetterKind },
    Combined { read: ReadFn<T, V>, write: WriteFn<T, V>, kind: SetterKind },
}

/// An immutable accessor for one attribute of `T`, read and written through `V`.
///
/// Built once, typically by [`make_accessor`](crate::make_accessor), and shared
/// behind an [`Accessor`](crate::Accessor).
pub struct Binding<T, V> {
    access: Access<T, V>,
}

impl<T, V> Binding<T, V>
where
    T: ObjectBase + TypeInfo,
    V: AttributeValue + TypeInfo,
{
    fn from_access(access: Access<T, V>) -> Self {
        Self { access }
    }

    /// Bind a data field. Reads clone the field; writes assign it.
    pub fn field<U>(field: Field<T, U>) -> Self
    where
        U: Clone + 'static,
        V: ValueBox<U>,
    {
        let read: ReadFn<T, V> = Box::new(move |object: &T, value: &mut V| {
            <V as ValueBox<U>>::assign(value, field.get(object).clone());
        });
        let write: WriteFn<T, V> = Box::new(move |object: &mut T, value: &V| {
            *field.get_mut(object) = extract::<U, V>(value)?;
            Ok(())
        });
        Self::from_access(Access::Field { read, write })
    }

    /// Bind a getter; the attribute is read-only.
    pub fn getter<U>(getter: Getter<T, U>) -> Self
    where
        U: 'static,
        V: ValueBox<U>,
    {
        Self::from_access(Access::Getter {
            read: read_fn(getter),
        })
    }

    /// Bind a setter; the attribute is write-only.
    pub fn setter<U>(setter: Setter<T, U>) -> Self
    where
        U: 'static,
        V: ValueBox<U>,
    {
        Self::from_access(Access::Setter {
            write: unit_write_fn(setter),
            kind: SetterKind::Unit,
        })
    }

    /// Bind a bool-returning setter; the attribute is write-only.
    pub fn checked_setter<U>(setter: CheckedSetter<T, U>) -> Self
    where
        U: 'static,
        V: ValueBox<U>,
    {
        Self::from_access(Access::Setter {
            write: checked_write_fn(setter),
            kind: SetterKind::Checked,
        })
    }

    /// Bind a getter and a setter.
    pub fn combined<G, S>(getter: Getter<T, G>, setter: Setter<T, S>) -> Self
    where
        G: 'static,
        S: 'static,
        V: ValueBox<G> + ValueBox<S>,
    {
        Self::from_access(Access::Combined {
            read: read_fn(getter),
            write: unit_write_fn(setter),
            kind: SetterKind::Unit,
        })
    }

    /// Bind a getter and a bool-returning setter.
    pub fn combined_checked<G, S>(getter: Getter<T, G>, setter: CheckedSetter<T, S>) -> Self
    where
        G: 'static,
        S: 'static,
        V: ValueBox<G> + ValueBox<S>,
    {
        Self::from_access(Access::Combined {
            read: read_fn(getter),
            write: checked_write_fn(setter),
            kind: SetterKind::Checked,
        })
    }
}

impl<T, V> Binding<T, V> {
    /// The shape this binding was built from.
    pub fn shape(&self) -> BindingShape {
        match &self.access {
            Access::Field { .. } => BindingShape::Field,
            Access::Getter { .. } => BindingShape::Getter,
            Access::Setter { kind, .. } => BindingShape::Setter(*kind),
            Access::Combined { kind, .. } => BindingShape::Combined(*kind),
        }
    }

    /// Whether this binding can read.
    pub fn has_getter(&self) -> bool {
        self.shape().has_getter()
    }

    /// Whether this binding can write.
    pub fn has_setter(&self) -> bool {
        self.shape().has_setter()
    }
}

impl<T, V> AccessorHelper for Binding<T, V>
where
    T: ObjectBase + TypeInfo,
    V: AttributeValue + TypeInfo,
{
    type Object = T;
    type Value = V;

    fn do_get(&self, object: &T, value: &mut V) -> Result<(), AccessError> {
        match &self.access {
            Access::Field { read, .. } | Access::Getter { read } | Access::Combined { read, .. } => {
                read(object, value);
                Ok(())
            }
            Access::Setter { .. } => Err(AccessError::unsupported(AccessKind::Get)),
        }
    }

    fn do_set(&self, object: &mut T, value: &V) -> Result<(), AccessError> {
        match &self.access {
            Access::Field { write, .. }
            | Access::Setter { write, .. }
            | Access::Combined { write, .. } => write(object, value),
            Access::Getter { .. } => Err(AccessError::unsupported(AccessKind::Set)),
        }
    }

    fn can_get(&self) -> bool {
        self.has_getter()
    }

    fn can_set(&self) -> bool {
        self.has_setter()
    }
}

impl<T, V> fmt::Debug for Binding<T, V>
where
    T: TypeInfo,
    V: TypeInfo,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("object", &T::type_name())
            .field("value", &V::type_name())
            .field("shape", &self.shape())
            .finish()
    }
}

fn extract<U, V>(value: &V) -> Result<U, AccessError>
where
    V: ValueBox<U> + TypeInfo,
{
    <V as ValueBox<U>>::try_extract(value).ok_or(AccessError::UnboxFailure {
        value_type: V::type_name(),
        target: std::any::type_name::<U>(),
    })
}

fn read_fn<T, U, V>(getter: Getter<T, U>) -> ReadFn<T, V>
where
    T: 'static,
    U: 'static,
    V: ValueBox<U>,
{
    Box::new(move |object: &T, value: &mut V| {
        <V as ValueBox<U>>::assign(value, getter.call(object));
    })
}

fn unit_write_fn<T, U, V>(setter: Setter<T, U>) -> WriteFn<T, V>
where
    T: 'static,
    U: 'static,
    V: ValueBox<U> + TypeInfo,
{
    Box::new(move |object: &mut T, value: &V| {
        let extracted = extract::<U, V>(value)?;
        setter.call(object, extracted);
        Ok(())
    })
}

fn checked_write_fn<T, U, V>(setter: CheckedSetter<T, U>) -> WriteFn<T, V>
where
    T: 'static,
    U: 'static,
    V: ValueBox<U> + TypeInfo,
{
    Box::new(move |object: &mut T, value: &V| {
        let extracted = extract::<U, V>(value)?;
        if setter.call(object, extracted) {
            Ok(())
        } else {
            Err(AccessError::SetterRejected)
        }
    })
}
