//! The building blocks a binding is made from.
//!
//! Each part wraps one way of reaching an attribute on `T`:
//!
//! - [`Field`] - a pair of projections to a data field (see [`field!`](crate::field))
//! - [`Getter`] - `Fn(&T) -> U`
//! - [`Setter`] - `Fn(&mut T, U)`
//! - [`CheckedSetter`] - `Fn(&mut T, U) -> bool`, where `false` rejects the value
//!
//! Methods that borrow their value, `fn(&T) -> &U` or `fn(&mut T, &U)`, are
//! wrapped by [`ref_getter`], [`ref_setter`] and [`checked_ref_setter`]. These
//! produce the same parts over `U::Owned`, so `fn name(&self) -> &str` binds
//! like a getter returning `String`.
//!
//! Plain methods convert directly:
//!
//! ```
//! use attribute_accessor::{checked_setter, getter};
//!
//! struct Queue {
//!     limit: usize,
//! }
//!
//! impl Queue {
//!     fn limit(&self) -> usize {
//!         self.limit
//!     }
//!
//!     fn set_limit(&mut self, limit: usize) -> bool {
//!         if limit == 0 {
//!             return false;
//!         }
//!         self.limit = limit;
//!         true
//!     }
//! }
//!
//! let get = getter(Queue::limit);
//! let set = checked_setter(Queue::set_limit);
//!
//! let mut queue = Queue { limit: 100 };
//! assert!(!set.call(&mut queue, 0));
//! assert!(set.call(&mut queue, 50));
//! assert_eq!(get.call(&queue), 50);
//! ```

use std::borrow::Borrow;
use std::fmt;

/// Projections to a data field of type `U` inside `T`.
pub struct Field<T, U> {
    get: fn(&T) -> &U,
    get_mut: fn(&mut T) -> &mut U,
}

impl<T, U> Field<T, U> {
    /// Create a field from its shared and mutable projections.
    ///
    /// Both projections must reach the same field. The [`field!`](crate::field)
    /// macro builds them from a member name.
    pub const fn new(get: fn(&T) -> &U, get_mut: fn(&mut T) -> &mut U) -> Self {
        Self { get, get_mut }
    }

    /// Borrow the field.
    pub fn get<'a>(&self, object: &'a T) -> &'a U {
        (self.get)(object)
    }

    /// Mutably borrow the field.
    pub fn get_mut<'a>(&self, object: &'a mut T) -> &'a mut U {
        (self.get_mut)(object)
    }
}

impl<T, U> Clone for Field<T, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, U> Copy for Field<T, U> {}

/// A getter method `Fn(&T) -> U`.
pub struct Getter<T, U>(Box<dyn Fn(&T) -> U + Send + Sync>);

impl<T, U> Getter<T, U> {
    /// Wrap a getter.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        Getter(Box::new(f))
    }

    /// Invoke the getter.
    pub fn call(&self, object: &T) -> U {
        (self.0)(object)
    }
}

/// A setter method `Fn(&mut T, U)` that always accepts the value.
pub struct Setter<T, U>(Box<dyn Fn(&mut T, U) + Send + Sync>);

impl<T, U> Setter<T, U> {
    /// Wrap a setter.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut T, U) + Send + Sync + 'static,
    {
        Setter(Box::new(f))
    }

    /// Invoke the setter.
    pub fn call(&self, object: &mut T, value: U) {
        (self.0)(object, value)
    }
}

/// A setter method `Fn(&mut T, U) -> bool` that may reject the value.
///
/// A rejecting setter must leave the object unmodified.
pub struct CheckedSetter<T, U>(Box<dyn Fn(&mut T, U) -> bool + Send + Sync>);

impl<T, U> CheckedSetter<T, U> {
    /// Wrap a checked setter.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut T, U) -> bool + Send + Sync + 'static,
    {
        CheckedSetter(Box::new(f))
    }

    /// Invoke the setter, returning whether the value was accepted.
    pub fn call(&self, object: &mut T, value: U) -> bool {
        (self.0)(object, value)
    }
}

/// Wrap a getter method or closure.
pub fn getter<T, U, F>(f: F) -> Getter<T, U>
where
    F: Fn(&T) -> U + Send + Sync + 'static,
{
    Getter::new(f)
}

/// Wrap a setter method or closure.
pub fn setter<T, U, F>(f: F) -> Setter<T, U>
where
    F: Fn(&mut T, U) + Send + Sync + 'static,
{
    Setter::new(f)
}

/// Wrap a bool-returning setter method or closure.
pub fn checked_setter<T, U, F>(f: F) -> CheckedSetter<T, U>
where
    F: Fn(&mut T, U) -> bool + Send + Sync + 'static,
{
    CheckedSetter::new(f)
}

/// Wrap a getter that returns a borrow; the result is cloned into an owned value.
pub fn ref_getter<T, U, F>(f: F) -> Getter<T, U::Owned>
where
    T: 'static,
    U: ToOwned + ?Sized + 'static,
    F: for<'a> Fn(&'a T) -> &'a U + Send + Sync + 'static,
{
    Getter::new(move |object: &T| U::to_owned(f(object)))
}

/// Wrap a setter that takes its value by reference.
pub fn ref_setter<T, U, F>(f: F) -> Setter<T, U::Owned>
where
    T: 'static,
    U: ToOwned + ?Sized + 'static,
    F: Fn(&mut T, &U) + Send + Sync + 'static,
{
    Setter::new(move |object: &mut T, value: U::Owned| {
        let value: &U = value.borrow();
        f(object, value)
    })
}

/// Wrap a bool-returning setter that takes its value by reference.
pub fn checked_ref_setter<T, U, F>(f: F) -> CheckedSetter<T, U::Owned>
where
    T: 'static,
    U: ToOwned + ?Sized + 'static,
    F: Fn(&mut T, &U) -> bool + Send + Sync + 'static,
{
    CheckedSetter::new(move |object: &mut T, value: U::Owned| {
        let value: &U = value.borrow();
        f(object, value)
    })
}

impl<T, U> fmt::Debug for Field<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").finish_non_exhaustive()
    }
}

impl<T, U> fmt::Debug for Getter<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getter").finish_non_exhaustive()
    }
}

impl<T, U> fmt::Debug for Setter<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter").finish_non_exhaustive()
    }
}

impl<T, U> fmt::Debug for CheckedSetter<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckedSetter").finish_non_exhaustive()
    }
}
