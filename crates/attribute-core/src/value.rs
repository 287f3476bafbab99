//! Boxed attribute values.
//!
//! An [`AttributeValue`] is the opaque value handle that accessors read into
//! and write from. A concrete box converts to and from raw Rust values through
//! [`ValueBox<U>`]: extraction may fail (wrong range, wrong representation),
//! assignment never does.
//!
//! The standard boxes cover the primitive attribute types. Each box may
//! convert several raw types, e.g. [`UintegerValue`] backs `u8` through `u64`
//! and range-checks on extraction:
//!
//! ```
//! use attribute_core::{UintegerValue, ValueBox};
//!
//! let value = UintegerValue(300);
//! assert_eq!(<UintegerValue as ValueBox<u16>>::try_extract(&value), Some(300));
//! assert_eq!(<UintegerValue as ValueBox<u8>>::try_extract(&value), None);
//! ```

use std::fmt;

use crate::{AsAny, TypeInfo};

/// A type-erased boxed value.
pub trait AttributeValue: AsAny + fmt::Debug + Send + Sync {
    /// Name of the concrete box type, used in error reports.
    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A concrete value box able to hold a raw `U`.
pub trait ValueBox<U>: AttributeValue {
    /// Extract the raw value, or `None` if it cannot be represented as `U`.
    fn try_extract(&self) -> Option<U>;

    /// Store a raw value.
    fn assign(&mut self, value: U);
}

/// Checked downcast of a value handle to `V`.
pub fn downcast_value<V: AttributeValue>(value: &dyn AttributeValue) -> Option<&V> {
    value.as_any().downcast_ref::<V>()
}

/// Checked mutable downcast of a value handle to `V`.
pub fn downcast_value_mut<V: AttributeValue>(value: &mut dyn AttributeValue) -> Option<&mut V> {
    value.as_any_mut().downcast_mut::<V>()
}

// ============================================================================
// Standard value boxes
// ============================================================================

/// Floating point attribute value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DoubleValue(pub f64);

/// Signed integer attribute value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerValue(pub i64);

/// Unsigned integer attribute value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UintegerValue(pub u64);

/// Boolean attribute value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanValue(pub bool);

/// String attribute value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringValue(pub String);

/// Implements the identity traits and accessors shared by every standard box.
macro_rules! impl_standard_value {
    ($box_ty:ident, $inner:ty, $name:literal) => {
        impl $box_ty {
            /// Create a box holding `value`.
            pub fn new(value: impl Into<$inner>) -> Self {
                $box_ty(value.into())
            }

            /// Borrow the stored value.
            pub fn get(&self) -> &$inner {
                &self.0
            }
        }

        impl TypeInfo for $box_ty {
            fn type_name() -> &'static str {
                $name
            }
        }

        impl AttributeValue for $box_ty {
            fn value_type_name(&self) -> &'static str {
                $name
            }
        }
    };
}

/// Implements range-checked `ValueBox` conversions between a box and raw types.
macro_rules! impl_value_box_convert {
    ($box_ty:ident, $inner:ty => $($target:ty),+ $(,)?) => {
        $(
            impl ValueBox<$target> for $box_ty {
                fn try_extract(&self) -> Option<$target> {
                    <$target>::try_from(self.0).ok()
                }

                fn assign(&mut self, value: $target) {
                    self.0 = <$inner>::from(value);
                }
            }
        )+
    };
}

impl_standard_value!(DoubleValue, f64, "Double");
impl_standard_value!(IntegerValue, i64, "Integer");
impl_standard_value!(UintegerValue, u64, "Uinteger");
impl_standard_value!(BooleanValue, bool, "Boolean");
impl_standard_value!(StringValue, String, "String");

impl_value_box_convert!(IntegerValue, i64 => i8, i16, i32, i64);
impl_value_box_convert!(UintegerValue, u64 => u8, u16, u32, u64);

impl ValueBox<usize> for UintegerValue {
    fn try_extract(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    fn assign(&mut self, value: usize) {
        self.0 = value as u64;
    }
}

impl ValueBox<f64> for DoubleValue {
    fn try_extract(&self) -> Option<f64> {
        Some(self.0)
    }

    fn assign(&mut self, value: f64) {
        self.0 = value;
    }
}

impl ValueBox<f32> for DoubleValue {
    /// Fails for finite values outside the `f32` range.
    fn try_extract(&self) -> Option<f32> {
        let narrowed = self.0 as f32;
        if self.0.is_finite() && narrowed.is_infinite() {
            None
        } else {
            Some(narrowed)
        }
    }

    fn assign(&mut self, value: f32) {
        self.0 = f64::from(value);
    }
}

impl ValueBox<bool> for BooleanValue {
    fn try_extract(&self) -> Option<bool> {
        Some(self.0)
    }

    fn assign(&mut self, value: bool) {
        self.0 = value;
    }
}

impl ValueBox<String> for StringValue {
    fn try_extract(&self) -> Option<String> {
        Some(self.0.clone())
    }

    fn assign(&mut self, value: String) {
        self.0 = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeHash;

    #[test]
    fn standard_type_names() {
        assert_eq!(DoubleValue::type_name(), "Double");
        assert_eq!(IntegerValue::type_name(), "Integer");
        assert_eq!(UintegerValue::type_name(), "Uinteger");
        assert_eq!(BooleanValue::type_name(), "Boolean");
        assert_eq!(StringValue::type_name(), "String");
        assert_eq!(DoubleValue::type_hash(), TypeHash::from_name("Double"));
    }

    #[test]
    fn dynamic_type_name_matches_static() {
        let value: &dyn AttributeValue = &StringValue::new("eth0");
        assert_eq!(value.value_type_name(), "String");
    }

    #[test]
    fn integer_range_checked_extraction() {
        let small = IntegerValue(-5);
        assert_eq!(<IntegerValue as ValueBox<i8>>::try_extract(&small), Some(-5));

        let large = IntegerValue(i64::from(i32::MAX) + 1);
        assert_eq!(<IntegerValue as ValueBox<i32>>::try_extract(&large), None);
        assert_eq!(
            <IntegerValue as ValueBox<i64>>::try_extract(&large),
            Some(i64::from(i32::MAX) + 1)
        );
    }

    #[test]
    fn uinteger_assign_widens() {
        let mut value = UintegerValue::default();
        ValueBox::<u8>::assign(&mut value, 200u8);
        assert_eq!(value, UintegerValue(200));
        ValueBox::<usize>::assign(&mut value, 4096usize);
        assert_eq!(*value.get(), 4096);
    }

    #[test]
    fn double_narrowing() {
        let fits = DoubleValue(1.5);
        assert_eq!(<DoubleValue as ValueBox<f32>>::try_extract(&fits), Some(1.5f32));

        let too_large = DoubleValue(f64::MAX);
        assert_eq!(<DoubleValue as ValueBox<f32>>::try_extract(&too_large), None);

        let infinite = DoubleValue(f64::INFINITY);
        assert_eq!(
            <DoubleValue as ValueBox<f32>>::try_extract(&infinite),
            Some(f32::INFINITY)
        );
    }

    #[test]
    fn string_round_trip() {
        let mut value = StringValue::default();
        value.assign("wlan0".to_string());
        assert_eq!(value.try_extract(), Some("wlan0".to_string()));
    }

    #[test]
    fn downcast_value_checks_type() {
        let mut value = BooleanValue(true);
        assert!(downcast_value::<BooleanValue>(&value).is_some());
        assert!(downcast_value::<DoubleValue>(&value).is_none());

        downcast_value_mut::<BooleanValue>(&mut value).unwrap().0 = false;
        assert_eq!(value, BooleanValue(false));
    }
}
