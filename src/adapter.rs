//! Checked-downcast adapter from opaque handles to concrete types.
//!
//! A binding implements [`AccessorHelper`] in terms of its concrete object
//! type `T` and value-box type `V`. The blanket [`AttributeAccessor`] impl
//! verifies both handles before forwarding: the value box first, then the
//! object (including any base objects it exposes). Either mismatch fails the
//! call before the binding runs.

use attribute_core::{
    AccessError, AccessKind, AttributeValue, ObjectBase, TypeHash, TypeInfo, downcast_object,
    downcast_object_mut, downcast_value, downcast_value_mut,
};

use crate::accessor::AttributeAccessor;

/// Concrete get/set logic behind an [`AttributeAccessor`].
pub trait AccessorHelper: Send + Sync {
    /// The object type the accessor is bound to.
    type Object: ObjectBase + TypeInfo;
    /// The value-box type the accessor reads and writes.
    type Value: AttributeValue + TypeInfo;

    /// Read from an object already known to be `Self::Object`.
    fn do_get(&self, object: &Self::Object, value: &mut Self::Value) -> Result<(), AccessError>;

    /// Write to an object already known to be `Self::Object`.
    fn do_set(&self, object: &mut Self::Object, value: &Self::Value) -> Result<(), AccessError>;

    /// Whether `do_get` can ever succeed.
    fn can_get(&self) -> bool;

    /// Whether `do_set` can ever succeed.
    fn can_set(&self) -> bool;
}

impl<H: AccessorHelper> AttributeAccessor for H {
    #[cfg_attr(feature = "profiling", profiling::function)]
    fn try_get(
        &self,
        object: &dyn ObjectBase,
        value: &mut dyn AttributeValue,
    ) -> Result<(), AccessError> {
        let result = checked_get(self, object, value);
        report_failure::<H>(AccessKind::Get, &result);
        result
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    fn try_set(
        &self,
        object: &mut dyn ObjectBase,
        value: &dyn AttributeValue,
    ) -> Result<(), AccessError> {
        let result = checked_set(self, object, value);
        report_failure::<H>(AccessKind::Set, &result);
        result
    }

    fn has_getter(&self) -> bool {
        self.can_get()
    }

    fn has_setter(&self) -> bool {
        self.can_set()
    }

    fn object_type(&self) -> TypeHash {
        H::Object::type_hash()
    }

    fn value_type(&self) -> TypeHash {
        H::Value::type_hash()
    }

    fn object_type_name(&self) -> &'static str {
        H::Object::type_name()
    }

    fn value_type_name(&self) -> &'static str {
        H::Value::type_name()
    }
}

fn checked_get<H: AccessorHelper>(
    helper: &H,
    object: &dyn ObjectBase,
    value: &mut dyn AttributeValue,
) -> Result<(), AccessError> {
    let actual_value = value.value_type_name();
    let value = downcast_value_mut::<H::Value>(value).ok_or(AccessError::ValueTypeMismatch {
        expected: H::Value::type_name(),
        actual: actual_value,
    })?;
    let object = downcast_object::<H::Object>(object).ok_or_else(|| {
        AccessError::ObjectTypeMismatch {
            expected: H::Object::type_name(),
            actual: object.object_type_name(),
        }
    })?;
    helper.do_get(object, value)
}

fn checked_set<H: AccessorHelper>(
    helper: &H,
    object: &mut dyn ObjectBase,
    value: &dyn AttributeValue,
) -> Result<(), AccessError> {
    let value = downcast_value::<H::Value>(value).ok_or_else(|| {
        AccessError::ValueTypeMismatch {
            expected: H::Value::type_name(),
            actual: value.value_type_name(),
        }
    })?;
    let actual_object = object.object_type_name();
    let object = downcast_object_mut::<H::Object>(object).ok_or(
        AccessError::ObjectTypeMismatch {
            expected: H::Object::type_name(),
            actual: actual_object,
        },
    )?;
    helper.do_set(object, value)
}

#[cfg(feature = "tracing")]
fn report_failure<H: AccessorHelper>(kind: AccessKind, result: &Result<(), AccessError>) {
    if let Err(error) = result {
        tracing::trace!(
            object = H::Object::type_name(),
            value = H::Value::type_name(),
            operation = %kind,
            %error,
            "attribute access failed"
        );
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn report_failure<H: AccessorHelper>(_kind: AccessKind, _result: &Result<(), AccessError>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use attribute_core::{DoubleValue, IntegerValue};

    #[derive(Debug, Default)]
    struct Counter {
        count: i64,
        sets: u32,
    }

    impl ObjectBase for Counter {
        fn object_type_name(&self) -> &'static str {
            "Counter"
        }
    }

    impl TypeInfo for Counter {
        fn type_name() -> &'static str {
            "Counter"
        }
    }

    struct Other;

    impl ObjectBase for Other {
        fn object_type_name(&self) -> &'static str {
            "Other"
        }
    }

    /// Hand-written helper that counts how often it is reached.
    struct CountHelper;

    impl AccessorHelper for CountHelper {
        type Object = Counter;
        type Value = IntegerValue;

        fn do_get(&self, object: &Counter, value: &mut IntegerValue) -> Result<(), AccessError> {
            value.0 = object.count;
            Ok(())
        }

        fn do_set(&self, object: &mut Counter, value: &IntegerValue) -> Result<(), AccessError> {
            object.count = value.0;
            object.sets += 1;
            Ok(())
        }

        fn can_get(&self) -> bool {
            true
        }

        fn can_set(&self) -> bool {
            true
        }
    }

    #[test]
    fn forwards_matching_handles() {
        let mut counter = Counter::default();
        let accessor: &dyn AttributeAccessor = &CountHelper;

        assert!(accessor.set(&mut counter, &IntegerValue(3)));
        let mut out = IntegerValue(0);
        assert!(accessor.get(&counter, &mut out));
        assert_eq!(out, IntegerValue(3));
        assert_eq!(counter.sets, 1);
    }

    #[test]
    fn rejects_wrong_value_type_before_object() {
        let mut other = Other;
        let accessor: &dyn AttributeAccessor = &CountHelper;

        let err = accessor.try_set(&mut other, &DoubleValue(1.0)).unwrap_err();
        assert_eq!(
            err,
            AccessError::ValueTypeMismatch {
                expected: "Integer",
                actual: "Double",
            }
        );
    }

    #[test]
    fn rejects_wrong_object_type() {
        let mut other = Other;
        let accessor: &dyn AttributeAccessor = &CountHelper;

        let err = accessor.try_set(&mut other, &IntegerValue(1)).unwrap_err();
        assert_eq!(
            err,
            AccessError::ObjectTypeMismatch {
                expected: "Counter",
                actual: "Other",
            }
        );

        let mut out = IntegerValue(42);
        assert!(!accessor.get(&other, &mut out));
        assert_eq!(out, IntegerValue(42));
    }

    #[test]
    fn mismatched_value_leaves_object_untouched() {
        let mut counter = Counter::default();
        let accessor: &dyn AttributeAccessor = &CountHelper;

        assert!(!accessor.set(&mut counter, &DoubleValue(9.0)));
        assert_eq!(counter.sets, 0);
        assert_eq!(counter.count, 0);
    }

    #[test]
    fn reports_bound_types() {
        let accessor: &dyn AttributeAccessor = &CountHelper;
        assert_eq!(accessor.object_type(), TypeHash::from_name("Counter"));
        assert_eq!(accessor.value_type(), TypeHash::from_name("Integer"));
        assert_eq!(accessor.object_type_name(), "Counter");
        assert_eq!(accessor.value_type_name(), "Integer");
    }
}
