//! Boxing and unboxing between value-type wrappers and managed objects.
//!
//! Boxing a reference type is a no-op: the handle already is the object.
//! Value types round-trip through the runtime, which owns the box layout.

use crate::{
    error::FieldError,
    instance::{ObjectHandle, ReferenceType, ValueType},
    runtime::{self, Il2CppClass},
};
use std::{ffi::c_void, ptr::NonNull};

/// Boxes a value-type instance into a managed object of class `klass`.
///
/// # Safety
///
/// `klass` must be the runtime class whose value layout matches `T`.
pub unsafe fn box_value<T: ValueType>(
    klass: NonNull<Il2CppClass>,
    value: &T,
) -> Result<ObjectHandle, FieldError> {
    let api = runtime::try_api().ok_or(FieldError::RuntimeNotInstalled)?;
    // SAFETY: the runtime copies the class's value size out of `value`.
    let boxed =
        unsafe { (api.value_box)(klass.as_ptr(), value as *const T as *mut c_void) };
    Ok(ObjectHandle::new(NonNull::new(boxed)))
}

/// Copies the payload of a boxed value type back out as a `T`.
///
/// # Safety
///
/// `object` must be non-null and box a value whose managed layout matches
/// `T`.
pub unsafe fn unbox<T: ValueType, R: ReferenceType>(object: &R) -> Result<T, FieldError> {
    let api = runtime::try_api().ok_or(FieldError::RuntimeNotInstalled)?;
    if object.is_null() {
        return Err(FieldError::NullInstance);
    }
    // SAFETY: object_unbox returns the payload address inside the box; the
    // payload is size_of::<T>() bytes per the caller contract.
    unsafe {
        let payload = (api.object_unbox)(object.as_raw());
        Ok(payload.cast::<T>().read_unaligned())
    }
}

/// Reference types box to themselves.
pub fn box_reference<T: ReferenceType>(value: &T) -> ObjectHandle {
    // SAFETY: the handle's raw pointer is a managed object base (or null).
    unsafe { ObjectHandle::from_raw(value.as_raw()) }
}

/// Rewraps a boxed reference as a concrete handle type.
///
/// # Safety
///
/// The object must actually be an instance of `T`'s managed type; no runtime
/// type check is performed here.
pub unsafe fn unbox_reference<T: ReferenceType>(object: ObjectHandle) -> T {
    unsafe { T::from_raw(object.as_raw()) }
}
