//! Static field access by name.
//!
//! Static fields are resolved through the runtime's field metadata rather
//! than a fixed offset: the generator emits a class resolver and a
//! [`NameLiteral`] per field, and the resolved `FieldInfo` is cached per call
//! site in a [`FieldCache`].

use crate::{
    error::FieldError,
    instance::{ReferenceType, ValueType},
    name::NameLiteral,
    runtime::{self, FieldInfo, Il2CppClass},
};
use std::{
    ffi::c_void,
    mem::MaybeUninit,
    ptr::{self, NonNull},
    sync::atomic::{AtomicPtr, Ordering},
};

/// Resolves a field by name on a runtime class.
pub fn find_field<const N: usize>(
    klass: Option<NonNull<Il2CppClass>>,
    name: &NameLiteral<N>,
) -> Result<NonNull<FieldInfo>, FieldError> {
    let api = runtime::try_api().ok_or(FieldError::RuntimeNotInstalled)?;
    let klass = klass.ok_or_else(|| FieldError::ClassNotFound(name.as_str().into()))?;
    // SAFETY: the class pointer comes from the runtime and the name is
    // NUL-terminated by construction.
    let field = unsafe { (api.class_get_field_from_name)(klass.as_ptr(), name.as_ptr()) };
    NonNull::new(field).ok_or_else(|| {
        trace_msg!("field lookup failed for {}", name);
        FieldError::FieldNotFound(name.as_str().into())
    })
}

/// Once-resolved field metadata, cached per generated call site.
///
/// Resolution is idempotent on the runtime side, so concurrent first calls
/// may race; every winner stores the same pointer.
pub struct FieldCache {
    field: AtomicPtr<FieldInfo>,
}

impl FieldCache {
    pub const fn new() -> Self {
        Self {
            field: AtomicPtr::new(ptr::null_mut()),
        }
    }

    pub fn get_or_find<const N: usize>(
        &self,
        klass_resolver: impl FnOnce() -> Option<NonNull<Il2CppClass>>,
        name: &NameLiteral<N>,
    ) -> Result<NonNull<FieldInfo>, FieldError> {
        if let Some(field) = NonNull::new(self.field.load(Ordering::Acquire)) {
            return Ok(field);
        }
        let field = find_field(klass_resolver(), name)?;
        self.field.store(field.as_ptr(), Ordering::Release);
        Ok(field)
    }
}

impl Default for FieldCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a value-type static field.
///
/// # Safety
///
/// The resolved field's managed type must match `T`'s layout.
pub unsafe fn read_static<T, F, const N: usize>(
    cache: &FieldCache,
    klass_resolver: F,
    name: &NameLiteral<N>,
) -> Result<T, FieldError>
where
    T: ValueType,
    F: FnOnce() -> Option<NonNull<Il2CppClass>>,
{
    let field = cache.get_or_find(klass_resolver, name)?;
    let api = runtime::try_api().ok_or(FieldError::RuntimeNotInstalled)?;
    let mut value = MaybeUninit::<T>::uninit();
    // SAFETY: the runtime fills exactly size_of::<T>() bytes, the field's
    // managed size, per the caller contract.
    unsafe {
        (api.field_static_get_value)(field.as_ptr(), value.as_mut_ptr().cast());
        Ok(value.assume_init())
    }
}

/// Writes a value-type static field.
///
/// # Safety
///
/// Same contract as [`read_static`].
pub unsafe fn write_static<T, F, const N: usize>(
    cache: &FieldCache,
    klass_resolver: F,
    name: &NameLiteral<N>,
    value: &T,
) -> Result<(), FieldError>
where
    T: ValueType,
    F: FnOnce() -> Option<NonNull<Il2CppClass>>,
{
    let field = cache.get_or_find(klass_resolver, name)?;
    let api = runtime::try_api().ok_or(FieldError::RuntimeNotInstalled)?;
    // SAFETY: the runtime copies the field's managed size out of `value`.
    unsafe {
        (api.field_static_set_value)(field.as_ptr(), value as *const T as *mut c_void);
    }
    Ok(())
}

/// Reads a reference-type static field and rewraps it as `T`.
///
/// # Safety
///
/// The resolved field must be a reference field holding an instance of `T`
/// (or null).
pub unsafe fn read_static_reference<T, F, const N: usize>(
    cache: &FieldCache,
    klass_resolver: F,
    name: &NameLiteral<N>,
) -> Result<T, FieldError>
where
    T: ReferenceType,
    F: FnOnce() -> Option<NonNull<Il2CppClass>>,
{
    let field = cache.get_or_find(klass_resolver, name)?;
    let api = runtime::try_api().ok_or(FieldError::RuntimeNotInstalled)?;
    let mut raw: *mut c_void = ptr::null_mut();
    // SAFETY: reference statics are single pointer slots.
    unsafe {
        (api.field_static_get_value)(field.as_ptr(), (&mut raw as *mut *mut c_void).cast());
        Ok(T::from_raw(raw))
    }
}

/// Writes a reference-type static field.
///
/// # Safety
///
/// Same contract as [`read_static_reference`].
pub unsafe fn write_static_reference<T, F, const N: usize>(
    cache: &FieldCache,
    klass_resolver: F,
    name: &NameLiteral<N>,
    value: &T,
) -> Result<(), FieldError>
where
    T: ReferenceType,
    F: FnOnce() -> Option<NonNull<Il2CppClass>>,
{
    let field = cache.get_or_find(klass_resolver, name)?;
    let api = runtime::try_api().ok_or(FieldError::RuntimeNotInstalled)?;
    // SAFETY: the runtime stores the handle's raw pointer into the slot and
    // applies its own write barrier for statics.
    unsafe {
        (api.field_static_set_value)(field.as_ptr(), value.as_raw());
    }
    Ok(())
}
