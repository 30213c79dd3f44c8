//! Instance field accessors emitted by the binding generator.
//!
//! None of these validate the instance; call sites gate themselves with
//! [`field_null_check!`](crate::field_null_check) when runtime checks are
//! enabled. Value-type fields are copied bytewise and unaligned, since
//! explicit managed layouts may pack fields arbitrarily. Reference-type
//! fields are single pointer slots; writes to them must go through the
//! runtime's GC write barrier so the collector observes the new edge.

use crate::{
    instance::{ReferenceType, ValueType},
    offset::at_offset,
    runtime,
};
use std::ffi::c_void;

/// Reads the value-type field at `OFFSET`.
///
/// # Safety
///
/// `instance` must be the base address of a live instance whose layout has a
/// field of type `T` at `OFFSET`.
#[inline]
pub unsafe fn read_field<T: ValueType, const OFFSET: usize>(instance: *mut c_void) -> T {
    unsafe { at_offset::<OFFSET>(instance).cast::<T>().read_unaligned() }
}

/// Writes the value-type field at `OFFSET`.
///
/// # Safety
///
/// Same contract as [`read_field`].
#[inline]
pub unsafe fn write_field<T: ValueType, const OFFSET: usize>(instance: *mut c_void, value: T) {
    unsafe { at_offset::<OFFSET>(instance).cast::<T>().write_unaligned(value) }
}

/// Reads the reference-type field at `OFFSET` and rewraps it as `T`.
///
/// # Safety
///
/// `instance` must be the base address of a live instance whose layout has a
/// reference field holding an instance of `T` (or null) at `OFFSET`.
#[inline]
pub unsafe fn read_reference_field<T: ReferenceType, const OFFSET: usize>(
    instance: *mut c_void,
) -> T {
    let slot = at_offset::<OFFSET>(instance);
    debug_assert!(crate::utils::is_aligned_for::<*mut c_void>(slot as *const u8));
    // SAFETY: reference slots are pointer-aligned in managed layouts; the
    // stored pointer satisfies T::from_raw by the layout contract.
    unsafe { T::from_raw(slot.read()) }
}

/// Stores a reference-type field at `OFFSET` through the GC write barrier.
///
/// # Safety
///
/// Same layout contract as [`read_reference_field`], and `instance` must be
/// a managed object registered with the runtime's collector.
///
/// # Panics
///
/// Panics if the runtime API has not been installed.
#[inline]
pub unsafe fn write_reference_field<T: ReferenceType, const OFFSET: usize>(
    instance: *mut c_void,
    value: &T,
) {
    let slot = at_offset::<OFFSET>(instance);
    debug_assert!(crate::utils::is_aligned_for::<*mut c_void>(slot as *const u8));
    // SAFETY: slot points into the live instance per the caller contract.
    unsafe { (runtime::api().gc_wbarrier_set_field)(instance, slot, value.as_raw()) }
}
