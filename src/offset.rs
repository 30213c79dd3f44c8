//! Pure address arithmetic for locating fields inside runtime-owned objects.
//!
//! The offset is a const generic so every accessor resolves its field address
//! at compile time; the fast path is a single pointer addition. No bounds or
//! null checks happen here. An offset that exceeds the true size of the
//! pointed-to object makes the resulting address meaningless, and
//! dereferencing it is undefined behavior; that precondition is owed by the
//! binding generator, which knows the managed layout.

use std::ffi::c_void;

/// Returns the address of the pointer-sized slot `OFFSET` bytes into
/// `instance`.
///
/// Wrapping arithmetic, so computing the address is well-defined for any
/// input (including null); only dereferencing the result requires `instance`
/// to be a live object at least `OFFSET + 8` bytes large.
#[inline(always)]
pub fn at_offset<const OFFSET: usize>(instance: *mut c_void) -> *mut *mut c_void {
    instance.wrapping_byte_add(OFFSET).cast()
}

/// Read-only variant of [`at_offset`]; output mutability matches the input.
#[inline(always)]
pub fn at_offset_const<const OFFSET: usize>(instance: *const c_void) -> *const *const c_void {
    instance.wrapping_byte_add(OFFSET).cast()
}
