use std::mem::align_of;

/// Whether `ptr` is sufficiently aligned to be read as a `T`.
pub fn is_aligned_for<T>(ptr: *const u8) -> bool {
    (ptr as usize).is_multiple_of(align_of::<T>())
}
