//! Instance handles and the null/identity validator.
//!
//! Handles are opaque addresses of objects whose layout belongs to the IL2CPP
//! runtime. Their capability classification is static: a type either is
//! convertible to `UnityEngine.Object` (and carries the runtime's cached
//! native pointer at a fixed offset) or it is a plain managed reference. The
//! distinction is carried by trait bounds, never by a runtime tag, so the
//! cached-pointer read is only ever compiled for types that have that slot.

use crate::offset::at_offset;
use std::{
    ffi::c_void,
    fmt::{self, Debug, Formatter},
    ptr::{self, NonNull},
};

/// Byte offset of `m_CachedPtr` inside any `UnityEngine.Object` instance.
pub const CACHED_PTR_OFFSET: usize = 0x10;

/// An opaque handle to a managed reference-type instance.
///
/// # Safety
///
/// Implementors guarantee that [`pointer`](Self::pointer) yields the base
/// address of the managed instance (or `None` for a null handle), that
/// [`from_raw`](Self::from_raw) accepts any raw pointer produced by the
/// runtime including null, and that the type is nothing more than that
/// address (no extra state the runtime could not round-trip).
pub unsafe trait ReferenceType: Copy {
    /// Wraps a raw instance pointer handed out by the runtime.
    ///
    /// # Safety
    ///
    /// `raw` must be null or the base address of a live managed instance of
    /// the wrapped type.
    unsafe fn from_raw(raw: *mut c_void) -> Self;

    /// Base address of the instance, or `None` for a null handle.
    fn pointer(&self) -> Option<NonNull<c_void>>;

    fn null() -> Self {
        // SAFETY: implementors accept null per the trait contract.
        unsafe { Self::from_raw(ptr::null_mut()) }
    }

    fn as_raw(&self) -> *mut c_void {
        self.pointer().map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.pointer().is_none()
    }
}

/// Marker for handle types convertible to `UnityEngine.Object`.
///
/// # Safety
///
/// Implementors guarantee the pointee stores the runtime's cached native
/// pointer at [`CACHED_PTR_OFFSET`], so a pointer-sized read at that offset
/// is valid on any non-null instance.
pub unsafe trait UnityObjectConvertible: ReferenceType {}

/// Marker for blittable value-type wrappers.
///
/// # Safety
///
/// Implementors guarantee their in-memory representation matches the managed
/// value-type layout byte for byte and that every bit pattern the runtime may
/// store is a valid value of the type. Managed booleans are stored as single
/// 0/1 bytes, which is why `bool` qualifies.
pub unsafe trait ValueType: Copy {}

macro_rules! impl_value_type {
    ($($t:ty),* $(,)?) => {
        $(unsafe impl ValueType for $t {})*
    };
}

impl_value_type!(bool, i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);

/// Handle to any managed reference-type instance.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ObjectHandle(Option<NonNull<c_void>>);

/// Handle to an instance convertible to `UnityEngine.Object`.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct UnityObjectHandle(Option<NonNull<c_void>>);

// Handles are serialized into object memory as single pointer slots.
const _: () = assert!(std::mem::size_of::<ObjectHandle>() == std::mem::size_of::<usize>());
const _: () = assert!(std::mem::size_of::<UnityObjectHandle>() == std::mem::size_of::<usize>());

macro_rules! impl_handle {
    ($t:ident) => {
        impl $t {
            pub const NULL: Self = Self(None);

            pub fn new(ptr: Option<NonNull<c_void>>) -> Self {
                Self(ptr)
            }
        }

        unsafe impl ReferenceType for $t {
            unsafe fn from_raw(raw: *mut c_void) -> Self {
                Self(NonNull::new(raw))
            }

            fn pointer(&self) -> Option<NonNull<c_void>> {
                self.0
            }
        }

        impl Debug for $t {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                match self.0 {
                    None => f.write_str("NULL"),
                    Some(p) => write!(f, "{}({:#?})", stringify!($t), p.as_ptr()),
                }
            }
        }
    };
}

impl_handle!(ObjectHandle);
impl_handle!(UnityObjectHandle);

unsafe impl UnityObjectConvertible for UnityObjectHandle {}

impl From<UnityObjectHandle> for ObjectHandle {
    fn from(h: UnityObjectHandle) -> Self {
        ObjectHandle(h.pointer())
    }
}

/// Reads the cached native pointer of a `UnityEngine.Object` instance.
///
/// Returns `None` either when the handle itself is null (the read is never
/// attempted) or when the runtime has zeroed the cached pointer, which it
/// does once the native side of the object is destroyed.
///
/// # Safety
///
/// A non-null handle must point to a live instance at least
/// `CACHED_PTR_OFFSET + 8` bytes large.
pub unsafe fn read_cached_ptr<T: UnityObjectConvertible>(instance: &T) -> Option<NonNull<c_void>> {
    let base = instance.pointer()?;
    let slot = at_offset::<CACHED_PTR_OFFSET>(base.as_ptr());
    debug_assert!(crate::utils::is_aligned_for::<*mut c_void>(slot as *const u8));
    // SAFETY: object bases are pointer-aligned and the offset preserves that;
    // validity of the memory is the caller's precondition.
    NonNull::new(unsafe { slot.read() })
}

/// Decides whether a field access on a `UnityEngine.Object`-convertible
/// handle is safe to perform.
///
/// With `CACHED_PTR_CHECK` the handle must be non-null *and* its cached
/// native pointer must be non-null; a structurally valid handle whose native
/// object was destroyed fails the second condition. With `CACHED_PTR_CHECK =
/// false` only handle-nullness is consulted and no memory is read. The flag
/// is a const generic, so the unwanted policy is not compiled into the call
/// site.
///
/// # Safety
///
/// When `CACHED_PTR_CHECK` is set, a non-null handle must point to a live
/// instance large enough for the cached-pointer read (see
/// [`read_cached_ptr`]).
pub unsafe fn check_instance<T: UnityObjectConvertible, const CACHED_PTR_CHECK: bool>(
    instance: &T,
) -> bool {
    if CACHED_PTR_CHECK {
        // SAFETY: forwarded caller precondition.
        unsafe { read_cached_ptr(instance).is_some() }
    } else {
        instance.pointer().is_some()
    }
}

/// Decides whether a field access on a plain managed reference is safe to
/// perform. Plain references have no cached pointer, so this never reads
/// memory and is a safe call.
#[inline]
pub fn check_reference<T: ReferenceType>(instance: &T) -> bool {
    instance.pointer().is_some()
}
