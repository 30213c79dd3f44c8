//! # il2cpp-rs
//!
//! Runtime support primitives for machine-generated IL2CPP bindings: raw
//! instance handles, compile-time field offsets, null/cached-pointer
//! validation, field and static-field access, and boxing helpers.
//!
//! Object memory is owned by the IL2CPP runtime; this crate only computes
//! addresses into it and reads or writes through them. Nothing here allocates
//! managed memory or keeps state beyond the process-wide runtime function
//! table in [`runtime`].
//!
//! ## Features
//!
//! - `runtime-null-checks`: makes [`field_null_check!`] validate the instance
//!   on every generated field access and raise an error on failure. Without
//!   the feature the macro expands to nothing and accesses are unchecked.
//!
//! ## Environment Variables
//!
//! - `IL2CPP_RS_TRACE`: diagnostic tracing for cold paths (runtime library
//!   loading, symbol and field resolution). `"1"`, `"true"` or `"stdout"`
//!   write to stdout, `"stderr"` to stderr, anything else is treated as a
//!   file path.

#[macro_use]
mod trace;

pub mod boxing;
pub mod error;
pub mod fields;
pub mod instance;
pub mod macros;
pub mod name;
pub mod offset;
pub mod runtime;
pub mod statics;
pub mod utils;

#[cfg(test)]
mod offset_tests;
#[cfg(test)]
mod validation_tests;

pub use error::{FieldError, RuntimeError, NULL_INSTANCE_MSG};
pub use instance::{
    check_instance, check_reference, read_cached_ptr, ObjectHandle, ReferenceType,
    UnityObjectConvertible, UnityObjectHandle, ValueType, CACHED_PTR_OFFSET,
};
pub use name::NameLiteral;
pub use runtime::{FieldInfo, Il2CppClass, RuntimeApi};

/// Compile-time check that a generated wrapper type matches the size of its
/// managed layout.
#[macro_export]
macro_rules! assert_instance_size {
    ($t:ty, $size:expr) => {
        const _: () = assert!(
            ::core::mem::size_of::<$t>() == $size,
            "wrapper size does not match the managed instance layout"
        );
    };
}
